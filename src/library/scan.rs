use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use lofty::error::LoftyError;
use lofty::picture::PictureType;
use lofty::prelude::{AudioFile, TaggedFileExt};
use lofty::tag::{Accessor, Tag};
use thiserror::Error;
use tracing::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{COVER_THUMB_SIZE, CoverThumb, Track};

/// Failure while building the playlist. Carries enough context to point the
/// user at the file that broke the scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory itself could not be listed.
    #[error("cannot list music directory: {0}")]
    List(#[from] walkdir::Error),
    /// A discovered file path could not be made absolute.
    #[error("cannot resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        source: io::Error,
    },
    /// A discovered file could not be parsed by the tag reader.
    #[error("cannot read {}: {source}", path.display())]
    Tag {
        path: PathBuf,
        source: LoftyError,
    },
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn extension_slot(path: &Path, exts: &[String]) -> Option<usize> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())?
        .to_ascii_lowercase();
    exts.iter().position(|e| e == &ext)
}

/// List playable files directly inside `dir`.
///
/// Files are matched case-insensitively against the configured extensions and
/// returned one extension group at a time, each group in directory listing
/// order. Subdirectories are never entered.
pub fn discover(dir: &Path, settings: &LibrarySettings) -> Result<Vec<PathBuf>, ScanError> {
    let exts = normalized_extensions(settings);
    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); exts.len()];

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if !settings.include_hidden && is_hidden(path) {
            continue;
        }
        if let Some(slot) = extension_slot(path, &exts) {
            groups[slot].push(path.to_path_buf());
        }
    }

    Ok(groups.concat())
}

/// Build the playlist: discover files, then read tags and cover art for each.
/// Any unreadable file aborts the whole scan.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Result<Vec<Track>, ScanError> {
    let files = discover(dir, settings)?;

    let mut tracks = Vec::with_capacity(files.len());
    for path in &files {
        tracks.push(read_track(path)?);
    }
    Ok(tracks)
}

/// Read one file into a `Track`. The stored path is always absolute.
pub fn read_track(path: &Path) -> Result<Track, ScanError> {
    let path = std::path::absolute(path).map_err(|source| ScanError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    let tagged = lofty::read_from_path(&path).map_err(|source| ScanError::Tag {
        path: path.clone(),
        source,
    })?;

    let duration = tagged.properties().duration();
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

    let title = tag.and_then(|t| clean(t.title()));
    let artist = tag.and_then(|t| clean(t.artist()));
    let genre = tag.and_then(|t| clean(t.genre()));
    let year = tag.and_then(|t| t.year());
    let cover = tag.and_then(|t| cover_thumb(&path, t));

    Ok(Track {
        path,
        title,
        artist,
        duration,
        genre,
        year,
        cover,
    })
}

fn clean(value: Option<Cow<'_, str>>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Decode the embedded front cover (or the first picture) down to the fixed
/// thumbnail size. A broken picture is dropped with a warning, not an error.
fn cover_thumb(path: &Path, tag: &Tag) -> Option<CoverThumb> {
    let picture = tag
        .get_picture_type(PictureType::CoverFront)
        .or_else(|| tag.pictures().first())?;

    match image::load_from_memory(picture.data()) {
        Ok(img) => Some(
            img.thumbnail_exact(COVER_THUMB_SIZE, COVER_THUMB_SIZE)
                .to_rgb8(),
        ),
        Err(err) => {
            warn!("ignoring unreadable cover art in {}: {err}", path.display());
            None
        }
    }
}
