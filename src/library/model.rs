use std::path::PathBuf;
use std::time::Duration;

/// Side length, in pixels, of the cover thumbnail kept on each track.
pub const COVER_THUMB_SIZE: u32 = 20;

/// Fixed-size cover bitmap, produced once at scan time.
pub type CoverThumb = image::RgbImage;

/// One playable item: tag metadata plus the resolved file location.
///
/// Built once when the playlist is loaded and never mutated afterwards.
/// `path` is always absolute.
#[derive(Clone, Debug)]
pub struct Track {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration: Duration,
    // Extracted with the rest of the tag; no panel displays these two.
    #[allow(dead_code)]
    pub genre: Option<String>,
    #[allow(dead_code)]
    pub year: Option<u32>,
    pub cover: Option<CoverThumb>,
}

impl Track {
    /// Tag title, or the file stem when the file carries no usable title.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => self
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("UNKNOWN")
                .to_string(),
        }
    }

    /// `artist - title` when an artist tag exists, otherwise just the title.
    pub fn display_line(&self) -> String {
        match self.artist.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => format!("{} - {}", a, self.display_title()),
            _ => self.display_title(),
        }
    }
}
