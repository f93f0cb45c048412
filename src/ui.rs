//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Row, Table, TableState, Wrap},
};
use std::time::Duration;

use crate::app::{App, PlaybackState};
use crate::audio::PlaybackInfo;
use crate::config::UiSettings;
use crate::library::{COVER_THUMB_SIZE, CoverThumb};

const CONTROLS: [(&str, &str); 5] = [
    ("p/space", "play/pause"),
    ("v", "prev"),
    ("n", "next"),
    ("+/-", "volume"),
    ("q", "quit"),
];

/// Render the controls help text for the footer.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(key, action)| format!("[{}] {}", key, action))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Parse a `#RRGGBB` string into a terminal color.
fn color_from_hex(value: &str) -> Option<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Render a cover thumbnail as half-block text, two pixel rows per line.
///
/// `▀` takes the upper pixel as foreground and the lower one as background,
/// which keeps the thumbnail square-ish in a terminal cell grid.
fn cover_lines(thumb: &CoverThumb) -> Vec<Line<'static>> {
    let (width, height) = thumb.dimensions();
    let mut lines = Vec::with_capacity(height.div_ceil(2) as usize);
    for y in (0..height).step_by(2) {
        let mut spans = Vec::with_capacity(width as usize);
        for x in 0..width {
            let top = thumb.get_pixel(x, y).0;
            let bottom = if y + 1 < height {
                thumb.get_pixel(x, y + 1).0
            } else {
                top
            };
            spans.push(Span::styled(
                "▀",
                Style::default()
                    .fg(Color::Rgb(top[0], top[1], top[2]))
                    .bg(Color::Rgb(bottom[0], bottom[1], bottom[2])),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
///
/// `snapshot` is the engine state this frame renders from. The caller passes
/// the same snapshot it synced `app.playback` from, so the status word and
/// the playing marker always agree.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    snapshot: Option<&PlaybackInfo>,
    ui_settings: &UiSettings,
) {
    let accent = color_from_hex(&ui_settings.accent).unwrap_or(Color::Reset);
    let border_style =
        Style::default().fg(color_from_hex(&ui_settings.panel_border).unwrap_or(Color::Reset));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" reprise ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let state = match app.playback {
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        parts.push(state.to_string());

        if let Some(info) = snapshot {
            if let Some(track) = info.index.and_then(|i| app.tracks.get(i)) {
                parts.push(format!("Track: {}", track.display_line()));
            }
            parts.push(format!("Vol: {:.0}%", info.volume * 100.0));
        }

        if let Some(dir) = &app.current_dir {
            parts.push(format!("Dir: {}", dir));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .border_style(border_style)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(COVER_THUMB_SIZE as u16 + 2),
        ])
        .split(chunks[2]);

    // Playlist table
    {
        let engine_index = snapshot.and_then(|info| info.index);
        let rows: Vec<Row> = app
            .tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let marker = if engine_index == Some(i) { "▶" } else { "" };
                Row::new(vec![
                    marker.to_string(),
                    track.display_title(),
                    track.artist.clone().unwrap_or_else(|| "-".to_string()),
                    format_mmss(track.duration),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Length(7),
        ];
        let table = Table::new(rows, widths)
            .header(
                Row::new(vec!["", "Title", "Artist", "Time"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" playlist "),
            )
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = TableState::default();
        if app.has_tracks() {
            state.select(Some(app.current));
        }
        frame.render_stateful_widget(table, main[0], &mut state);
    }

    // Cover art panel
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" cover ");
        let cover = app.tracks.get(app.current).and_then(|t| t.cover.as_ref());
        let par = match cover {
            Some(thumb) => Paragraph::new(cover_lines(thumb)).alignment(Alignment::Center),
            None => Paragraph::new("no cover art").alignment(Alignment::Center),
        };
        frame.render_widget(par.block(block), main[1]);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[3]);
}
