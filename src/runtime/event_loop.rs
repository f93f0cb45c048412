use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioPlayer, EngineCmd};
use crate::config;
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and state sync with
/// the engine thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // One engine read per iteration; the frame renders from it.
        let snapshot = app.sync_playback();

        terminal.draw(|f| ui::draw(f, app, snapshot.as_ref(), &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, audio_player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Translate one key press into index mutations and engine commands.
/// Returns `true` when the loop should stop.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            audio_player.quit_softly(Duration::from_millis(settings.audio.quit_fade_out_ms));
            return true;
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = audio_player.send(EngineCmd::TogglePause);
        }
        KeyCode::Char('n') => {
            // The engine only hears about committed index changes.
            if let Some(i) = app.next_track() {
                let _ = audio_player.send(EngineCmd::Play(i));
            }
        }
        KeyCode::Char('v') => {
            if let Some(i) = app.prev_track() {
                let _ = audio_player.send(EngineCmd::Play(i));
            }
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let _ = audio_player.send(EngineCmd::VolumeUp);
        }
        KeyCode::Char('-') => {
            let _ = audio_player.send(EngineCmd::VolumeDown);
        }
        _ => {}
    }

    false
}
