use std::path::PathBuf;
use std::time::Duration;

use crate::library::Track;

use super::sink::open_source;
use super::thread::{Toggle, toggle};
use super::types::{EngineCmd, PlaybackInfo};
use super::volume::{VOLUME_STEP, step_down, step_up};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

fn stub_track(path: PathBuf) -> Track {
    Track {
        path,
        title: None,
        artist: None,
        duration: Duration::from_secs(1),
        genre: None,
        year: None,
        cover: None,
    }
}

#[test]
fn step_up_adds_a_step_and_clamps_to_one() {
    assert!(close(step_up(0.0), VOLUME_STEP));
    assert!(close(step_up(0.5), 0.55));
    assert_eq!(step_up(0.96), 1.0);
    assert_eq!(step_up(1.0), 1.0);
}

#[test]
fn step_down_removes_a_step_and_clamps_to_zero() {
    assert!(close(step_down(1.0), 0.95));
    assert!(close(step_down(0.5), 0.45));
    assert_eq!(step_down(0.04), 0.0);
    assert_eq!(step_down(0.05), 0.0);
    assert_eq!(step_down(0.0), 0.0);
}

#[test]
fn repeated_steps_pin_to_the_bounds() {
    let mut v = 0.3;
    for _ in 0..30 {
        v = step_up(v);
    }
    assert_eq!(v, 1.0);

    for _ in 0..30 {
        v = step_down(v);
    }
    assert_eq!(v, 0.0);
}

#[test]
fn toggling_twice_returns_a_playing_sink_to_playing() {
    assert_eq!(toggle(false, false), Toggle::Pause);
    // The pause left audio in the sink, so the way back produces sound.
    assert_eq!(toggle(true, false), Toggle::Resume { playing: true });
}

#[test]
fn toggle_resumes_silently_once_the_sink_drained() {
    assert_eq!(toggle(true, true), Toggle::Resume { playing: false });
    // Drained while nominally playing still resumes rather than pauses.
    assert_eq!(toggle(false, true), Toggle::Resume { playing: false });
}

#[test]
fn engine_commands_arrive_in_send_order() {
    let (tx, rx) = std::sync::mpsc::channel();
    for cmd in [
        EngineCmd::Play(2),
        EngineCmd::Rewind,
        EngineCmd::Stop,
        EngineCmd::Quit { fade_out_ms: 0 },
    ] {
        tx.send(cmd).unwrap();
    }
    drop(tx);

    assert!(matches!(rx.recv(), Ok(EngineCmd::Play(2))));
    assert!(matches!(rx.recv(), Ok(EngineCmd::Rewind)));
    assert!(matches!(rx.recv(), Ok(EngineCmd::Stop)));
    assert!(matches!(rx.recv(), Ok(EngineCmd::Quit { fade_out_ms: 0 })));
    assert!(rx.recv().is_err());
}

#[test]
fn open_source_absorbs_a_missing_file() {
    let track = stub_track(PathBuf::from("/no/such/dir/gone.mp3"));
    assert!(open_source(&track).is_none());
}

#[test]
fn open_source_absorbs_an_undecodable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("static.mp3");
    std::fs::write(&path, b"not audio").unwrap();

    let track = stub_track(path);
    assert!(open_source(&track).is_none());
}

#[test]
fn playback_info_starts_unloaded_at_full_volume() {
    let info = PlaybackInfo::default();
    assert_eq!(info.index, None);
    assert!(!info.playing);
    assert_eq!(info.volume, 1.0);
}
