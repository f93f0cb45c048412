//! Volume step arithmetic used by the engine thread.
//!
//! Steps are fixed at 0.05 and clamp to the exact endpoints: a step that
//! would reach or pass a bound lands on the bound itself.

pub(crate) const VOLUME_STEP: f32 = 0.05;

pub(crate) fn step_up(volume: f32) -> f32 {
    if volume + VOLUME_STEP >= 1.0 {
        1.0
    } else {
        volume + VOLUME_STEP
    }
}

pub(crate) fn step_down(volume: f32) -> f32 {
    if volume - VOLUME_STEP <= 0.0 {
        0.0
    } else {
        volume - VOLUME_STEP
    }
}
