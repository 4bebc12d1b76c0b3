//! Slide advancement: manual navigation, music-synchronized autoplay,
//! and the audio volume ramp.
//!
//! Two drivers exist over the same "current index" state and are never
//! active in the same session: the manual navigator (arrow keys and
//! buttons, wrapping) and the autoplay timer (fixed dwell per slide,
//! derived from the track duration, stopping at the last slide).

use std::time::Duration;

/// Seconds left unscheduled at the end of the track so the final slide
/// is never cut off mid-transition.
const AUTOPLAY_TAIL_BUFFER: Duration = Duration::from_secs(2);

/// Interval between volume ramp steps.
pub const FADE_TICK: Duration = Duration::from_millis(200);
/// Volume change applied per ramp step.
const FADE_STEP: f32 = 0.05;

/// Manual navigation state. Next/previous wrap modulo the slide count.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator {
    pub index: usize,
}

impl Navigator {
    pub fn next(&mut self, total: usize) {
        if total > 0 {
            self.index = (self.index + 1) % total;
        }
    }

    pub fn previous(&mut self, total: usize) {
        if total > 0 {
            self.index = (self.index + total - 1) % total;
        }
    }

    pub fn is_last(&self, total: usize) -> bool {
        total > 0 && self.index == total - 1
    }
}

/// How long each slide stays up in autoplay: the track duration minus a
/// tail buffer, split evenly over the deck.
pub fn dwell_per_slide(track_duration: Duration, slide_count: usize) -> Option<Duration> {
    if slide_count == 0 {
        return None;
    }
    let usable = track_duration.checked_sub(AUTOPLAY_TAIL_BUFFER)?;
    if usable.is_zero() {
        return None;
    }
    Some(usable / slide_count as u32)
}

/// The autoplay driver. Created when the user starts the presentation;
/// its dwell interval feeds the repeating timer subscription, and each
/// timer tick advances the index until the last slide. The timer keeps
/// firing idle after that; teardown happens with the mode.
#[derive(Debug, Clone, Copy)]
pub struct Autoplay {
    pub dwell: Duration,
    pub index: usize,
}

impl Autoplay {
    pub fn new(dwell: Duration) -> Self {
        Self { dwell, index: 0 }
    }

    /// Advance one slide. Returns `false` once the end is reached, so
    /// the index never moves past `total - 1`.
    pub fn tick(&mut self, total: usize) -> bool {
        if self.index + 1 >= total {
            return false;
        }
        self.index += 1;
        true
    }
}

/// A cancellable volume ramp toward a target, stepped on a fixed tick.
///
/// Replaces the web version's fire-and-forget `setInterval` fades: the
/// ramp is explicit state, owned by whoever owns the audio, and simply
/// stops existing when the target is reached or the owner goes away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRamp {
    pub current: f32,
    pub target: f32,
}

impl VolumeRamp {
    pub fn fade_in(from: f32) -> Self {
        Self {
            current: from,
            target: 1.0,
        }
    }

    pub fn fade_out(from: f32) -> Self {
        Self {
            current: from,
            target: 0.0,
        }
    }

    /// One ramp step; returns the volume to apply. The ramp is done
    /// when [`VolumeRamp::finished`] turns true.
    pub fn step(&mut self) -> f32 {
        if self.current < self.target {
            self.current = (self.current + FADE_STEP).min(self.target);
        } else {
            self.current = (self.current - FADE_STEP).max(self.target);
        }
        self.current
    }

    pub fn finished(&self) -> bool {
        self.current == self.target
    }
}
