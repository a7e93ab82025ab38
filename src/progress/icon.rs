//! Animated timer icon.

use crate::config::TimerVariant;

use std::time::{Duration, Instant};
use tracing::trace;

/// Minimum time a glyph stays on screen before the next one is shown.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(100);

/// Ring index over a fixed glyph sequence.
///
/// The glyph moves one step per [`ROTATION_INTERVAL`] of wall-clock time, no
/// matter how often the bar is redrawn. An increasing timer steps forward
/// through the sequence and a decreasing one steps backward.
#[derive(Debug, Clone)]
pub(crate) struct IconCycle {
    glyphs: Vec<String>,
    index: usize,
    last_rotation: Instant,
    direction: TimerVariant,
}

impl IconCycle {
    /// Create a cycle positioned on the first glyph, or `None` if there is
    /// no glyph to show.
    pub fn new(glyphs: Vec<String>, direction: TimerVariant, now: Instant) -> Option<Self> {
        if glyphs.is_empty() {
            return None;
        }
        Some(Self {
            glyphs,
            index: 0,
            last_rotation: now,
            direction,
        })
    }

    /// The glyph currently shown.
    pub fn current(&self) -> &str {
        &self.glyphs[self.index]
    }

    /// Return the glyph to draw at `now`, then rotate if it has been shown
    /// for at least [`ROTATION_INTERVAL`].
    pub fn tick(&mut self, now: Instant) -> String {
        let glyph = self.current().to_string();
        if now.saturating_duration_since(self.last_rotation) >= ROTATION_INTERVAL {
            let len = self.glyphs.len();
            self.index = match self.direction {
                TimerVariant::Increasing => (self.index + 1) % len,
                TimerVariant::Decreasing => (self.index + len - 1) % len,
            };
            self.last_rotation = now;
            trace!(index = self.index, "Rotated timer icon");
        }
        glyph
    }
}
