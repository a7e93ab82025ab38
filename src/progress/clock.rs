//! Shared start time.
//!
//! Every bar measures elapsed time from a [`StartTime`]. Clones share the
//! same baseline, which is fixed by whichever bar reads it first and never
//! changes afterwards, so bars created one after another report times on the
//! same scale.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Initialize-once baseline shared between progress bars.
#[derive(Debug, Clone, Default)]
pub struct StartTime {
    baseline: Arc<OnceLock<Instant>>,
}

impl StartTime {
    /// An unset baseline. The first call to [`StartTime::get`] fixes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A baseline fixed at `instant`.
    pub fn at(instant: Instant) -> Self {
        let baseline = OnceLock::new();
        let _ = baseline.set(instant);
        Self {
            baseline: Arc::new(baseline),
        }
    }

    /// The baseline shared by every bar created with [`ProgressBar::new`].
    ///
    /// [`ProgressBar::new`]: crate::ProgressBar::new
    pub fn process() -> Self {
        static PROCESS: OnceLock<StartTime> = OnceLock::new();
        PROCESS.get_or_init(StartTime::new).clone()
    }

    /// The baseline, fixing it to now if no one has read it yet.
    pub fn get(&self) -> Instant {
        *self.baseline.get_or_init(Instant::now)
    }

    /// Whether the baseline has been fixed.
    pub fn is_set(&self) -> bool {
        self.baseline.get().is_some()
    }

    /// Time between the baseline and `now`, zero if `now` is earlier.
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.get())
    }
}
