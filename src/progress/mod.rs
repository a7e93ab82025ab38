//! Progress module containing the render engine and its state.
//!
//! # Overview
//!
//! The progress module is organized into three components:
//!
//! - `bar` - the [`ProgressBar`] render engine
//! - `clock` - the [`StartTime`] baseline shared between bars
//! - `icon` - the glyph cycle driving the animated timer icon
//!
//! # Examples
//!
//! ## Sharing a Start Time
//!
//! ```rust
//! use spb::{ProgressBarBuilder, StartTime};
//!
//! # fn main() -> spb::Result<()> {
//! let start = StartTime::new();
//! let first = ProgressBarBuilder::new().build_with_writer(200, Vec::new(), start.clone())?;
//! let second = ProgressBarBuilder::new().build_with_writer(200, Vec::new(), start.clone())?;
//! assert!(start.is_set());
//! # drop((first, second));
//! # Ok(())
//! # }
//! ```

pub(crate) mod bar;
pub(crate) mod clock;
pub(crate) mod icon;

pub use bar::{ProgressBar, HIDE_CURSOR, SHOW_CURSOR, STATIC_TIMER_ICON};
pub use clock::StartTime;
pub use icon::ROTATION_INTERVAL;
