//! spb draws a simple progress indicator on a single console line and
//! rewrites it in place on every tick: a bar, the percent done, an elapsed
//! or remaining time counter, the transfer speed and the number of bytes
//! transferred.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spb::{ProgressBarBuilder, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut pb = ProgressBarBuilder::new().stop(100_000).build()?;
//! for _ in pb.by_ref() {
//!     // your code ...
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`config`] - Display options, the `ProgressBarBuilder` and validation
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - The `ProgressBar` render engine and its shared start time
//! - [`utils`] - Number and clock formatting

pub mod config;
pub mod error;
pub mod progress;
pub mod utils;

pub use config::{
    BarVariant, Color, ProgressBarBuilder, ProgressConfig, TimerIcon, TimerVariant, Toggle,
    ValidConfig,
};
pub use error::{Error, Result};
pub use progress::{ProgressBar, StartTime};
