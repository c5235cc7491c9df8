//! Progress indicator module for download feedback
//!
//! This module provides a consistent interface for displaying download
//! progress. It supports different display styles (animated progress bars,
//! plain dots, or silent) based on the environment and user preferences.

mod factory;
mod indicatif;
mod silent;
mod simple;
pub mod types;

pub use factory::ProgressFactory;
pub use self::indicatif::IndicatifProgress;
pub use silent::SilentProgress;
pub use simple::SimpleProgress;
pub use types::{ProgressConfig, ProgressRendererKind};

/// Core trait for progress indicator implementations
///
/// Implementations include:
/// - `IndicatifProgress` - Animated byte bar for terminal environments
/// - `SimpleProgress` - One dot per percent for non-terminal environments (CI/CD, logs)
/// - `SilentProgress` - No output (Null Object pattern) for --no-progress flag
pub trait ProgressIndicator: Send + Sync {
    /// Start a new progress operation
    ///
    /// For determinate operations (with total), a progress bar is shown.
    /// For indeterminate operations (without total), a spinner is shown.
    fn start(&mut self, config: ProgressConfig);

    /// Moves the indicator to `current` bytes
    fn update(&mut self, current: u64);

    /// Complete the progress operation successfully
    fn complete(&mut self, message: Option<String>);

    /// Marks the operation as failed
    fn error(&mut self, message: String);
}
