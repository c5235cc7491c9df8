/// Configuration for a progress indicator operation
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Operation name (e.g., "Downloading")
    pub operation: String,

    /// Context-specific message, usually the archive file name
    pub context: String,

    /// Total bytes for determinate operations (None for indeterminate/spinner)
    pub total: Option<u64>,
}

impl ProgressConfig {
    pub fn new(operation: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: context.into(),
            total: None,
        }
    }

    /// Sets the total for determinate operations
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }
}

/// Which kind of output an indicator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRendererKind {
    /// Animated bar on a terminal
    Tty,
    /// Plain dots for logs and pipes
    NonTty,
    Silent,
}
