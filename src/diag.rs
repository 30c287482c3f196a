//! Diagnostic channel for recoverable resolution problems.
//!
//! Fatal conditions abort resolution through `Result`; everything else
//! degrades the affected structure and lands here. Each warning is also
//! mirrored to the `tracing` log so resolution failures show up even
//! when the caller never inspects the report.

use std::fmt;

/// Classification of a recoverable resolution warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A binding named a command not present in the command table.
    UnknownCommand,
    /// A layout section title did not resolve to a layout algorithm.
    UnknownLayout,
    /// No usable output section was declared; the built-in default
    /// document was substituted.
    MissingOutputSection,
    /// A rule pattern failed to compile into a matcher.
    InvalidPattern,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand => write!(f, "unknown command"),
            Self::UnknownLayout => write!(f, "unknown layout"),
            Self::MissingOutputSection => write!(f, "missing output section"),
            Self::InvalidPattern => write!(f, "invalid pattern"),
        }
    }
}

/// A single recoverable warning.
#[derive(Debug, Clone)]
pub struct Warning {
    /// What went wrong.
    pub kind: WarningKind,
    /// Human-readable detail, including the offending name.
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Collector for warnings emitted during a resolution pass.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    /// Records a warning and mirrors it to the log.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(kind = %kind, "{message}");
        self.warnings.push(Warning { kind, message });
    }

    /// All warnings recorded so far, in emission order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }
}
