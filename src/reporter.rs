//! Diagnostic reporting for the scan.
//!
//! The scan never writes log output directly. It is handed a [`Reporter`]
//! so callers decide where warnings go; the binary uses [`LogReporter`],
//! which forwards to the `log` facade.
use log::*;

#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    fn warn(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards diagnostics to the global `log` logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter {}

impl LogReporter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Reporter for LogReporter {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn debug(&self, message: &str) {
        debug!("{message}");
    }
}
