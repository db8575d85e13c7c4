//! Diagnostic sink for facade-level errors.

use std::cell::RefCell;
use std::rc::Rc;

/// Single-level error sink.
pub trait Diagnostics {
    fn error(&self, tag: &str, message: &str);
}

/// Forwards to `log::error!`, using the tag as the log target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn error(&self, tag: &str, message: &str) {
        log::error!(target: tag, "{message}");
    }
}

/// Records every diagnostic. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(tag, message)` pairs, oldest first.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn error(&self, tag: &str, message: &str) {
        self.entries
            .borrow_mut()
            .push((tag.to_string(), message.to_string()));
    }
}
