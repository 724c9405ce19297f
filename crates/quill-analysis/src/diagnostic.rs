//! Diagnostic records and the per-session sink

use std::cell::RefCell;
use std::fmt;

use quill_syntax::Span;

use crate::program::Location;

/// One reported finding.
///
/// The span may be a point (`start == end`) for findings that mark a single
/// position, such as a missing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub span: Span,
    pub message: String,
}

impl Diagnostic {
    pub fn new(location: Location, span: Span, message: impl Into<String>) -> Self {
        Self {
            location,
            span,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}..{}: {}",
            self.location, self.span.start, self.span.end, self.message
        )
    }
}

/// Session-scoped accumulator for reported findings.
///
/// Reporting is fire-and-forget and preserves append order: within one
/// analyzer, diagnostics come out in report order; across analyzers, in the
/// executor's run order. Interior mutability lets analyzers report through
/// a shared borrow of their pass.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Consume the sink, yielding diagnostics in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}
