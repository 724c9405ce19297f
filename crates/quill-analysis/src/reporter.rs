//! Terminal rendering for diagnostics

use std::collections::HashMap;

use codespan_reporting::diagnostic::{Diagnostic as Rendered, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};

use crate::diagnostic::Diagnostic;
use crate::program::Location;

/// Pretty-printer for analysis diagnostics.
///
/// Drivers register each analyzed source once, then emit the diagnostic
/// batch the executor returned. The framework itself never renders;
/// [`crate::registry::Registry::run`] hands back plain [`Diagnostic`]
/// values.
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    file_ids: HashMap<Location, usize>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            file_ids: HashMap::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    /// Register the source text behind `location`.
    pub fn add_source(&mut self, location: Location, source: impl Into<String>) {
        let file_id = self.files.add(location.to_string(), source.into());
        self.file_ids.insert(location, file_id);
    }

    /// Render one diagnostic. Locations without registered source render
    /// without a snippet.
    pub fn report(&self, diagnostic: &Diagnostic) {
        let rendered = match self.file_ids.get(&diagnostic.location) {
            Some(&file_id) => Rendered::warning()
                .with_message(diagnostic.message.clone())
                .with_labels(vec![Label::primary(
                    file_id,
                    diagnostic.span.start..diagnostic.span.end,
                )]),
            None => Rendered::warning()
                .with_message(format!("{}: {}", diagnostic.location, diagnostic.message)),
        };

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &rendered);
    }

    /// Render a whole batch in order.
    pub fn report_all(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
