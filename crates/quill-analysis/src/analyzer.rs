//! Analyzer contract: the trait, typed result keys, and the per-run pass

use std::any::Any;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::program::Program;

/// A named, composable check over one [`Program`].
///
/// Analyzers are registered once at bootstrap and shared by every analysis
/// session afterwards, so implementations must not carry per-program state.
/// The result of a run is memoized per session and handed to dependents
/// through their [`Pass`].
pub trait Analyzer: Send + Sync + 'static {
    /// Result published to dependent analyzers.
    type Output: Send + Sync + 'static;

    /// Names of the analyzers whose results this one consumes.
    fn requires(&self) -> &[&'static str] {
        &[]
    }

    /// Short summary for driver listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Execute the check. Findings go through [`Pass::report`]; the returned
    /// value is memoized for dependents. An error aborts the session's
    /// remaining schedule.
    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<Self::Output>;
}

/// Typed handle naming an analyzer together with its output type.
///
/// Registration and dependency lookup both go through the key, so a result
/// can only be read back at the type it was registered with.
pub struct AnalyzerKey<T> {
    name: &'static str,
    _output: PhantomData<fn() -> T>,
}

impl<T> AnalyzerKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _output: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for AnalyzerKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AnalyzerKey<T> {}

/// Type-erased memoized analyzer result.
pub(crate) type SharedResult = Arc<dyn Any + Send + Sync>;

/// Execution context handed to [`Analyzer::run`].
///
/// Lives only for that run. Exposes the program under analysis, the memoized
/// results of the analyzer's declared requirements, and the report channel.
pub struct Pass<'a> {
    /// Program under analysis.
    pub program: &'a Program,
    analyzer: &'static str,
    results: HashMap<&'static str, SharedResult>,
    sink: &'a DiagnosticSink,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(
        program: &'a Program,
        analyzer: &'static str,
        results: HashMap<&'static str, SharedResult>,
        sink: &'a DiagnosticSink,
    ) -> Self {
        Self {
            program,
            analyzer,
            results,
            sink,
        }
    }

    /// Name of the analyzer this pass belongs to.
    pub fn analyzer(&self) -> &'static str {
        self.analyzer
    }

    /// Memoized result of a required analyzer.
    ///
    /// # Panics
    /// If `key` was not declared in [`Analyzer::requires`], or if the
    /// registered analyzer's output type differs from the key's. Both are
    /// bugs in the analyzer definition, not runtime conditions.
    pub fn result_of<T: Send + Sync + 'static>(&self, key: AnalyzerKey<T>) -> &T {
        let result = self.results.get(key.name()).unwrap_or_else(|| {
            panic!(
                "analyzer '{}' did not declare a requirement on '{}'",
                self.analyzer,
                key.name()
            )
        });
        result.downcast_ref::<T>().unwrap_or_else(|| {
            panic!(
                "result of analyzer '{}' does not match the type of its key",
                key.name()
            )
        })
    }

    /// Record one finding. Always succeeds; reporting has no bearing on
    /// whether the analyzer itself succeeds or fails.
    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.push(diagnostic);
    }
}
