//! Analyzer registry

use crate::analyzer::{Analyzer, AnalyzerKey, Pass, SharedResult};
use crate::error::{AnalysisError, AnalysisResult};

use std::sync::Arc;

/// Object-safe view of an [`Analyzer`], with the output type erased behind
/// a shared handle. The typed key restores it on the consuming side.
pub(crate) trait ErasedAnalyzer: Send + Sync {
    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<SharedResult>;
}

impl<A: Analyzer> ErasedAnalyzer for A {
    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<SharedResult> {
        let output = Analyzer::run(self, pass)?;
        Ok(Arc::new(output))
    }
}

pub(crate) struct Entry {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) requires: Vec<&'static str>,
    pub(crate) analyzer: Box<dyn ErasedAnalyzer>,
}

/// Table of available analyzers.
///
/// Written only during bootstrap; afterwards it is read-only and may be
/// shared freely across concurrent analysis sessions. Entries keep their
/// registration order, which is also the tie-breaking order of the
/// executor's schedule.
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `analyzer` under `key`'s name.
    ///
    /// Duplicate names are a configuration error; the existing entry is
    /// left untouched.
    pub fn register<A: Analyzer>(
        &mut self,
        key: AnalyzerKey<A::Output>,
        analyzer: A,
    ) -> AnalysisResult<()> {
        let name = key.name();
        if self.index_of(name).is_some() {
            return Err(AnalysisError::duplicate_analyzer(name));
        }
        self.entries.push(Entry {
            name,
            description: analyzer.description(),
            requires: analyzer.requires().to_vec(),
            analyzer: Box::new(analyzer),
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// `(name, description)` pairs in registration order, for driver
    /// listings.
    pub fn analyzers(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (entry.name, entry.description))
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub(crate) fn entry(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
