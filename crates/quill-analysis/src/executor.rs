//! Dependency-ordered analyzer execution
//!
//! `Registry::run` resolves the requested analyzers, closes the set over
//! their requirements, orders it topologically, and executes each analyzer
//! exactly once, publishing memoized results to dependents as it goes.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use log::{debug, trace};

use crate::analyzer::{Pass, SharedResult};
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::{AnalysisError, AnalysisResult};
use crate::program::Program;
use crate::registry::Registry;

impl Registry {
    /// Run the named analyzers, and everything they transitively require,
    /// over one program.
    ///
    /// Diagnostics come back ordered by the schedule's run order; within one
    /// analyzer, by report order. The schedule itself is deterministic:
    /// analyzers without ordering constraints run in registration order.
    ///
    /// Configuration problems (unknown name, requirement cycle) fail before
    /// anything executes. A failing analyzer aborts the rest of the
    /// schedule; the returned [`AnalysisError::AnalyzerFailed`] carries the
    /// diagnostics collected up to that point.
    pub fn run(&self, program: &Program, names: &[&str]) -> AnalysisResult<Vec<Diagnostic>> {
        let order = self.schedule(names)?;
        debug!(
            "execution order: {:?}",
            order
                .iter()
                .map(|&index| self.entry(index).name)
                .collect::<Vec<_>>()
        );

        let sink = DiagnosticSink::new();
        let mut cache: HashMap<&'static str, SharedResult> = HashMap::new();

        for &index in &order {
            let entry = self.entry(index);
            trace!("running analyzer '{}'", entry.name);

            let mut results = HashMap::new();
            for &requirement in &entry.requires {
                // Topological order guarantees the requirement has run.
                if let Some(result) = cache.get(requirement) {
                    results.insert(requirement, Arc::clone(result));
                }
            }

            let pass = Pass::new(program, entry.name, results, &sink);
            match entry.analyzer.run(&pass) {
                Ok(result) => {
                    cache.insert(entry.name, result);
                }
                Err(source) => {
                    return Err(AnalysisError::AnalyzerFailed {
                        name: entry.name,
                        source,
                        diagnostics: sink.into_diagnostics(),
                    });
                }
            }
        }

        Ok(sink.into_diagnostics())
    }

    /// Registry indices of the transitive closure of `names`, in a valid
    /// execution order.
    fn schedule(&self, names: &[&str]) -> AnalysisResult<Vec<usize>> {
        // Close the requested set over `requires`, resolving names once.
        let mut requirements: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut work = Vec::new();
        for &name in names {
            let index = self
                .index_of(name)
                .ok_or_else(|| AnalysisError::unknown_analyzer(name))?;
            work.push(index);
        }
        while let Some(index) = work.pop() {
            if requirements.contains_key(&index) {
                continue;
            }
            let entry = self.entry(index);
            let mut resolved = Vec::new();
            for &requirement in &entry.requires {
                let required = self.index_of(requirement).ok_or_else(|| {
                    AnalysisError::unknown_requirement(entry.name, requirement)
                })?;
                if !resolved.contains(&required) {
                    resolved.push(required);
                }
                work.push(required);
            }
            requirements.insert(index, resolved);
        }

        // Kahn's algorithm. The ready set is ordered by registration index,
        // which breaks ties between unrelated analyzers deterministically.
        let mut in_degree: BTreeMap<usize, usize> = requirements
            .iter()
            .map(|(&index, required)| (index, required.len()))
            .collect();
        let mut dependents: BTreeMap<usize, Vec<usize>> = requirements
            .keys()
            .map(|&index| (index, Vec::new()))
            .collect();
        for (&index, required) in &requirements {
            for &requirement in required {
                if let Some(entries) = dependents.get_mut(&requirement) {
                    entries.push(index);
                }
            }
        }

        let mut ready: BTreeSet<usize> = in_degree
            .iter()
            .filter(|&(_, &degree)| degree == 0)
            .map(|(&index, _)| index)
            .collect();
        let mut order = Vec::with_capacity(requirements.len());
        while let Some(index) = ready.pop_first() {
            order.push(index);
            if let Some(entries) = dependents.get(&index) {
                for &dependent in entries {
                    if let Some(degree) = in_degree.get_mut(&dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            ready.insert(dependent);
                        }
                    }
                }
            }
        }

        if order.len() < requirements.len() {
            let stuck: BTreeSet<usize> = in_degree
                .iter()
                .filter(|&(_, &degree)| degree > 0)
                .map(|(&index, _)| index)
                .collect();
            let start = stuck.first().copied().unwrap_or_default();
            let member = cycle_member(&requirements, &stuck, start);
            return Err(AnalysisError::dependency_cycle(self.entry(member).name));
        }

        Ok(order)
    }
}

/// Follow unscheduled requirement edges until an analyzer repeats; the
/// repeated analyzer lies on a cycle. Every stuck analyzer has at least one
/// stuck requirement, so the walk cannot run dry.
fn cycle_member(
    requirements: &BTreeMap<usize, Vec<usize>>,
    stuck: &BTreeSet<usize>,
    start: usize,
) -> usize {
    let mut seen = BTreeSet::new();
    let mut current = start;
    while seen.insert(current) {
        let next = requirements
            .get(&current)
            .and_then(|required| required.iter().copied().find(|index| stuck.contains(index)));
        match next {
            Some(index) => current = index,
            None => break,
        }
    }
    current
}
