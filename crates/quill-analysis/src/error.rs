//! Error types

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Failure modes of analyzer registration and execution.
///
/// Configuration errors surface before any analyzer runs. A failing analyzer
/// aborts the remaining schedule; [`AnalysisError::AnalyzerFailed`] carries
/// the diagnostics that completed analyzers had already reported.
/// Diagnostics themselves are never errors: an analyzer that finds nothing
/// reports nothing and still succeeds.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analyzer '{name}' is already registered")]
    DuplicateAnalyzer { name: String },

    #[error("unknown analyzer '{name}'")]
    UnknownAnalyzer { name: String },

    #[error("analyzer '{analyzer}' requires unknown analyzer '{requirement}'")]
    UnknownRequirement {
        analyzer: String,
        requirement: String,
    },

    #[error("requirement cycle involving analyzer '{name}'")]
    DependencyCycle { name: String },

    #[error("analyzer '{name}' failed: {source}")]
    AnalyzerFailed {
        name: &'static str,
        source: anyhow::Error,
        /// Reported by analyzers that completed before the failure.
        diagnostics: Vec<Diagnostic>,
    },
}

impl AnalysisError {
    pub fn duplicate_analyzer(name: impl Into<String>) -> Self {
        Self::DuplicateAnalyzer { name: name.into() }
    }

    pub fn unknown_analyzer(name: impl Into<String>) -> Self {
        Self::UnknownAnalyzer { name: name.into() }
    }

    pub fn unknown_requirement(analyzer: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self::UnknownRequirement {
            analyzer: analyzer.into(),
            requirement: requirement.into(),
        }
    }

    pub fn dependency_cycle(name: impl Into<String>) -> Self {
        Self::DependencyCycle { name: name.into() }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
