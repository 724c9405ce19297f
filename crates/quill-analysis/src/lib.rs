//! Static-analysis pass framework for the Quill language
//!
//! The framework is a registry of composable **analyzers** with declared
//! dependencies, a dependency-ordered executor that runs each analyzer at
//! most once per program and memoizes its result for dependents, a shared
//! preorder AST **inspector**, and a uniform diagnostic reporting contract.
//!
//! Lexing, parsing and type checking are external: a caller hands the
//! framework a [`Program`] (syntax tree, source text and the checker's
//! [`Elaboration`] tables), selects analyzers by name, and receives their
//! diagnostics in a deterministic order:
//!
//! - [`Registry::register`] wires up analyzers at bootstrap
//! - [`Registry::run`] schedules and executes them over one program
//! - [`analyzers::builtin_registry`] provides the stock checks

pub mod analyzer;
pub mod analyzers;
pub mod diagnostic;
pub mod elaboration;
pub mod error;
mod executor;
pub mod inspector;
pub mod program;
pub mod registry;
pub mod reporter;
pub mod types;

#[cfg(test)]
mod fixture;

pub use quill_syntax::Span;

pub use analyzer::{Analyzer, AnalyzerKey, Pass};
pub use analyzers::builtin_registry;
pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use elaboration::{BranchTypes, Elaboration, EntryTypes, MemberInfo};
pub use error::{AnalysisError, AnalysisResult};
pub use inspector::{INSPECTOR, Inspector, InspectorAnalyzer};
pub use program::{Location, Program};
pub use registry::Registry;
pub use reporter::DiagnosticReporter;
pub use types::Type;
