//! The unit of analysis

use std::fmt;

use quill_syntax::Ast;

use crate::elaboration::Elaboration;

/// Stable identity of one analyzed unit, e.g. a file path or a deployed
/// contract address. Cloned into every diagnostic reported against it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One compilation unit together with everything the external toolchain
/// produced for it: source text, syntax tree and checker output.
///
/// Read-only for the whole analysis session; analyzers borrow it and never
/// mutate it. Spans in the tree index into `source`.
pub struct Program {
    pub location: Location,
    pub source: String,
    pub ast: Ast,
    pub elaboration: Elaboration,
}

impl Program {
    pub fn new(
        location: Location,
        source: impl Into<String>,
        ast: Ast,
        elaboration: Elaboration,
    ) -> Self {
        Self {
            location,
            source: source.into(),
            ast,
            elaboration,
        }
    }
}
