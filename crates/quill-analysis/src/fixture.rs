//! Shared test fixtures

use quill_syntax::{AstBuilder, NodeData, Span};

use crate::analyzers::builtin_registry;
use crate::diagnostic::Diagnostic;
use crate::elaboration::Elaboration;
use crate::program::{Location, Program};

pub(crate) fn program(source: &str, ast: quill_syntax::Ast, elaboration: Elaboration) -> Program {
    Program::new(Location::new("test.quill"), source, ast, elaboration)
}

pub(crate) fn empty_program() -> Program {
    let mut builder = AstBuilder::new();
    let root = builder.push(
        NodeData::SourceFile {
            declarations: vec![],
        },
        Span::point(0),
    );
    program("", builder.finish(root), Elaboration::new())
}

/// Run built-in analyzers over `program`, unwrapping configuration errors.
pub(crate) fn analyze(program: &Program, names: &[&str]) -> Vec<Diagnostic> {
    builtin_registry()
        .expect("builtin registry")
        .run(program, names)
        .expect("analysis succeeds")
}
