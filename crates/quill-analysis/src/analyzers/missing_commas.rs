//! Parameter-list separator check

use quill_syntax::{KindSet, NodeData, NodeKind, Span};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};
use crate::diagnostic::Diagnostic;
use crate::inspector::{self, INSPECTOR};

pub const PARAMETER_LIST_MISSING_COMMAS: AnalyzerKey<()> =
    AnalyzerKey::new("parameter-list-missing-commas");

const FILTER: KindSet = KindSet::of(&[
    NodeKind::FunctionDeclaration,
    NodeKind::FunctionExpression,
]);
const REQUIRES: &[&str] = &[inspector::NAME];

/// Reports parameter boundaries with no separating comma.
///
/// The check is purely lexical: it searches the raw source between two
/// adjacent parameters. A comma inside a comment or string literal in that
/// gap counts as a separator even though it is not one.
pub struct ParameterListMissingCommas;

impl Analyzer for ParameterListMissingCommas {
    type Output = ();

    fn requires(&self) -> &[&'static str] {
        REQUIRES
    }

    fn description(&self) -> &'static str {
        "detects parameter lists with missing comma separators"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<()> {
        let inspector = pass.result_of(INSPECTOR);
        let ast = &pass.program.ast;
        let source = &pass.program.source;

        inspector.preorder(FILTER, |id| {
            let parameters = match &ast.node(id).data {
                NodeData::FunctionDeclaration { parameters, .. }
                | NodeData::FunctionExpression { parameters, .. } => parameters,
                _ => return,
            };

            for pair in parameters.windows(2) {
                let previous_end = ast.node(pair[0]).span.end;
                let start = ast.node(pair[1]).span.start;
                if source[previous_end..start].contains(',') {
                    continue;
                }

                // Spans are half-open, so `previous_end` is already one
                // column past the previous parameter's last character.
                pass.report(Diagnostic::new(
                    pass.program.location.clone(),
                    Span::point(previous_end),
                    "missing comma",
                ));
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quill_syntax::{AstBuilder, NodeData, NodeId};

    use super::*;
    use crate::elaboration::Elaboration;
    use crate::fixture::{analyze, program};
    use crate::program::Program;

    fn push_parameters(
        builder: &mut AstBuilder,
        source: &str,
        parameter_texts: &[&str],
    ) -> Vec<NodeId> {
        let mut parameters = Vec::new();
        let mut search_from = 0;
        for text in parameter_texts {
            let start = source[search_from..]
                .find(text)
                .expect("parameter text present in source")
                + search_from;
            let mut pieces = text.split(':');
            let name = builder.intern(pieces.next().unwrap().trim());
            let annotation = builder.intern(pieces.next().unwrap().trim());
            parameters.push(builder.push(
                NodeData::Parameter { name, annotation },
                Span::new(start, start + text.len()),
            ));
            search_from = start + text.len();
        }
        parameters
    }

    fn declaration_program(source: &'static str, parameter_texts: &[&str]) -> Program {
        let mut builder = AstBuilder::new();
        let parameters = push_parameters(&mut builder, source, parameter_texts);
        let body = builder.push(
            NodeData::Block { statements: vec![] },
            Span::new(source.len() - 2, source.len()),
        );
        let name = builder.intern("check");
        let declaration = builder.push(
            NodeData::FunctionDeclaration {
                name,
                parameters,
                body: Some(body),
            },
            Span::new(0, source.len()),
        );
        let root = builder.push(
            NodeData::SourceFile {
                declarations: vec![declaration],
            },
            Span::new(0, source.len()),
        );
        program(source, builder.finish(root), Elaboration::new())
    }

    #[test]
    fn test_missing_comma_is_reported_one_column_past_parameter() {
        let source = "fun check(a: Int b: Int) {}";
        let program = declaration_program(source, &["a: Int", "b: Int"]);
        let diagnostics = analyze(&program, &["parameter-list-missing-commas"]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "missing comma");
        let expected = source.find("a: Int").unwrap() + "a: Int".len();
        assert_eq!(diagnostics[0].span, Span::point(expected));
        assert!(diagnostics[0].span.is_point());
    }

    #[test]
    fn test_separated_parameters_are_fine() {
        let source = "fun check(a: Int, b: Int) {}";
        let program = declaration_program(source, &["a: Int", "b: Int"]);
        assert!(analyze(&program, &["parameter-list-missing-commas"]).is_empty());
    }

    #[test]
    fn test_single_parameter_is_fine() {
        let source = "fun check(a: Int) {}";
        let program = declaration_program(source, &["a: Int"]);
        assert!(analyze(&program, &["parameter-list-missing-commas"]).is_empty());
    }

    #[test]
    fn test_every_gap_is_checked() {
        let source = "fun check(a: Int b: Int c: Int) {}";
        let program = declaration_program(source, &["a: Int", "b: Int", "c: Int"]);
        let diagnostics = analyze(&program, &["parameter-list-missing-commas"]);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_comma_inside_comment_suppresses_the_report() {
        // Known limitation of the lexical check.
        let source = "fun check(a: Int /*,*/ b: Int) {}";
        let program = declaration_program(source, &["a: Int", "b: Int"]);
        assert!(analyze(&program, &["parameter-list-missing-commas"]).is_empty());
    }

    #[test]
    fn test_function_expression_parameters_are_checked() {
        let source = "let f = fun (a: Int b: Int) {}";
        let mut builder = AstBuilder::new();
        let parameters = push_parameters(&mut builder, source, &["a: Int", "b: Int"]);
        let body = builder.push(
            NodeData::Block { statements: vec![] },
            Span::new(source.len() - 2, source.len()),
        );
        let function = builder.push(
            NodeData::FunctionExpression { parameters, body },
            Span::new(8, source.len()),
        );
        let f = builder.intern("f");
        let declaration = builder.push(
            NodeData::VariableDeclaration {
                name: f,
                value: function,
            },
            Span::new(0, source.len()),
        );
        let root = builder.push(
            NodeData::SourceFile {
                declarations: vec![declaration],
            },
            Span::new(0, source.len()),
        );
        let program = program(source, builder.finish(root), Elaboration::new());

        let diagnostics = analyze(&program, &["parameter-list-missing-commas"]);
        assert_eq!(diagnostics.len(), 1);
    }
}
