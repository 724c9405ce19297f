//! Number-supertype arithmetic check

use quill_syntax::{KindSet, NodeKind};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};
use crate::diagnostic::Diagnostic;
use crate::inspector::{self, INSPECTOR};

pub const NUMBER_SUPERTYPE_BINARY_OPERATIONS: AnalyzerKey<()> =
    AnalyzerKey::new("number-supertype-binary-operations");

const FILTER: KindSet = KindSet::of(&[NodeKind::BinaryExpression]);
const REQUIRES: &[&str] = &[inspector::NAME];

/// Reports binary expressions whose left operand was inferred as one of the
/// abstract number supertypes rather than a concrete numeric type.
pub struct NumberSupertypeBinaryOperations;

impl Analyzer for NumberSupertypeBinaryOperations {
    type Output = ();

    fn requires(&self) -> &[&'static str] {
        REQUIRES
    }

    fn description(&self) -> &'static str {
        "detects arithmetic on abstract number supertypes"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<()> {
        let inspector = pass.result_of(INSPECTOR);
        let ast = &pass.program.ast;
        let elaboration = &pass.program.elaboration;

        inspector.preorder(FILTER, |id| {
            let Some(left_type) = elaboration.binary_left_types.get(&id) else {
                return;
            };
            if !left_type.is_number_supertype() {
                return;
            }

            pass.report(Diagnostic::new(
                pass.program.location.clone(),
                ast.node(id).span,
                "arithmetic operation on number supertype",
            ));
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quill_syntax::{AstBuilder, BinaryOperator, NodeData, Span};

    use super::*;
    use crate::elaboration::Elaboration;
    use crate::fixture::{analyze, program};
    use crate::program::Program;
    use crate::types::Type;

    // a + b
    fn binary_program(left_type: Type) -> Program {
        let mut builder = AstBuilder::new();
        let a = builder.intern("a");
        let b = builder.intern("b");
        let left = builder.push(NodeData::Identifier { name: a }, Span::new(0, 1));
        let right = builder.push(NodeData::Identifier { name: b }, Span::new(4, 5));
        let sum = builder.push(
            NodeData::BinaryExpression {
                operator: BinaryOperator::Add,
                left,
                right,
            },
            Span::new(0, 5),
        );
        let statement = builder.push(
            NodeData::ExpressionStatement { expression: sum },
            Span::new(0, 5),
        );
        let root = builder.push(
            NodeData::SourceFile {
                declarations: vec![statement],
            },
            Span::new(0, 5),
        );
        let ast = builder.finish(root);

        let mut elaboration = Elaboration::new();
        elaboration.binary_left_types.insert(sum, left_type);
        program("a + b", ast, elaboration)
    }

    #[test]
    fn test_each_supertype_is_reported() {
        for left_type in [
            Type::Number,
            Type::SignedNumber,
            Type::Integer,
            Type::SignedInteger,
            Type::FixedPoint,
            Type::SignedFixedPoint,
        ] {
            let label = left_type.to_string();
            let program = binary_program(left_type);
            let diagnostics = analyze(&program, &["number-supertype-binary-operations"]);
            assert_eq!(diagnostics.len(), 1, "left operand {label}");
            assert_eq!(
                diagnostics[0].message,
                "arithmetic operation on number supertype"
            );
            assert_eq!(diagnostics[0].span, Span::new(0, 5));
        }
    }

    #[test]
    fn test_concrete_numeric_types_are_fine() {
        for left_type in [Type::Int, Type::UInt64, Type::Fix64] {
            let program = binary_program(left_type);
            assert!(
                analyze(&program, &["number-supertype-binary-operations"]).is_empty()
            );
        }
    }

    #[test]
    fn test_untyped_expression_is_skipped() {
        let mut builder = AstBuilder::new();
        let a = builder.intern("a");
        let left = builder.push(NodeData::Identifier { name: a }, Span::new(0, 1));
        let right = builder.push(NodeData::IntegerLiteral { value: 1 }, Span::new(4, 5));
        let sum = builder.push(
            NodeData::BinaryExpression {
                operator: BinaryOperator::Add,
                left,
                right,
            },
            Span::new(0, 5),
        );
        let statement = builder.push(
            NodeData::ExpressionStatement { expression: sum },
            Span::new(0, 5),
        );
        let root = builder.push(
            NodeData::SourceFile {
                declarations: vec![statement],
            },
            Span::new(0, 5),
        );
        let program = program("a + 1", builder.finish(root), Elaboration::new());

        assert!(analyze(&program, &["number-supertype-binary-operations"]).is_empty());
    }
}
