//! Shared filtered-preorder traversal
//!
//! Walking the tree once per analyzer would make the cost of a session grow
//! with the number of checks. The inspector walks it once, records the
//! preorder, and lets every analyzer replay the recording through its own
//! kind filter.

use quill_syntax::{Ast, KindSet, NodeId, NodeKind};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};

/// Registry name of the inspector analyzer.
pub const NAME: &str = "inspector";

/// Typed key of the inspector's published result.
pub const INSPECTOR: AnalyzerKey<Inspector> = AnalyzerKey::new(NAME);

/// Preorder index over one program's AST, shared by all analyzers of a
/// session.
pub struct Inspector {
    order: Vec<(NodeId, NodeKind)>,
}

impl Inspector {
    /// Walk `ast` once and record every node in preorder.
    pub fn build(ast: &Ast) -> Self {
        let mut order = Vec::with_capacity(ast.len());
        ast.preorder(|id, node| order.push((id, node.kind())));
        Self { order }
    }

    /// Visit every recorded node whose kind is in `filter`, in preorder.
    ///
    /// Each call behaves exactly like an independent full preorder walk
    /// with a kind test per node; the physical walk happened once, at build
    /// time. Membership tests are constant-time, so the cost per call is
    /// linear in the node count regardless of the filter's size.
    pub fn preorder<F>(&self, filter: KindSet, mut visit: F)
    where
        F: FnMut(NodeId),
    {
        for &(id, kind) in &self.order {
            if filter.contains(kind) {
                visit(id);
            }
        }
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Zero-dependency analyzer publishing the [`Inspector`] for a program.
pub struct InspectorAnalyzer;

impl Analyzer for InspectorAnalyzer {
    type Output = Inspector;

    fn description(&self) -> &'static str {
        "indexes the syntax tree in preorder for other analyzers"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<Inspector> {
        let inspector = Inspector::build(&pass.program.ast);
        log::trace!("inspector indexed {} nodes", inspector.len());
        Ok(inspector)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_syntax::{AstBuilder, BinaryOperator, NodeData, Span};

    use super::*;

    // [1 + 2, x]
    fn small_ast() -> Ast {
        let mut builder = AstBuilder::new();
        let one = builder.push(NodeData::IntegerLiteral { value: 1 }, Span::new(1, 2));
        let two = builder.push(NodeData::IntegerLiteral { value: 2 }, Span::new(5, 6));
        let sum = builder.push(
            NodeData::BinaryExpression {
                operator: BinaryOperator::Add,
                left: one,
                right: two,
            },
            Span::new(1, 6),
        );
        let x = builder.intern("x");
        let identifier = builder.push(NodeData::Identifier { name: x }, Span::new(8, 9));
        let array = builder.push(
            NodeData::ArrayExpression {
                elements: vec![sum, identifier],
            },
            Span::new(0, 10),
        );
        builder.finish(array)
    }

    #[test]
    fn test_full_filter_visits_every_node_in_preorder() {
        let ast = small_ast();
        let inspector = Inspector::build(&ast);

        let mut kinds = Vec::new();
        inspector.preorder(KindSet::all(), |id| kinds.push(ast.node(id).kind()));

        assert_eq!(
            kinds,
            vec![
                NodeKind::ArrayExpression,
                NodeKind::BinaryExpression,
                NodeKind::IntegerLiteral,
                NodeKind::IntegerLiteral,
                NodeKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_filter_restricts_visits() {
        let ast = small_ast();
        let inspector = Inspector::build(&ast);

        let mut visited = Vec::new();
        inspector.preorder(
            KindSet::of(&[NodeKind::IntegerLiteral]),
            |id| visited.push(id),
        );
        assert_eq!(visited.len(), 2);
        for id in visited {
            assert_eq!(ast.node(id).kind(), NodeKind::IntegerLiteral);
        }
    }

    #[test]
    fn test_shared_instance_serves_independent_calls() {
        let ast = small_ast();
        let inspector = Inspector::build(&ast);

        let mut literals = 0;
        inspector.preorder(KindSet::of(&[NodeKind::IntegerLiteral]), |_| literals += 1);

        let mut identifiers = 0;
        inspector.preorder(KindSet::of(&[NodeKind::Identifier]), |_| identifiers += 1);

        assert_eq!(literals, 2);
        assert_eq!(identifiers, 1);
    }

    #[test]
    fn test_empty_filter_visits_nothing() {
        let ast = small_ast();
        let inspector = Inspector::build(&ast);

        let mut visits = 0;
        inspector.preorder(KindSet::EMPTY, |_| visits += 1);
        assert_eq!(visits, 0);
    }
}
