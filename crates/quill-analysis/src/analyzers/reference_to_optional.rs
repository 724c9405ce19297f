//! Reference-to-optional check

use quill_syntax::{KindSet, NodeData, NodeKind};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};
use crate::diagnostic::Diagnostic;
use crate::inspector::{self, INSPECTOR};
use crate::types::Type;

pub const REFERENCE_TO_OPTIONAL: AnalyzerKey<()> = AnalyzerKey::new("reference-to-optional");

const FILTER: KindSet = KindSet::of(&[NodeKind::ReferenceExpression]);
const REQUIRES: &[&str] = &[inspector::NAME];

/// Reports references taken to indexed elements whose static type is
/// optional.
pub struct ReferenceToOptional;

impl Analyzer for ReferenceToOptional {
    type Output = ();

    fn requires(&self) -> &[&'static str] {
        REQUIRES
    }

    fn description(&self) -> &'static str {
        "detects references to optional, indexed collection elements"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<()> {
        let inspector = pass.result_of(INSPECTOR);
        let ast = &pass.program.ast;
        let elaboration = &pass.program.elaboration;

        inspector.preorder(FILTER, |id| {
            let NodeData::ReferenceExpression { expression } = &ast.node(id).data else {
                return;
            };

            let referent = ast.node(*expression);
            if !matches!(referent.data, NodeData::IndexExpression { .. }) {
                return;
            }

            let Some(indexed_type) = elaboration.indexed_types.get(expression) else {
                return;
            };
            let Some(element_type) = indexed_type.element_type() else {
                return;
            };
            if !matches!(element_type, Type::Optional(_)) {
                return;
            }

            pass.report(Diagnostic::new(
                pass.program.location.clone(),
                referent.span,
                "reference to optional",
            ));
        });

        Ok(())
    }
}
