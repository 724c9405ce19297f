//! Supertype-inference check

use quill_syntax::{KindSet, NodeKind};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};
use crate::diagnostic::Diagnostic;
use crate::inspector::{self, INSPECTOR};
use crate::types::Type;

pub const SUPERTYPE_INFERENCE: AnalyzerKey<()> = AnalyzerKey::new("supertype-inference");

const FILTER: KindSet = KindSet::of(&[
    NodeKind::ArrayExpression,
    NodeKind::DictionaryExpression,
    NodeKind::ConditionalExpression,
]);
const REQUIRES: &[&str] = &[inspector::NAME];

/// Reports composite expressions whose constituents have differing static
/// types, since the checker then infers a common supertype the author may
/// not expect.
pub struct SupertypeInference;

impl Analyzer for SupertypeInference {
    type Output = ();

    fn requires(&self) -> &[&'static str] {
        REQUIRES
    }

    fn description(&self) -> &'static str {
        "detects literals and conditionals that force supertype inference"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<()> {
        let inspector = pass.result_of(INSPECTOR);
        let ast = &pass.program.ast;
        let elaboration = &pass.program.elaboration;

        inspector.preorder(FILTER, |id| {
            let node = ast.node(id);

            // (first, second) pairs in evaluation order; the first mismatch
            // reports and finishes the node.
            let mut pairs: Vec<(&Type, &Type)> = Vec::new();
            match node.kind() {
                NodeKind::ArrayExpression => {
                    let Some(element_types) = elaboration.array_element_types.get(&id) else {
                        return;
                    };
                    if element_types.len() < 2 {
                        return;
                    }
                    pairs.push((&element_types[0], &element_types[1]));
                }
                NodeKind::DictionaryExpression => {
                    let Some(entry_types) = elaboration.dictionary_entry_types.get(&id) else {
                        return;
                    };
                    if entry_types.len() < 2 {
                        return;
                    }
                    pairs.push((&entry_types[0].key, &entry_types[1].key));
                    pairs.push((&entry_types[0].value, &entry_types[1].value));
                }
                NodeKind::ConditionalExpression => {
                    let Some(branches) = elaboration.conditional_branch_types.get(&id) else {
                        return;
                    };
                    pairs.push((&branches.then_type, &branches.else_type));
                }
                _ => return,
            }

            for (first, second) in pairs {
                if first == second {
                    continue;
                }
                pass.report(Diagnostic::new(
                    pass.program.location.clone(),
                    node.span,
                    "inferred type may differ",
                ));
                // At most one report per expression.
                return;
            }
        });

        Ok(())
    }
}
