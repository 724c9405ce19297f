//! Deprecated account-key API check

use quill_syntax::{KindSet, NodeData, NodeKind};

use crate::analyzer::{Analyzer, AnalyzerKey, Pass};
use crate::diagnostic::Diagnostic;
use crate::inspector::{self, INSPECTOR};
use crate::types::Type;

pub const DEPRECATED_KEY_FUNCTIONS: AnalyzerKey<()> =
    AnalyzerKey::new("deprecated-key-functions");

const FILTER: KindSet = KindSet::of(&[NodeKind::InvocationExpression]);
const REQUIRES: &[&str] = &[inspector::NAME];

/// Removed account-key members and their replacements.
const DEPRECATIONS: &[(&str, &str)] = &[
    ("addPublicKey", "keys.add"),
    ("removePublicKey", "keys.revoke"),
];

/// Reports invocations of the legacy account-key management functions.
pub struct DeprecatedKeyFunctions;

impl Analyzer for DeprecatedKeyFunctions {
    type Output = ();

    fn requires(&self) -> &[&'static str] {
        REQUIRES
    }

    fn description(&self) -> &'static str {
        "detects uses of the replaced account-key management functions"
    }

    fn run(&self, pass: &Pass<'_>) -> anyhow::Result<()> {
        let inspector = pass.result_of(INSPECTOR);
        let ast = &pass.program.ast;
        let elaboration = &pass.program.elaboration;

        inspector.preorder(FILTER, |id| {
            let node = ast.node(id);
            let NodeData::InvocationExpression { function, .. } = &node.data else {
                return;
            };
            if !matches!(ast.node(*function).data, NodeData::MemberExpression { .. }) {
                return;
            }

            let Some(member_info) = elaboration.member_infos.get(function) else {
                return;
            };
            if member_info.container_type != Type::Account {
                return;
            }
            let deprecation = DEPRECATIONS
                .iter()
                .find(|&&(old, _)| old == member_info.member_name);
            let Some(&(old, new)) = deprecation else {
                return;
            };

            pass.report(Diagnostic::new(
                pass.program.location.clone(),
                node.span,
                format!("use of deprecated key management API: replace '{old}' with '{new}'"),
            ));
        });

        Ok(())
    }
}
