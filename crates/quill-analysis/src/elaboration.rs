//! Checker output consumed by analyzers

use std::collections::HashMap;

use quill_syntax::NodeId;

use crate::types::Type;

/// Member resolved for a member expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub container_type: Type,
    pub member_name: String,
}

/// Key and value types of one dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTypes {
    pub key: Type,
    pub value: Type,
}

/// Branch types of a conditional expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTypes {
    pub then_type: Type,
    pub else_type: Type,
}

/// Per-node type information produced by the external type checker.
///
/// Every table is keyed by [`NodeId`] and read-only for the whole analysis
/// session. A node absent from a table has no recorded information for it;
/// analyzers treat that as "not applicable", never as an error.
#[derive(Debug, Default)]
pub struct Elaboration {
    /// Index expression → static type of the indexed collection.
    pub indexed_types: HashMap<NodeId, Type>,
    /// Member expression → resolved member, if the checker found one.
    pub member_infos: HashMap<NodeId, MemberInfo>,
    /// Binary expression → static type of its left operand.
    pub binary_left_types: HashMap<NodeId, Type>,
    /// Array expression → element types in declaration order.
    pub array_element_types: HashMap<NodeId, Vec<Type>>,
    /// Dictionary expression → entry types in declaration order.
    pub dictionary_entry_types: HashMap<NodeId, Vec<EntryTypes>>,
    /// Conditional expression → then/else branch types.
    pub conditional_branch_types: HashMap<NodeId, BranchTypes>,
}

impl Elaboration {
    pub fn new() -> Self {
        Self::default()
    }
}
