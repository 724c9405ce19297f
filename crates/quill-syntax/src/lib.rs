//! Quill syntax tree
//!
//! The tree produced by an external parser and consumed by analysis:
//! - **Spans** (`span`): half-open byte ranges into the original source
//! - **AST** (`ast`): arena-backed nodes with stable integer identities,
//!   a closed set of node kinds, and a preorder traversal

pub mod ast;
pub mod span;

pub use ast::{
    Ast, AstBuilder, BinaryOperator, KindSet, Name, Node, NodeData, NodeId, NodeKind, UnaryOperator,
};
pub use span::Span;
