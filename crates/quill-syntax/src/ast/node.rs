//! Node payloads

use smallvec::SmallVec;

use super::{Name, NodeId, NodeKind};

/// Buffer for the children of a single node.
pub type Children = SmallVec<[NodeId; 4]>;

/// Payload of an AST node.
///
/// This is a closed union over every node kind in the language; analyzers
/// dispatch on it with exhaustive matches. Child nodes are referenced by
/// [`NodeId`] into the owning [`super::Ast`].
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Root of one analyzed unit
    SourceFile { declarations: Vec<NodeId> },

    /// `fun name(parameters) { body }`
    FunctionDeclaration {
        name: Name,
        parameters: Vec<NodeId>,
        body: Option<NodeId>,
    },
    /// `name: Annotation` within a parameter list
    Parameter { name: Name, annotation: Name },
    /// `let name = value`
    VariableDeclaration { name: Name, value: NodeId },

    Block { statements: Vec<NodeId> },
    ExpressionStatement { expression: NodeId },
    ReturnStatement { expression: Option<NodeId> },

    Identifier { name: Name },
    IntegerLiteral { value: i64 },
    StringLiteral { value: String },
    BooleanLiteral { value: bool },

    /// `[a, b, c]`
    ArrayExpression { elements: Vec<NodeId> },
    /// `{k1: v1, k2: v2}`; entries are [`NodeData::DictionaryEntry`] nodes
    DictionaryExpression { entries: Vec<NodeId> },
    DictionaryEntry { key: NodeId, value: NodeId },
    /// `condition ? then : else`
    ConditionalExpression {
        condition: NodeId,
        then_expression: NodeId,
        else_expression: NodeId,
    },
    BinaryExpression {
        operator: BinaryOperator,
        left: NodeId,
        right: NodeId,
    },
    UnaryExpression {
        operator: UnaryOperator,
        operand: NodeId,
    },
    /// `target[index]`
    IndexExpression { target: NodeId, index: NodeId },
    /// `target.member`
    MemberExpression { target: NodeId, member: Name },
    /// `function(arguments)`
    InvocationExpression {
        function: NodeId,
        arguments: Vec<NodeId>,
    },
    /// `&expression`
    ReferenceExpression { expression: NodeId },
    /// `fun (parameters) { body }`
    FunctionExpression {
        parameters: Vec<NodeId>,
        body: NodeId,
    },
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::SourceFile { .. } => NodeKind::SourceFile,
            NodeData::FunctionDeclaration { .. } => NodeKind::FunctionDeclaration,
            NodeData::Parameter { .. } => NodeKind::Parameter,
            NodeData::VariableDeclaration { .. } => NodeKind::VariableDeclaration,
            NodeData::Block { .. } => NodeKind::Block,
            NodeData::ExpressionStatement { .. } => NodeKind::ExpressionStatement,
            NodeData::ReturnStatement { .. } => NodeKind::ReturnStatement,
            NodeData::Identifier { .. } => NodeKind::Identifier,
            NodeData::IntegerLiteral { .. } => NodeKind::IntegerLiteral,
            NodeData::StringLiteral { .. } => NodeKind::StringLiteral,
            NodeData::BooleanLiteral { .. } => NodeKind::BooleanLiteral,
            NodeData::ArrayExpression { .. } => NodeKind::ArrayExpression,
            NodeData::DictionaryExpression { .. } => NodeKind::DictionaryExpression,
            NodeData::DictionaryEntry { .. } => NodeKind::DictionaryEntry,
            NodeData::ConditionalExpression { .. } => NodeKind::ConditionalExpression,
            NodeData::BinaryExpression { .. } => NodeKind::BinaryExpression,
            NodeData::UnaryExpression { .. } => NodeKind::UnaryExpression,
            NodeData::IndexExpression { .. } => NodeKind::IndexExpression,
            NodeData::MemberExpression { .. } => NodeKind::MemberExpression,
            NodeData::InvocationExpression { .. } => NodeKind::InvocationExpression,
            NodeData::ReferenceExpression { .. } => NodeKind::ReferenceExpression,
            NodeData::FunctionExpression { .. } => NodeKind::FunctionExpression,
        }
    }

    /// Append the node's children in declared left-to-right order.
    pub fn children(&self, out: &mut Children) {
        match self {
            NodeData::SourceFile { declarations } => out.extend_from_slice(declarations),
            NodeData::FunctionDeclaration {
                parameters, body, ..
            } => {
                out.extend_from_slice(parameters);
                out.extend(*body);
            }
            NodeData::Parameter { .. }
            | NodeData::Identifier { .. }
            | NodeData::IntegerLiteral { .. }
            | NodeData::StringLiteral { .. }
            | NodeData::BooleanLiteral { .. } => {}
            NodeData::VariableDeclaration { value, .. } => out.push(*value),
            NodeData::Block { statements } => out.extend_from_slice(statements),
            NodeData::ExpressionStatement { expression } => out.push(*expression),
            NodeData::ReturnStatement { expression } => out.extend(*expression),
            NodeData::ArrayExpression { elements } => out.extend_from_slice(elements),
            NodeData::DictionaryExpression { entries } => out.extend_from_slice(entries),
            NodeData::DictionaryEntry { key, value } => {
                out.push(*key);
                out.push(*value);
            }
            NodeData::ConditionalExpression {
                condition,
                then_expression,
                else_expression,
            } => {
                out.push(*condition);
                out.push(*then_expression);
                out.push(*else_expression);
            }
            NodeData::BinaryExpression { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            NodeData::UnaryExpression { operand, .. } => out.push(*operand),
            NodeData::IndexExpression { target, index } => {
                out.push(*target);
                out.push(*index);
            }
            NodeData::MemberExpression { target, .. } => out.push(*target),
            NodeData::InvocationExpression {
                function,
                arguments,
            } => {
                out.push(*function);
                out.extend_from_slice(arguments);
            }
            NodeData::ReferenceExpression { expression } => out.push(*expression),
            NodeData::FunctionExpression { parameters, body } => {
                out.extend_from_slice(parameters);
                out.push(*body);
            }
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Rem, // %

    // Comparison
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Logical
    And, // &&
    Or,  // ||

    /// `a ?? b`, unwraps `a` or falls back to `b`
    NilCoalescing,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
            BinaryOperator::Rem => write!(f, "%"),
            BinaryOperator::Equal => write!(f, "=="),
            BinaryOperator::NotEqual => write!(f, "!="),
            BinaryOperator::Less => write!(f, "<"),
            BinaryOperator::LessEqual => write!(f, "<="),
            BinaryOperator::Greater => write!(f, ">"),
            BinaryOperator::GreaterEqual => write!(f, ">="),
            BinaryOperator::And => write!(f, "&&"),
            BinaryOperator::Or => write!(f, "||"),
            BinaryOperator::NilCoalescing => write!(f, "??"),
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Neg, // -
    Not, // !
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Neg => write!(f, "-"),
            UnaryOperator::Not => write!(f, "!"),
        }
    }
}
