//! Node kinds and kind sets

use strum::EnumCount;
use strum_macros::EnumCount;

/// Dynamic kind of an AST node.
///
/// This is a fieldless mirror of [`super::NodeData`]; the two enums must be
/// kept in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount)]
pub enum NodeKind {
    SourceFile,
    FunctionDeclaration,
    VariableDeclaration,
    Parameter,
    Block,
    ExpressionStatement,
    ReturnStatement,
    Identifier,
    IntegerLiteral,
    StringLiteral,
    BooleanLiteral,
    ArrayExpression,
    DictionaryExpression,
    DictionaryEntry,
    ConditionalExpression,
    BinaryExpression,
    UnaryExpression,
    IndexExpression,
    MemberExpression,
    InvocationExpression,
    ReferenceExpression,
    FunctionExpression,
}

// KindSet packs one bit per kind into a single word.
const _: () = assert!(NodeKind::COUNT <= u64::BITS as usize);

/// Set of node kinds with constant-time membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindSet(u64);

impl KindSet {
    pub const EMPTY: KindSet = KindSet(0);

    pub const fn of(kinds: &[NodeKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1 << kinds[i] as u32;
            i += 1;
        }
        Self(bits)
    }

    /// Set containing every node kind.
    pub const fn all() -> Self {
        Self((1 << NodeKind::COUNT) - 1)
    }

    pub const fn contains(self, kind: NodeKind) -> bool {
        (self.0 & (1 << kind as u32)) != 0
    }

    pub const fn union(self, other: KindSet) -> KindSet {
        KindSet(self.0 | other.0)
    }

    pub fn insert(&mut self, kind: NodeKind) {
        self.0 |= 1 << kind as u32;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}
