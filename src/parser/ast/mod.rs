//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for turn report nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Degenerate nodes are surfaced through [`CstElement`], which consumers
//! match exhaustively.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities
// ============================================================================

/// Whether `node` holds a token of `kind` directly
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// First token directly under `node` whose kind is in `kinds`
fn find_token(node: &SyntaxNode, kinds: &[SyntaxKind]) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| kinds.contains(&t.kind()))
}

/// Non-trivia tokens directly under `node`, in source order
fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + use<> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
}

/// A typed view of one CST node kind
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// `fn name(&self) -> Option<Type>`: first child node of that type
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("The `", stringify!($type), "` under this node, if present.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// `fn name(&self) -> impl Iterator<Item = Type>`: child nodes of that type
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Every `", stringify!($type), "` under this node, in source order.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// `fn name(&self) -> bool`: the line carries a marker token
macro_rules! has_token_method {
    ($name:ident, $kind:ident, $example:literal) => {
        #[doc = concat!("Whether the `", stringify!($kind), "` token is present, as in `", $example, "`.")]
        pub fn $name(&self) -> bool {
            has_token(&self.0, SyntaxKind::$kind)
        }
    };
}

/// `fn name(&self) -> Option<SyntaxToken>`: first direct token of the listed kinds
macro_rules! token_method {
    ($name:ident, [$($kind:ident),+ $(,)?], $doc:literal) => {
        #[doc = $doc]
        pub fn $name(&self) -> Option<SyntaxToken> {
            find_token(&self.0, &[$(SyntaxKind::$kind),+])
        }
    };
}

mod lines;
mod steps;

pub use lines::*;
pub use steps::*;

// ============================================================================
// Degenerate nodes
// ============================================================================

ast_node!(BadNode, BAD);

impl BadNode {
    /// Text of the tokens that failed to match, trivia included
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    pub fn range(&self) -> rowan::TextRange {
        self.0.text_range()
    }
}

ast_node!(MissingNode, MISSING);

impl MissingNode {
    /// Insertion point of the missing input
    pub fn offset(&self) -> rowan::TextSize {
        self.0.text_range().start()
    }
}

/// A child node of the CST: a well-formed production or one of the
/// degenerate variants recorded during recovery.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CstElement {
    Production(SyntaxNode),
    Bad(BadNode),
    Missing(MissingNode),
}

impl CstElement {
    pub fn classify(node: SyntaxNode) -> Self {
        match node.kind() {
            SyntaxKind::BAD => Self::Bad(BadNode(node)),
            SyntaxKind::MISSING => Self::Missing(MissingNode(node)),
            _ => Self::Production(node),
        }
    }

    /// Child nodes of `node`, classified
    pub fn children(node: &SyntaxNode) -> impl Iterator<Item = CstElement> + use<> {
        node.children().map(Self::classify)
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Production(node) => node,
            Self::Bad(bad) => bad.syntax(),
            Self::Missing(missing) => missing.syntax(),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !matches!(self, Self::Production(_))
    }
}

/// Check whether `node` or anything below it went through recovery
pub fn has_degenerate_descendant(node: &SyntaxNode) -> bool {
    node.descendants()
        .any(|n| matches!(n.kind(), SyntaxKind::BAD | SyntaxKind::MISSING))
}
