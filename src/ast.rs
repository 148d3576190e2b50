use std::{fmt, rc::Rc};

use crate::interpreter::lexer::{Location, Token, TokenKind};

/// A node of the syntax tree.
///
/// Every program is a tree of atoms and lists. There are no dedicated
/// node types for definitions or conditionals: `(if c a b)` is a list whose
/// first child happens to be the identifier `if`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf holding a single integer or identifier token.
    Atom(Token),
    /// One matched pair of parentheses and everything between them.
    List {
        /// The children, in source order. May be empty.
        items:    Rc<[Self]>,
        /// Location of the opening parenthesis.
        location: Location,
    },
}

impl Expr {
    /// Creates a list node.
    #[must_use]
    pub fn list(items: Vec<Self>, location: Location) -> Self {
        Self::List { items: items.into(),
                     location }
    }

    /// The source location of this node: the token of an atom, or the
    /// opening parenthesis of a list.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Atom(token) => token.location,
            Self::List { location, .. } => *location,
        }
    }

    /// Returns the identifier name if this node is an identifier atom.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Atom(token) if token.kind == TokenKind::Identifier => Some(&token.text),
            _ => None,
        }
    }

    /// Returns the children if this node is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&Rc<[Self]>> {
        match self {
            Self::List { items, .. } => Some(items),
            Self::Atom(_) => None,
        }
    }

    /// Collects the tokens of all atoms in this tree, left to right.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            Self::Atom(token) => out.push(token),
            Self::List { items, .. } => {
                for item in items.iter() {
                    item.collect_leaves(out);
                }
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(token) => write!(f, "{}", token.text),
            Self::List { items, .. } => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            },
        }
    }
}
