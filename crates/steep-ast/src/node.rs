//! Parse-tree nodes.

use std::fmt;

/// A node in the parsed program tree.
///
/// The parser hands the interpreter nested tagged sequences: every token is
/// already categorized (quoted string, digit run, keyword, or identifier),
/// and structure is carried by lists whose head token names the construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single token.
    Token(String),
    /// A tagged sequence of child nodes.
    List(Vec<Node>),
}

impl Node {
    pub fn token(token: impl Into<String>) -> Self {
        Node::Token(token.into())
    }

    pub fn list(items: impl Into<Vec<Node>>) -> Self {
        Node::List(items.into())
    }

    /// The token text, if this node is a token.
    pub fn as_token(&self) -> Option<&str> {
        match self {
            Node::Token(token) => Some(token),
            Node::List(_) => None,
        }
    }

    /// The child nodes, if this node is a list.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::Token(_) => None,
            Node::List(items) => Some(items),
        }
    }

    /// The leading tag of a list node, when that head is a token.
    pub fn head_token(&self) -> Option<&str> {
        self.as_list()?.first()?.as_token()
    }
}

impl fmt::Display for Node {
    /// Renders the tree back to parenthesized form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Token(token) => write!(f, "{}", token),
            Node::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
