// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Runtime values.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use steep_ast::keyword;

use crate::object::Object;

/// Shared handle to an object instance.
///
/// Assignment aliases the instance rather than copying it, and objects may
/// reference each other cyclically, so handles are reference-counted.
pub type ObjectRef = Rc<RefCell<Object>>;

/// A runtime value in the interpreter.
#[derive(Debug, Clone)]
pub enum Value {
    /// Integer (i64 covers every integer the language can name)
    Int(i64),
    /// Boolean
    Bool(bool),
    /// String
    Str(String),
    /// The null reference
    Null,
    /// Object reference
    Object(ObjectRef),
}

impl Value {
    /// Kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Null => "null",
            Value::Object(_) => "object",
        }
    }

    /// Parse a literal token: a quoted string, an optionally signed digit
    /// run, or one of the null/true/false keywords. Any other token is not
    /// a literal (it names a variable or field).
    pub fn from_literal(token: &str) -> Option<Value> {
        if let Some(text) = token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
            return Some(Value::Str(text.to_string()));
        }
        match token {
            keyword::NULL => return Some(Value::Null),
            keyword::TRUE => return Some(Value::Bool(true)),
            keyword::FALSE => return Some(Value::Bool(false)),
            _ => {}
        }
        let digits = token.strip_prefix('-').unwrap_or(token);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse().ok().map(Value::Int);
        }
        None
    }
}

impl fmt::Display for Value {
    /// Print-fragment rendering: booleans and null print as the language's
    /// own keywords, strings print without their quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(true) => write!(f, "{}", keyword::TRUE),
            Value::Bool(false) => write!(f, "{}", keyword::FALSE),
            Value::Str(s) => write!(f, "{}", s),
            Value::Null => write!(f, "{}", keyword::NULL),
            Value::Object(obj) => write!(f, "<{} object>", obj.borrow().class_name()),
        }
    }
}
