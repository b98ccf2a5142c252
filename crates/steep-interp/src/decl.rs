// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Class, field, and method declarations.
//!
//! Immutable descriptors extracted from the parse tree at load time;
//! execution never mutates them.

use std::rc::Rc;

use indexmap::IndexMap;
use steep_ast::Node;

use crate::object::Object;
use crate::value::{ObjectRef, Value};

/// A field declaration: name plus parsed default value.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub name: String,
    pub default: Value,
}

/// A method declaration: name, positional parameter names, and the single
/// body statement (usually a begin block).
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    pub params: Vec<String>,
    pub body: Node,
}

/// A class declaration: field defaults plus the method table.
///
/// The method table is shared by every instance of the class; methods are
/// never mutated, so instances hold a reference rather than a copy.
#[derive(Debug)]
pub struct ClassDecl {
    pub name: String,
    pub fields: IndexMap<String, Value>,
    pub methods: Rc<IndexMap<String, MethodDecl>>,
}

impl ClassDecl {
    /// Create a live instance: a fresh copy of the field defaults bound to
    /// the shared method table. No side effects beyond the allocation.
    pub fn instantiate(&self) -> ObjectRef {
        Object::new(self.name.clone(), self.fields.clone(), self.methods.clone())
    }
}
