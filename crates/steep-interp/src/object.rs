// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Live object instances.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::decl::MethodDecl;
use crate::value::{ObjectRef, Value};

/// A live instance of a class: its own copy of the field values and a
/// shared handle on the class's method table.
pub struct Object {
    class_name: String,
    pub(crate) fields: IndexMap<String, Value>,
    methods: Rc<IndexMap<String, MethodDecl>>,
}

impl Object {
    pub(crate) fn new(
        class_name: String,
        fields: IndexMap<String, Value>,
        methods: Rc<IndexMap<String, MethodDecl>>,
    ) -> ObjectRef {
        Rc::new(RefCell::new(Object {
            class_name,
            fields,
            methods,
        }))
    }

    /// Name of the class this object was instantiated from.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Current value of a field, if the class declares it.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub(crate) fn methods(&self) -> Rc<IndexMap<String, MethodDecl>> {
        self.methods.clone()
    }
}

impl fmt::Debug for Object {
    // Field values may cycle back to this object; keep Debug shallow.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class_name)
            .finish_non_exhaustive()
    }
}
