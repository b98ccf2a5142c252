// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Per-invocation binding frames.

use indexmap::IndexMap;

use crate::value::Value;

/// The flat binding frame of one method invocation.
///
/// Maps parameter names to their current values. Loop and branch bodies
/// share their method's frame; there is no block scoping, so a variable set
/// inside a loop body stays visible after the loop.
#[derive(Debug, Default)]
pub struct Frame {
    bindings: IndexMap<String, Value>,
}

impl Frame {
    /// Frame with parameters bound positionally to the evaluated arguments.
    pub fn new(params: &[String], args: Vec<Value>) -> Self {
        let mut bindings = IndexMap::new();
        for (param, arg) in params.iter().zip(args) {
            bindings.insert(param.clone(), arg);
        }
        Frame { bindings }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Overwrite an existing binding. Returns false if the name is unbound.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
