// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Method dispatch.

use crate::frame::Frame;
use crate::value::{ObjectRef, Value};

use super::{Interpreter, RuntimeError};

impl Interpreter {
    /// Invoke a method on an object with already-evaluated arguments.
    ///
    /// Parameters bind positionally into a fresh frame. Returns `None` when
    /// the method produced no value (it ran off the end of its body or
    /// executed a bare `return`), `Some` when it returned one.
    pub fn call_method(
        &mut self,
        target: &ObjectRef,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Option<Value>, RuntimeError> {
        let methods = target.borrow().methods();
        let method = methods
            .get(name)
            .ok_or_else(|| RuntimeError::Name(format!("method {} does not exist", name)))?;

        if args.len() != method.params.len() {
            return Err(RuntimeError::Type(format!(
                "method {} expects {} arguments, got {}",
                name,
                method.params.len(),
                args.len()
            )));
        }

        let mut frame = Frame::new(&method.params, args);
        match self.exec_stmt(target, &mut frame, &method.body) {
            Ok(()) => Ok(None),
            Err(RuntimeError::Return(value)) => Ok(value),
            Err(e) => Err(e),
        }
    }
}
