// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Statement execution.

use steep_ast::{keyword, Node};

use crate::frame::Frame;
use crate::value::{ObjectRef, Value};

use super::{Interpreter, RuntimeError};

impl Interpreter {
    /// Execute one statement against the current object and binding frame.
    ///
    /// An early return travels the error channel as `RuntimeError::Return`
    /// and unwinds through enclosing blocks, loops, and branches to the
    /// `call_method` boundary.
    pub(super) fn exec_stmt(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        stmt: &Node,
    ) -> Result<(), RuntimeError> {
        let parts = stmt
            .as_list()
            .ok_or_else(|| RuntimeError::Malformed(format!("statement {} is not a list", stmt)))?;
        let tag = parts.first().and_then(Node::as_token).ok_or_else(|| {
            RuntimeError::Malformed(format!("statement {} has no leading tag", stmt))
        })?;

        match tag {
            keyword::PRINT => self.exec_print(obj, frame, &parts[1..]),
            keyword::SET => self.exec_set(obj, frame, &parts[1..]),
            keyword::INPUT_INT | keyword::INPUT_STRING => {
                self.exec_input(obj, frame, tag, &parts[1..])
            }
            keyword::CALL => self.exec_call(obj, frame, &parts[1..]).map(|_| ()),
            keyword::WHILE => self.exec_while(obj, frame, &parts[1..]),
            keyword::IF => self.exec_if(obj, frame, &parts[1..]),
            keyword::RETURN => self.exec_return(obj, frame, &parts[1..]),
            keyword::BEGIN => self.exec_begin(obj, frame, &parts[1..]),
            _ => Err(RuntimeError::Malformed(format!(
                "unknown statement {}",
                stmt
            ))),
        }
    }

    /// Evaluate each fragment, stringify, concatenate, emit one line.
    fn exec_print(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        let mut line = String::new();
        for part in parts {
            let value = self.eval_expr(obj, frame, part)?;
            line.push_str(&value.to_string());
        }
        self.output.write_line(&line);
        Ok(())
    }

    fn exec_set(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        let (name, expr) = match parts {
            [name, expr] => (name, expr),
            _ => {
                return Err(RuntimeError::Syntax(
                    "set needs a variable name and an expression".to_string(),
                ))
            }
        };
        let name = name
            .as_token()
            .ok_or_else(|| RuntimeError::Syntax("set target must be a name".to_string()))?;
        let value = self.eval_expr(obj, frame, expr)?;
        self.store_variable(obj, frame, name, value)
    }

    fn exec_input(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        tag: &str,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        let name = match parts {
            [name] => name
                .as_token()
                .ok_or_else(|| RuntimeError::Syntax("input target must be a name".to_string()))?,
            _ => {
                return Err(RuntimeError::Syntax(
                    "input needs exactly one variable name".to_string(),
                ))
            }
        };
        let line = self.input.read_line().ok_or(RuntimeError::EndOfInput)?;
        let value = if tag == keyword::INPUT_INT {
            let n = line.trim().parse::<i64>().map_err(|_| {
                RuntimeError::Type(format!("input line {:?} is not an integer", line))
            })?;
            Value::Int(n)
        } else {
            Value::Str(line)
        };
        self.store_variable(obj, frame, name, value)
    }

    /// Resolve the target, evaluate arguments left to right, dispatch.
    ///
    /// Shared with expression position: the call's produced value (or void)
    /// is the result.
    pub(super) fn exec_call(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<Option<Value>, RuntimeError> {
        let (target, method, args) = match parts {
            [target, method, args @ ..] => (target, method, args),
            _ => {
                return Err(RuntimeError::Syntax(
                    "call needs a target and a method name".to_string(),
                ))
            }
        };
        let method = method.as_token().ok_or_else(|| {
            RuntimeError::Syntax("method name in a call must be a single token".to_string())
        })?;

        let target = self.resolve_call_target(obj, frame, target)?;

        let mut evaluated = Vec::with_capacity(args.len());
        for arg in args {
            evaluated.push(self.eval_expr(obj, frame, arg)?);
        }

        self.call_method(&target, method, evaluated)
    }

    /// The `me` keyword targets the current object; anything else must
    /// evaluate to an object value.
    fn resolve_call_target(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        target: &Node,
    ) -> Result<ObjectRef, RuntimeError> {
        if target.as_token() == Some(keyword::ME) {
            return Ok(obj.clone());
        }
        match self.eval_expr(obj, frame, target)? {
            Value::Object(target) => Ok(target),
            Value::Null => Err(RuntimeError::Fault(format!(
                "{} is a null object reference",
                target
            ))),
            other => Err(RuntimeError::Type(format!(
                "call target {} is a {}, not an object",
                target,
                other.type_name()
            ))),
        }
    }

    fn exec_while(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        let (cond, body) = match parts {
            [cond, body] => (cond, body),
            _ => {
                return Err(RuntimeError::Syntax(
                    "while needs a condition and a body".to_string(),
                ))
            }
        };
        loop {
            match self.eval_expr(obj, frame, cond)? {
                // A return signal from the body propagates through `?`
                // without re-checking the condition.
                Value::Bool(true) => self.exec_stmt(obj, frame, body)?,
                Value::Bool(false) => return Ok(()),
                other => {
                    return Err(RuntimeError::Type(format!(
                        "the condition in a while statement must be a boolean, got {}",
                        other.type_name()
                    )))
                }
            }
        }
    }

    fn exec_if(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        let (cond, then_branch, else_branch) = match parts {
            [cond, then_branch] => (cond, then_branch, None),
            [cond, then_branch, else_branch] => (cond, then_branch, Some(else_branch)),
            _ => {
                return Err(RuntimeError::Syntax(
                    "if needs a condition and a true branch".to_string(),
                ))
            }
        };
        match self.eval_expr(obj, frame, cond)? {
            Value::Bool(true) => self.exec_stmt(obj, frame, then_branch),
            Value::Bool(false) => match else_branch {
                Some(stmt) => self.exec_stmt(obj, frame, stmt),
                None => Ok(()),
            },
            other => Err(RuntimeError::Type(format!(
                "the condition in an if statement must be a boolean, got {}",
                other.type_name()
            ))),
        }
    }

    fn exec_return(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        match parts {
            [] => Err(RuntimeError::Return(None)),
            [expr] => {
                let value = self.eval_expr(obj, frame, expr)?;
                Err(RuntimeError::Return(Some(value)))
            }
            _ => Err(RuntimeError::Syntax(
                "return takes at most one expression".to_string(),
            )),
        }
    }

    fn exec_begin(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        parts: &[Node],
    ) -> Result<(), RuntimeError> {
        for stmt in parts {
            self.exec_stmt(obj, frame, stmt)?;
        }
        Ok(())
    }

    /// Write rule shared by `set` and the input statements: the frame
    /// binding wins if present, else the current object's field.
    pub(super) fn store_variable(
        &self,
        obj: &ObjectRef,
        frame: &mut Frame,
        name: &str,
        value: Value,
    ) -> Result<(), RuntimeError> {
        if frame.contains(name) {
            frame.assign(name, value);
            return Ok(());
        }
        let mut target = obj.borrow_mut();
        if target.fields.contains_key(name) {
            target.fields.insert(name.to_string(), value);
            return Ok(());
        }
        Err(RuntimeError::Name(format!(
            "variable {} is not declared",
            name
        )))
    }
}
