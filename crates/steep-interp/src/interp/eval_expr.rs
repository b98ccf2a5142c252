// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Expression evaluation.

use steep_ast::{keyword, Node};

use crate::frame::Frame;
use crate::value::{ObjectRef, Value};

use super::{Interpreter, RuntimeError};

impl Interpreter {
    /// Recursively reduce an expression node to a value.
    pub(super) fn eval_expr(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        expr: &Node,
    ) -> Result<Value, RuntimeError> {
        match expr {
            Node::Token(token) => {
                if let Some(value) = Value::from_literal(token) {
                    Ok(value)
                } else {
                    self.load_variable(obj, frame, token)
                }
            }
            Node::List(parts) => self.eval_compound(obj, frame, expr, parts),
        }
    }

    fn eval_compound(
        &mut self,
        obj: &ObjectRef,
        frame: &mut Frame,
        expr: &Node,
        parts: &[Node],
    ) -> Result<Value, RuntimeError> {
        let op = parts.first().and_then(Node::as_token).ok_or_else(|| {
            RuntimeError::Malformed(format!("expression {} has no leading operator", expr))
        })?;

        match op {
            keyword::NEW => {
                let name = match &parts[1..] {
                    [name] => name.as_token().ok_or_else(|| {
                        RuntimeError::Malformed(format!("new needs a class name, got {}", expr))
                    })?,
                    _ => {
                        return Err(RuntimeError::Malformed(format!(
                            "new needs exactly one class name, got {}",
                            expr
                        )))
                    }
                };
                let class = self.lookup_class(name)?;
                Ok(Value::Object(class.instantiate()))
            }

            // A call in expression position executes as the call statement;
            // a method that produced no value cannot feed an expression.
            keyword::CALL => match self.exec_call(obj, frame, &parts[1..])? {
                Some(value) => Ok(value),
                None => Err(RuntimeError::Type(format!(
                    "{} produced no value in an expression",
                    expr
                ))),
            },

            "+" | "-" | "*" | "/" | "%" | "<" | ">" | "<=" | ">=" | "==" | "!=" | "&" | "|" => {
                let (lhs, rhs) = match &parts[1..] {
                    [lhs, rhs] => (lhs, rhs),
                    _ => {
                        return Err(RuntimeError::Malformed(format!(
                            "operator {} needs two operands",
                            op
                        )))
                    }
                };
                // Both sides always evaluate; `&` and `|` do not short-circuit.
                let lhs = self.eval_expr(obj, frame, lhs)?;
                let rhs = self.eval_expr(obj, frame, rhs)?;
                self.eval_binop(op, lhs, rhs)
            }

            "!" => {
                let operand = match &parts[1..] {
                    [operand] => operand,
                    _ => {
                        return Err(RuntimeError::Malformed(format!(
                            "operator {} needs one operand",
                            op
                        )))
                    }
                };
                match self.eval_expr(obj, frame, operand)? {
                    Value::Bool(b) => Ok(Value::Bool(!b)),
                    other => Err(RuntimeError::Type(format!(
                        "operator ! needs a boolean, got {}",
                        other.type_name()
                    ))),
                }
            }

            _ => Err(RuntimeError::Malformed(format!(
                "invalid expression {}",
                expr
            ))),
        }
    }

    /// Read rule: the frame binding wins if present, else the current
    /// object's field.
    pub(super) fn load_variable(
        &self,
        obj: &ObjectRef,
        frame: &Frame,
        name: &str,
    ) -> Result<Value, RuntimeError> {
        if let Some(value) = frame.get(name) {
            return Ok(value.clone());
        }
        if let Some(value) = obj.borrow().fields.get(name) {
            return Ok(value.clone());
        }
        Err(RuntimeError::Name(format!(
            "variable {} is not declared",
            name
        )))
    }
}
