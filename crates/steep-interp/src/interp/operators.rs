// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Binary operator semantics.

use std::rc::Rc;

use crate::value::Value;

use super::{Interpreter, RuntimeError};

impl Interpreter {
    /// Apply a binary operator to two evaluated operands, enforcing the
    /// language's operand-type table.
    pub(super) fn eval_binop(&self, op: &str, l: Value, r: Value) -> Result<Value, RuntimeError> {
        match (op, &l, &r) {
            ("+", Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
            ("-", Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
            ("*", Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
            ("/", Value::Int(a), Value::Int(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Int(floor_div(*a, *b)))
            }
            ("%", Value::Int(a), Value::Int(b)) => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(Value::Int(floor_mod(*a, *b)))
            }
            ("+", Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),

            ("<", Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
            (">", Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a > b)),
            ("<=", Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a <= b)),
            (">=", Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a >= b)),

            ("==", _, _) => Ok(Value::Bool(value_eq(&l, &r)?)),
            ("!=", _, _) => Ok(Value::Bool(!value_eq(&l, &r)?)),

            ("&", Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
            ("|", Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a || *b)),

            _ => Err(RuntimeError::Type(format!(
                "cannot apply operator {} to {} and {}",
                op,
                l.type_name(),
                r.type_name()
            ))),
        }
    }
}

/// Structural equality for matching primitive kinds, reference identity for
/// objects; null equals only null. Any other pairing is a type error.
fn value_eq(l: &Value, r: &Value) -> Result<bool, RuntimeError> {
    match (l, r) {
        (Value::Int(a), Value::Int(b)) => Ok(a == b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a == b),
        (Value::Str(a), Value::Str(b)) => Ok(a == b),
        (Value::Null, Value::Null) => Ok(true),
        (Value::Object(a), Value::Object(b)) => Ok(Rc::ptr_eq(a, b)),
        (Value::Object(_), Value::Null) | (Value::Null, Value::Object(_)) => Ok(false),
        _ => Err(RuntimeError::Type(format!(
            "cannot compare {} and {} for equality",
            l.type_name(),
            r.type_name()
        ))),
    }
}

/// Division rounding toward negative infinity, like the language demands:
/// 7 / 2 = 3 and -7 / 2 = -4.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Remainder matching floor division: -7 % 2 = 1.
fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a % b;
    if r != 0 && (r < 0) != (b < 0) {
        r + b
    } else {
        r
    }
}
