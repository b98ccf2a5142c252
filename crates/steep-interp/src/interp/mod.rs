// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The evaluation engine.
//!
//! A tree-walk interpreter over the parsed program tree: the class table is
//! built once per program, objects are instantiated from it, and statements
//! execute directly against per-invocation binding frames. Evaluation is
//! synchronous and recursive; deeply nested user programs recurse as deep
//! as their nesting and call chains, like the language they are written in.

use std::rc::Rc;

use indexmap::IndexMap;

mod call;
mod eval_expr;
mod exec_stmt;
mod operators;
mod register;

use steep_ast::{keyword, Node};

use crate::decl::ClassDecl;
use crate::io::{InputSource, OutputSink, StdInput, StdOutput};
use crate::value::Value;

/// The tree-walk interpreter.
///
/// Owns the class table and the injected I/O capabilities; every statement
/// and expression evaluation call threads through this context rather than
/// reaching for ambient state.
pub struct Interpreter {
    /// Class declarations by name.
    classes: IndexMap<String, Rc<ClassDecl>>,
    /// Line sink for `print`.
    pub(crate) output: Box<dyn OutputSink>,
    /// Line source for `inputi`/`inputs`.
    pub(crate) input: Box<dyn InputSource>,
}

impl Interpreter {
    /// Interpreter wired to stdin/stdout.
    pub fn new() -> Self {
        Self::with_io(Box::new(StdOutput), Box::new(StdInput))
    }

    /// Interpreter with an injected output sink and input source.
    pub fn with_io(output: Box<dyn OutputSink>, input: Box<dyn InputSource>) -> Self {
        Self {
            classes: IndexMap::new(),
            output,
            input,
        }
    }

    /// Run a parsed program: load its classes, instantiate the entry class,
    /// and invoke the entry method with no arguments.
    ///
    /// Any error is fatal; no statement after the failing one executes.
    pub fn run(&mut self, program: &[Node]) -> Result<(), RuntimeError> {
        self.load_classes(program)?;
        let entry = self.lookup_class(keyword::MAIN_CLASS)?;
        let entry_obj = entry.instantiate();
        self.call_method(&entry_obj, keyword::MAIN_METHOD, Vec::new())?;
        Ok(())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// A runtime error.
///
/// The first four variants are the language's own fatal error kinds; the
/// remaining ones are engine-level faults a well-formed program and parser
/// never produce.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("name error: {0}")]
    Name(String),

    #[error("type error: {0}")]
    Type(String),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("fault error: {0}")]
    Fault(String),

    #[error("division by zero; check divisor before dividing")]
    DivisionByZero,

    #[error("input requested past end of input")]
    EndOfInput,

    #[error("malformed program tree: {0}")]
    Malformed(String),

    // Control flow (not an actual error): an early return unwinding to the
    // method-call boundary. `None` is the no-value marker of a bare return.
    #[error("return")]
    Return(Option<Value>),
}

/// Classification of a fatal error, for drivers that report status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Duplicate name at load time, or undeclared name at run time.
    Name,
    /// Operand, arity, condition, or construction type violation.
    Type,
    /// Structurally malformed declaration or control statement.
    Syntax,
    /// Method call through a null object reference.
    Fault,
    /// Engine-level fault outside the language's own taxonomy.
    Engine,
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::Name(_) => ErrorKind::Name,
            RuntimeError::Type(_) => ErrorKind::Type,
            RuntimeError::Syntax(_) => ErrorKind::Syntax,
            RuntimeError::Fault(_) => ErrorKind::Fault,
            RuntimeError::DivisionByZero
            | RuntimeError::EndOfInput
            | RuntimeError::Malformed(_)
            | RuntimeError::Return(_) => ErrorKind::Engine,
        }
    }
}
