// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Tree-walk interpreter for the Steep language.
//!
//! Executes an already-parsed program tree directly; lexing and parsing
//! live outside this crate, as do the line sink and line source the engine
//! prints to and reads from.

mod decl;
mod frame;
mod interp;
mod io;
mod object;
mod value;

pub use decl::{ClassDecl, FieldDecl, MethodDecl};
pub use interp::{ErrorKind, Interpreter, RuntimeError};
pub use io::{BufferOutput, InputSource, OutputSink, ScriptedInput, StdInput, StdOutput};
pub use object::Object;
pub use value::{ObjectRef, Value};
