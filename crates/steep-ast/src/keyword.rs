// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Fixed vocabulary of the Steep language.

/// Tag of a class declaration.
pub const CLASS: &str = "class";
/// Tag of a field declaration inside a class.
pub const FIELD: &str = "field";
/// Tag of a method declaration inside a class.
pub const METHOD: &str = "method";

/// Print statement.
pub const PRINT: &str = "print";
/// Assignment statement.
pub const SET: &str = "set";
/// Integer input statement.
pub const INPUT_INT: &str = "inputi";
/// String input statement.
pub const INPUT_STRING: &str = "inputs";
/// Method-call statement.
pub const CALL: &str = "call";
/// Loop statement.
pub const WHILE: &str = "while";
/// Conditional statement.
pub const IF: &str = "if";
/// Early-return statement.
pub const RETURN: &str = "return";
/// Statement block.
pub const BEGIN: &str = "begin";

/// Object-construction expression.
pub const NEW: &str = "new";
/// Self reference in a call target.
pub const ME: &str = "me";

/// The null literal.
pub const NULL: &str = "null";
/// The boolean true literal.
pub const TRUE: &str = "true";
/// The boolean false literal.
pub const FALSE: &str = "false";

/// Name of the class the driver instantiates to start a program.
pub const MAIN_CLASS: &str = "main";
/// Name of the no-argument method invoked on the entry object.
pub const MAIN_METHOD: &str = "main";
