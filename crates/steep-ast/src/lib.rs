// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Parse-tree types for the Steep language.
//!
//! This crate defines the tagged-tree nodes and the fixed vocabulary
//! shared between the parser and the interpreter.

pub mod keyword;
pub mod node;

pub use node::Node;
