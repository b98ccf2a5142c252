// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Shared test helpers: a minimal s-expression reader so test programs can
//! be written as source text, plus runners that capture output and script
//! input. Test tooling only; the engine itself never parses.
#![allow(dead_code)]

use steep_ast::Node;
use steep_interp::{BufferOutput, Interpreter, RuntimeError, ScriptedInput};

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '(' | ')' => tokens.push(c.to_string()),
            '"' => {
                let mut token = String::from('"');
                for c in chars.by_ref() {
                    token.push(c);
                    if c == '"' {
                        break;
                    }
                }
                tokens.push(token);
            }
            c if c.is_whitespace() => {}
            c => {
                let mut token = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || next == '(' || next == ')' {
                        break;
                    }
                    token.push(next);
                    chars.next();
                }
                tokens.push(token);
            }
        }
    }
    tokens
}

/// Read a whole program (a sequence of class declarations).
pub fn read_program(text: &str) -> Vec<Node> {
    let mut stack: Vec<Vec<Node>> = vec![Vec::new()];
    for token in tokenize(text) {
        match token.as_str() {
            "(" => stack.push(Vec::new()),
            ")" => {
                let list = stack.pop().expect("unbalanced parens in test program");
                stack
                    .last_mut()
                    .expect("unbalanced parens in test program")
                    .push(Node::List(list));
            }
            _ => stack
                .last_mut()
                .expect("unbalanced parens in test program")
                .push(Node::Token(token)),
        }
    }
    assert_eq!(stack.len(), 1, "unbalanced parens in test program");
    stack.pop().unwrap()
}

/// Run a program with no input; returns the result and the output lines.
pub fn run_program(text: &str) -> (Result<(), RuntimeError>, Vec<String>) {
    run_with_input(text, &[])
}

/// Run a program against a fixed input script.
pub fn run_with_input(text: &str, input: &[&str]) -> (Result<(), RuntimeError>, Vec<String>) {
    let output = BufferOutput::new();
    let mut interp = Interpreter::with_io(
        Box::new(output.clone()),
        Box::new(ScriptedInput::new(input.iter().copied())),
    );
    let result = interp.run(&read_program(text));
    (result, output.lines())
}
