// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Injected I/O capabilities.
//!
//! The engine never touches stdin/stdout directly: the driver hands it a
//! line sink and a line source. The buffer-backed implementations serve
//! tests and embedders that capture output or script input.

use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;

/// Receives one output line at a time.
pub trait OutputSink {
    fn write_line(&mut self, line: &str);
}

/// Yields one input line at a time, blocking until a line is available.
pub trait InputSource {
    /// Next line without its trailing newline, or `None` once exhausted.
    fn read_line(&mut self) -> Option<String>;
}

/// Sink that writes to stdout.
#[derive(Debug, Default)]
pub struct StdOutput;

impl OutputSink for StdOutput {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Source that reads lines from stdin.
#[derive(Debug, Default)]
pub struct StdInput;

impl InputSource for StdInput {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
}

/// Sink that appends lines to a shared buffer.
///
/// Clones share the buffer, so a test can keep one handle and give the
/// interpreter the other.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    lines: Rc<RefCell<Vec<String>>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl OutputSink for BufferOutput {
    fn write_line(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Source that replays a fixed script of lines.
#[derive(Debug)]
pub struct ScriptedInput {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        ScriptedInput {
            lines: lines.into_iter(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.next()
    }
}
