use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Source of answers for the interactive session.
pub trait Prompter {
    /// Next answer, or `UnexpectedEof` once input is exhausted.
    fn read_answer(&mut self) -> io::Result<String>;
}

/// Reads whitespace-separated tokens, so several answers may share a line
/// and blank lines are skipped.
pub struct TokenPrompter<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Prompter for TokenPrompter<R> {
    fn read_answer(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before all answers were given",
                ));
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
