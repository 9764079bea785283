use std::collections::VecDeque;
use std::io::{self, BufRead};

pub enum Event {
    Token(String),
    Eof,
}

/// Splits console input into whitespace-delimited tokens, one line at a time.
/// Blocks only when the current line has been used up.
pub struct EventHandler<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> EventHandler<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    pub fn next(&mut self) -> io::Result<Event> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Event::Token(token));
            }

            // Invalid UTF-8 becomes U+FFFD so a garbled token is just unknown.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(Event::Eof);
            }
            self.pending
                .extend(String::from_utf8_lossy(&line).split_whitespace().map(str::to_string));
        }
    }
}
