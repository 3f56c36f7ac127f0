//! Console I/O
//!
//! Wraps any `BufRead`/`Write` pair so the session can run against a real
//! terminal or in-memory buffers. Menu selections and searched items are
//! read as a stream of whitespace-separated tokens, so several answers may
//! be typed ahead on one line. Input bytes that are not valid UTF-8 are
//! replaced rather than rejected.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Tokens left over from the last line read by `read_token`
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write text as-is and flush, so prompts appear before input is read
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn next_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// Next whole line with surrounding whitespace removed; `None` at end of
    /// input. Tokens still pending from an earlier line are dropped.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.pending.clear();
        Ok(self.next_raw_line()?.map(|line| line.trim().to_string()))
    }

    /// Next whitespace-separated token, reading further lines as needed.
    /// `None` at end of input.
    pub fn read_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let Some(line) = self.next_raw_line()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Drop whatever is left of the current line
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
