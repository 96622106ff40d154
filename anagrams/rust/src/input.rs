use std::io::BufRead;

use tracing::trace;

use crate::{Result, MAX_WORD_LENGTH};

/// Lowercases a line, rejecting it if the result is empty or too long.
pub fn normalize(line: &str) -> Option<String> {
    let word = line.to_lowercase();
    if word.is_empty() || word.len() > MAX_WORD_LENGTH {
        return None;
    }
    Some(word)
}

/// Iterator of normalized words, one per input line.
pub struct Words<R> {
    reader: R,
    buf: Vec<u8>,
    skipped: usize,
}

pub fn words<R: BufRead>(reader: R) -> Words<R> {
    Words {
        reader,
        buf: Vec::new(),
        skipped: 0,
    }
}

impl<R> Words<R> {
    /// Lines dropped so far for being empty, too long, or not UTF-8.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Words<R> {
    /// Next raw line without its `\n` or `\r\n`, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&[u8]>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let mut line = &self.buf[..];
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => return Some(Err(e)),
            };

            let len = line.len();
            let word = match std::str::from_utf8(line) {
                Ok(line) => normalize(line),
                Err(_) => {
                    trace!(len, "line is not UTF-8");
                    None
                }
            };

            match word {
                Some(word) => return Some(Ok(word)),
                None => {
                    trace!(len, "skipping line");
                    self.skipped += 1;
                }
            }
        }
    }
}
