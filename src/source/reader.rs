//! Byte-tolerant line reading.

use std::borrow::Cow;
use std::io::{self, BufRead};

use log::debug;

/// Lines of a buffered reader, decoded lossily.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of ending the
/// stream. A trailing `\n` or `\r\n` is stripped. Read errors are passed
/// through and end the iteration.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    done: bool,
}

impl<R: BufRead> LossyLines<R> {
    pub fn new(reader: R) -> Self {
        LossyLines {
            reader,
            buffer: Vec::new(),
            line_number: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                if self.buffer.last() == Some(&b'\n') {
                    self.buffer.pop();
                    if self.buffer.last() == Some(&b'\r') {
                        self.buffer.pop();
                    }
                }
                let line = String::from_utf8_lossy(&self.buffer);
                if matches!(line, Cow::Owned(_)) {
                    debug!("line {} is not valid UTF-8, replaced bad bytes", self.line_number);
                }
                Some(Ok(line.into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(bytes: &[u8]) -> Vec<String> {
        LossyLines::new(Cursor::new(bytes.to_vec()))
            .map(|l| l.unwrap())
            .collect()
    }

    #[test]
    fn test_invalid_bytes_are_replaced() {
        let lines = read_all(b"first\n\xff\xfebad\nthird\n");
        assert_eq!(lines, vec!["first", "\u{fffd}\u{fffd}bad", "third"]);
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(read_all(b"a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert!(read_all(b"").is_empty());
    }
}
