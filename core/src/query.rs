//! Newline-delimited query input.

use std::io::{self, BufRead};

use tracing::trace;

/// Iterates over complete lines of a query stream.
///
/// Each yielded line has its `\n` (and a preceding `\r`) removed. A final
/// fragment with no terminating newline is not a query: iteration ends there
/// and the fragment is dropped. Invalid UTF-8 is replaced, so such a line
/// simply never matches.
pub struct QueryLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> QueryLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for QueryLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();

        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) if self.buf.last() != Some(&b'\n') => {
                trace!(bytes = self.buf.len(), "dropping unterminated trailing line");
                None
            }
            Ok(_) => {
                self.buf.pop();
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
