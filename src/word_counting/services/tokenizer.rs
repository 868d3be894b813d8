use std::io::{self, BufRead};
use std::iter::FusedIterator;

/// Tokenizer service - lazy stream of whitespace-delimited tokens
///
/// Works directly on the reader's buffer, so arbitrarily large inputs are read
/// in a single pass. The stream ends only when `fill_buf` hands back an empty
/// slice; a token running up to end-of-input is yielded exactly once.
pub struct Tokenizer<R> {
    reader: R,
    finished: bool,
}

/// Space, tab, newline, vertical tab, form feed and carriage return.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

fn into_token(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            finished: false,
        }
    }

    /// Gives back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut token = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            };

            // The failed read is the only end-of-stream signal.
            if available.is_empty() {
                self.finished = true;
                return if token.is_empty() {
                    None
                } else {
                    Some(Ok(into_token(token)))
                };
            }

            let mut consumed = 0;
            let mut complete = false;
            for &byte in available {
                consumed += 1;
                if is_separator(byte) {
                    if token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
            }
            self.reader.consume(consumed);

            if complete {
                return Some(Ok(into_token(token)));
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Tokenizer<R> {}
