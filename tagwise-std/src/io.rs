//! I/O operations.

use std::fmt;
use std::io::{BufRead, Write};

use tagwise_core::{HandleAll, Produced, Tag, Unchanged};

/// Read the remaining input line by line, replacing the held reader with the
/// collected lines.
///
/// Line terminators (`\n` and `\r\n`) are stripped. Reading stops at end of
/// input or at the first read error; lines collected before an error are
/// kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lines;

impl Tag for Lines {}

impl<R: BufRead> HandleAll<R> for Lines {
    type Output = Produced<Vec<String>>;

    fn handle_all(self, reader: &mut R, _args: ()) -> Produced<Vec<String>> {
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    if buf.ends_with('\n') {
                        buf.pop();
                        if buf.ends_with('\r') {
                            buf.pop();
                        }
                    }
                    lines.push(buf.clone());
                }
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(count = lines.len(), "collected input lines");
        Produced(lines)
    }
}

/// Display the held value.
///
/// With `()` args the value goes to stdout followed by a newline; with a
/// `&mut W` writer arg it goes to the writer with no terminator. Write
/// errors are ignored, stdout being the usual sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Print;

impl Tag for Print {}

impl<V: fmt::Display> HandleAll<V> for Print {
    type Output = Unchanged;

    fn handle_all(self, value: &mut V, _args: ()) -> Unchanged {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{value}");
        Unchanged
    }
}

impl<'w, V: fmt::Display, W: Write> HandleAll<V, &'w mut W> for Print {
    type Output = Unchanged;

    fn handle_all(self, value: &mut V, out: &'w mut W) -> Unchanged {
        let _ = write!(out, "{value}");
        Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tagwise_core::prelude::*;
    use tagwise_core::wrap;

    #[test]
    fn lines_strips_both_terminator_styles() {
        let input = Cursor::new("alpha\r\nbeta\ngamma");
        let lines = wrap(input).apply(Lines, ()).unwrapped();
        assert_eq!(lines, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn lines_keeps_empty_lines() {
        let input = Cursor::new("a\n\nb\n");
        let lines = wrap(input).apply(Lines, ()).unwrapped();
        assert_eq!(lines, ["a", "", "b"]);
    }

    #[test]
    fn print_writes_to_the_given_writer() {
        let mut out = Vec::new();
        wrap(12).apply(Print, &mut out).run();
        assert_eq!(out, b"12");
    }
}
