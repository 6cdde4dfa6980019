//! Plain text rendering of sequences.

use std::fmt;
use std::io::{self, Write};

/// Displays a slice as its values, each followed by a single space.
///
/// ```text
/// 5 10 11 22 26 31 37 82 95
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Sequence<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in self.0 {
            write!(f, "{val} ")?;
        }

        Ok(())
    }
}

/// Writes `arr` to `out` as one newline terminated line.
pub fn write_sequence<W, T>(out: &mut W, arr: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: fmt::Display,
{
    writeln!(out, "{}", Sequence(arr))
}
