//! Printer that collects output in a growable byte buffer.

use alloc::vec::Vec;

use charstream::{Print, PrintState};

/// Printer that appends to an in-memory buffer.
///
/// An initial value is kept and appended to, never overwritten.
///
/// ```
/// use charstream::PrintExt;
/// use charstream_adapters::StringPrinter;
///
/// let mut out = StringPrinter::with_contents("t=");
/// out.print(&42u32);
/// assert_eq!(out.contents(), b"t=42");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringPrinter {
    buf: Vec<u8>,
    state: PrintState,
}

impl StringPrinter {
    /// Creates an empty printer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a printer that appends after `initial`.
    pub fn with_contents(initial: impl Into<Vec<u8>>) -> Self {
        Self {
            buf: initial.into(),
            state: PrintState::new(),
        }
    }

    /// Everything written so far.
    pub fn contents(&self) -> &[u8] {
        &self.buf
    }

    /// The contents as UTF-8, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.buf).ok()
    }

    /// Replaces the contents; later writes append to `contents`.
    pub fn set_contents(&mut self, contents: impl Into<Vec<u8>>) {
        self.buf = contents.into();
    }

    /// Empties the buffer and resets the write error.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.state.clear();
    }

    /// Consumes the printer, returning the buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Print for StringPrinter {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.buf.push(byte);
        1
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        self.buf.extend_from_slice(buf);
        buf.len()
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }

    /// Spare capacity; zero right before the buffer has to grow.
    fn available_for_write(&mut self) -> i32 {
        let spare = self.buf.capacity() - self.buf.len();
        i32::try_from(spare).unwrap_or(i32::MAX)
    }
}
