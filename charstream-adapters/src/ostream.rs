//! Printers over `std::io::Write`.
//!
//! [`PutPrinter`] forwards one byte per call; [`StdPrinter`] also forwards bulk
//! writes in a single call to the writer. Both report an effectively unbounded
//! write buffer.

use std::io::{ErrorKind, Write};

use charstream::{Print, PrintState, WRITE_ERROR_DEFAULT};

/// Printer that hands each byte to the writer individually.
///
/// # Example
///
/// ```
/// use charstream::PrintExt;
/// use charstream_adapters::PutPrinter;
///
/// let mut out = PutPrinter::new(Vec::new());
/// out.println("boot");
/// assert_eq!(out.get_ref(), b"boot\r\n");
/// ```
#[derive(Debug)]
pub struct PutPrinter<W> {
    inner: W,
    state: PrintState,
}

impl<W: Write> PutPrinter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: PrintState::new(),
        }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// The wrapped writer, mutably.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Print for PutPrinter<W> {
    fn write_byte(&mut self, byte: u8) -> usize {
        match self.inner.write_all(&[byte]) {
            Ok(()) => 1,
            Err(_) => {
                warn!("byte write failed");
                self.state.latch(WRITE_ERROR_DEFAULT);
                0
            }
        }
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }

    fn available_for_write(&mut self) -> i32 {
        i32::MAX
    }

    fn flush(&mut self) {
        if self.inner.flush().is_err() {
            warn!("flush failed");
            self.state.latch(WRITE_ERROR_DEFAULT);
        }
    }
}

/// Printer that forwards multi-byte writes to the writer in one call.
#[derive(Debug)]
pub struct StdPrinter<W> {
    inner: W,
    state: PrintState,
}

impl<W: Write> StdPrinter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: PrintState::new(),
        }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// The wrapped writer, mutably.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Print for StdPrinter<W> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        let mut written = 0;
        while written < buf.len() {
            match self.inner.write(&buf[written..]) {
                Ok(0) => {
                    warn!("writer accepted 0 of {} bytes", buf.len() - written);
                    self.state.latch(WRITE_ERROR_DEFAULT);
                    break;
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(_) => {
                    warn!("bulk write failed after {} bytes", written);
                    self.state.latch(WRITE_ERROR_DEFAULT);
                    break;
                }
            }
        }
        written
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }

    fn available_for_write(&mut self) -> i32 {
        i32::MAX
    }

    fn flush(&mut self) {
        if self.inner.flush().is_err() {
            warn!("flush failed");
            self.state.latch(WRITE_ERROR_DEFAULT);
        }
    }
}
