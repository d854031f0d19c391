//! The Printer contract: a byte sink with formatting helpers.
//!
//! Implementers supply [`Print::write_byte`] and access to a [`PrintState`];
//! every other operation has a default built on top of those. The generic
//! `print`/`println` entry points are on [`PrintExt`].

use core::ffi::CStr;
use core::fmt;

use crate::format;
use crate::printable::Printable;
use crate::state::PrintState;

/// Line terminator emitted by `println` and [`Print::newline`].
pub const LINE_ENDING: &[u8] = b"\r\n";

/// A byte sink.
///
/// Write operations return the number of bytes accepted. A short count is the
/// only per-call failure signal; implementations record the cause through the
/// sticky write error.
///
/// # Examples
///
/// ```
/// use charstream::{Fixed, Print, PrintExt, PrintState, Radix, HEX};
///
/// struct Buffer {
///     data: [u8; 32],
///     len: usize,
///     state: PrintState,
/// }
///
/// impl Print for Buffer {
///     fn write_byte(&mut self, byte: u8) -> usize {
///         match self.data.get_mut(self.len) {
///             Some(slot) => {
///                 *slot = byte;
///                 self.len += 1;
///                 1
///             }
///             None => {
///                 self.set_write_error(1);
///                 0
///             }
///         }
///     }
///
///     fn print_state(&self) -> &PrintState {
///         &self.state
///     }
///
///     fn print_state_mut(&mut self) -> &mut PrintState {
///         &mut self.state
///     }
/// }
///
/// let mut out = Buffer { data: [0; 32], len: 0, state: PrintState::new() };
/// out.print(&Radix(255u8, HEX));
/// out.print(" ");
/// out.print(&Fixed(1.999, 2));
/// assert_eq!(&out.data[..out.len], b"FF 2.00");
/// ```
pub trait Print {
    /// Writes one byte. Returns 1 on success, 0 on failure.
    fn write_byte(&mut self, byte: u8) -> usize;

    /// Sticky error state of this sink.
    fn print_state(&self) -> &PrintState;

    /// Mutable sticky error state of this sink.
    fn print_state_mut(&mut self) -> &mut PrintState;

    /// Writes `buf` one byte at a time, stopping at the first rejected byte.
    ///
    /// Overrides that forward bulk writes must still return the count the
    /// sink actually accepted.
    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        let mut n = 0;
        for &byte in buf {
            if self.write_byte(byte) == 0 {
                break;
            }
            n += 1;
        }
        n
    }

    /// Writes the bytes of `s`.
    fn write_text(&mut self, s: &str) -> usize {
        self.write_bytes(s.as_bytes())
    }

    /// Writes a NUL-terminated string, excluding the NUL. `None` writes nothing.
    fn write_cstr(&mut self, s: Option<&CStr>) -> usize {
        match s {
            Some(s) => self.write_bytes(s.to_bytes()),
            None => 0,
        }
    }

    /// Bytes that can be written without blocking. Zero means a single write
    /// may block.
    fn available_for_write(&mut self) -> i32 {
        0
    }

    /// Pushes out any buffered bytes.
    fn flush(&mut self) {}

    /// The latched write error code, or zero.
    fn write_error(&self) -> i32 {
        self.print_state().write_error()
    }

    /// Latches `code` as the write error.
    fn set_write_error(&mut self, code: i32) {
        debug!("write error set to {}", code);
        self.print_state_mut().set_write_error(code);
    }

    /// Resets the write error to zero.
    fn clear_write_error(&mut self) {
        self.print_state_mut().clear();
    }

    /// Prints an unsigned integer in `base`; base 0 writes the low byte raw.
    fn print_unsigned(&mut self, n: u64, base: u8) -> usize {
        format::write_unsigned(self, n, base)
    }

    /// Prints a signed integer in `base`.
    ///
    /// Decimal output carries a `'-'` sign; other bases print the 64-bit
    /// two's-complement pattern. [`Radix`](crate::Radix) keeps the pattern at
    /// the value's own width.
    fn print_signed(&mut self, n: i64, base: u8) -> usize {
        format::write_signed(self, n, base)
    }

    /// Prints `x` with `digits` places after the point.
    fn print_float(&mut self, x: f64, digits: i32) -> usize {
        format::write_float(self, x, digits)
    }

    /// Writes the line terminator `"\r\n"`.
    fn newline(&mut self) -> usize {
        self.write_bytes(LINE_ENDING)
    }

    /// Writes formatted arguments, returning the bytes accepted.
    ///
    /// ```
    /// # use charstream::{Print, PrintState};
    /// # struct Sink(Vec<u8>, PrintState);
    /// # impl Print for Sink {
    /// #     fn write_byte(&mut self, b: u8) -> usize { self.0.push(b); 1 }
    /// #     fn print_state(&self) -> &PrintState { &self.1 }
    /// #     fn print_state_mut(&mut self) -> &mut PrintState { &mut self.1 }
    /// # }
    /// let mut sink = Sink(Vec::new(), PrintState::new());
    /// assert_eq!(sink.print_fmt(format_args!("t={}ms", 42)), 6);
    /// assert_eq!(sink.0, b"t=42ms");
    /// ```
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> usize {
        let mut counter = FmtCounter {
            out: self,
            written: 0,
        };
        // a short write surfaces as fmt::Error; the count already tells the caller
        let _ = fmt::write(&mut counter, args);
        counter.written
    }
}

/// `print`/`println` for concrete sinks.
///
/// These live outside [`Print`] so that `dyn Print` can carry the same names
/// as inherent methods; inside [`Printable::print_to`] the sink is a trait
/// object and calls resolve to those.
pub trait PrintExt: Print + Sized {
    /// Prints any [`Printable`] value.
    fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        value.print_to(self)
    }

    /// Prints `value` followed by `"\r\n"`.
    fn println<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        let n = value.print_to(self);
        n + self.newline()
    }
}

impl<P: Print> PrintExt for P {}

impl dyn Print + '_ {
    /// [`PrintExt::print`] for trait objects.
    pub fn print<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        value.print_to(self)
    }

    /// [`PrintExt::println`] for trait objects.
    pub fn println<T: Printable + ?Sized>(&mut self, value: &T) -> usize {
        let n = value.print_to(self);
        n + self.newline()
    }
}

impl<P: Print + ?Sized> Print for &mut P {
    fn write_byte(&mut self, byte: u8) -> usize {
        (**self).write_byte(byte)
    }

    fn print_state(&self) -> &PrintState {
        (**self).print_state()
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        (**self).print_state_mut()
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        (**self).write_bytes(buf)
    }

    fn available_for_write(&mut self) -> i32 {
        (**self).available_for_write()
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

struct FmtCounter<'a, P: ?Sized> {
    out: &'a mut P,
    written: usize,
}

impl<P: Print + ?Sized> fmt::Write for FmtCounter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let n = self.out.write_bytes(s.as_bytes());
        self.written += n;
        if n == s.len() { Ok(()) } else { Err(fmt::Error) }
    }
}
