//! The Stream contract: a byte source layered on top of [`Print`].
//!
//! Implementers supply nonblocking [`available`](Stream::available),
//! [`read`](Stream::read) and [`peek`](Stream::peek) plus the timing state.
//! Every parsing and searching helper is built on the two timed primitives,
//! which poll the source until a byte arrives or the timeout elapses.

use crate::clock::Clock;
use crate::lookahead::{LookaheadMode, is_numeric_start, is_skippable_whitespace};
use crate::print::Print;
use crate::search::{MultiTarget, advance_all};
use crate::state::Timing;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A byte source that is also a [`Print`] sink.
///
/// A `None` from any read or peek means no byte was available; from a timed
/// operation it means the timeout elapsed. Timed operations always make at
/// least one attempt, even with a zero timeout.
pub trait Stream: Print {
    /// Clock used to measure timeouts.
    type Clock: Clock;

    /// Bytes that can be read immediately.
    fn available(&mut self) -> usize;

    /// Takes the next byte if one is available. Must not block.
    fn read(&mut self) -> Option<u8>;

    /// Returns the next byte without consuming it. Must not block.
    fn peek(&mut self) -> Option<u8>;

    /// Timeout state of this source.
    fn timing(&self) -> &Timing<Self::Clock>;

    /// Mutable timeout state of this source.
    fn timing_mut(&mut self) -> &mut Timing<Self::Clock>;

    /// Sets the timeout, in milliseconds, used by every timed operation.
    fn set_timeout(&mut self, timeout_ms: u32) {
        self.timing_mut().set_timeout(timeout_ms);
    }

    /// The current timeout in milliseconds.
    fn timeout(&self) -> u32 {
        self.timing().timeout()
    }

    /// Reads a byte, polling until one arrives or the timeout elapses.
    fn timed_read(&mut self) -> Option<u8> {
        self.timing_mut().start();
        loop {
            if let Some(byte) = self.read() {
                return Some(byte);
            }
            if self.timing().expired() {
                trace!("timed read expired after {} ms", self.timeout());
                return None;
            }
        }
    }

    /// Peeks a byte, polling until one arrives or the timeout elapses.
    fn timed_peek(&mut self) -> Option<u8> {
        self.timing_mut().start();
        loop {
            if let Some(byte) = self.peek() {
                return Some(byte);
            }
            if self.timing().expired() {
                trace!("timed peek expired after {} ms", self.timeout());
                return None;
            }
        }
    }

    /// Peeks the first byte that could start a number, applying `mode` to
    /// whatever comes before it.
    ///
    /// The numeric byte itself is left in the source. Under
    /// [`LookaheadMode::SkipWhitespace`] only whitespace is consumed; any other
    /// non-numeric byte stays put and `None` is returned.
    fn peek_next_digit(&mut self, mode: LookaheadMode, allow_decimal: bool) -> Option<u8> {
        loop {
            let byte = self.timed_peek()?;
            if is_numeric_start(byte, allow_decimal) {
                return Some(byte);
            }
            match mode {
                LookaheadMode::SkipNone => return None,
                LookaheadMode::SkipWhitespace if !is_skippable_whitespace(byte) => return None,
                LookaheadMode::SkipWhitespace | LookaheadMode::SkipAll => {}
            }
            self.read();
        }
    }

    /// Parses the next integer.
    ///
    /// Returns 0 when no numeric byte arrives in time. Once parsing starts,
    /// `ignore` bytes inside the number are skipped; pass [`NO_IGNORE`](crate::NO_IGNORE) to
    /// disable that. Overflow wraps.
    fn parse_int(&mut self, mode: LookaheadMode, ignore: u8) -> i32 {
        let Some(mut byte) = self.peek_next_digit(mode, false) else {
            return 0;
        };

        let mut negative = false;
        let mut value: i32 = 0;
        loop {
            if byte == ignore {
                // separator
            } else if byte == b'-' {
                negative = true;
            } else if byte.is_ascii_digit() {
                value = value.wrapping_mul(10).wrapping_add(i32::from(byte - b'0'));
            }
            self.read();

            match self.timed_peek() {
                Some(next) if next.is_ascii_digit() || next == ignore => byte = next,
                _ => break,
            }
        }

        if negative { value.wrapping_neg() } else { value }
    }

    /// [`parse_int`](Self::parse_int) with [`LookaheadMode::SkipAll`].
    fn parse_int_ignoring(&mut self, ignore: u8) -> i32 {
        self.parse_int(LookaheadMode::SkipAll, ignore)
    }

    /// Parses the next decimal number, accepting one `'.'`.
    ///
    /// Returns 0.0 when no numeric byte arrives in time.
    #[allow(clippy::cast_possible_truncation)]
    fn parse_float(&mut self, mode: LookaheadMode, ignore: u8) -> f32 {
        let Some(mut byte) = self.peek_next_digit(mode, true) else {
            return 0.0;
        };

        let mut negative = false;
        let mut in_fraction = false;
        let mut value = 0.0f64;
        let mut scale = 1.0f64;
        loop {
            if byte == ignore {
                // separator
            } else if byte == b'-' {
                negative = true;
            } else if byte == b'.' {
                in_fraction = true;
            } else if byte.is_ascii_digit() {
                let digit = f64::from(byte - b'0');
                if in_fraction {
                    scale *= 0.1;
                    value += scale * digit;
                } else {
                    value = value * 10.0 + digit;
                }
            }
            self.read();

            match self.timed_peek() {
                Some(next)
                    if next.is_ascii_digit()
                        || (next == b'.' && !in_fraction)
                        || next == ignore =>
                {
                    byte = next;
                }
                _ => break,
            }
        }

        if negative {
            value = -value;
        }
        // parsed in double precision, reported in single
        value as f32
    }

    /// [`parse_float`](Self::parse_float) with [`LookaheadMode::SkipAll`].
    fn parse_float_ignoring(&mut self, ignore: u8) -> f32 {
        self.parse_float(LookaheadMode::SkipAll, ignore)
    }

    /// Reads until one of `targets` has been seen in full.
    ///
    /// Returns the index of the first target to complete, or `None` on
    /// timeout. An empty pattern matches immediately, earliest index first.
    /// The source is left just past the winning match.
    fn find_multi(&mut self, targets: &mut [MultiTarget<'_>]) -> Option<usize> {
        if let Some(empty) = targets.iter().position(MultiTarget::is_empty) {
            return Some(empty);
        }

        loop {
            let byte = self.timed_read()?;
            if let Some(winner) = advance_all(targets, byte) {
                trace!("search matched target {}", winner);
                return Some(winner);
            }
        }
    }

    /// Reads until `target` is found. Returns `false` on timeout.
    fn find(&mut self, target: &[u8]) -> bool {
        self.find_until_prefix(target, target.len(), None, 0)
    }

    /// Reads until the first `length` bytes of `target` are found.
    fn find_prefix(&mut self, target: &[u8], length: usize) -> bool {
        self.find_until_prefix(target, length, None, 0)
    }

    /// Reads until `byte` is found.
    fn find_byte(&mut self, byte: u8) -> bool {
        self.find(&[byte])
    }

    /// Reads until `target` is found, giving up if `terminator` comes first.
    fn find_until(&mut self, target: &[u8], terminator: &[u8]) -> bool {
        self.find_until_prefix(target, target.len(), Some(terminator), terminator.len())
    }

    /// [`find_until`](Self::find_until) over explicit prefixes of both
    /// patterns. Without a terminator this is a plain search.
    ///
    /// Lengths beyond a pattern's end are clamped to the pattern.
    fn find_until_prefix(
        &mut self,
        target: &[u8],
        target_len: usize,
        terminator: Option<&[u8]>,
        term_len: usize,
    ) -> bool {
        let target = MultiTarget::new(&target[..target_len.min(target.len())]);
        match terminator {
            None => self.find_multi(&mut [target]) == Some(0),
            Some(term) => {
                let term = MultiTarget::new(&term[..term_len.min(term.len())]);
                self.find_multi(&mut [target, term]) == Some(0)
            }
        }
    }

    /// Fills `buf` from the source, stopping early on timeout.
    ///
    /// Returns the number of bytes stored.
    fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        for slot in buf.iter_mut() {
            let Some(byte) = self.timed_read() else {
                break;
            };
            *slot = byte;
            count += 1;
        }
        count
    }

    /// Like [`read_bytes`](Self::read_bytes), also stopping at `terminator`,
    /// which is consumed but not stored.
    fn read_bytes_until(&mut self, terminator: u8, buf: &mut [u8]) -> usize {
        let mut count = 0;
        for slot in buf.iter_mut() {
            match self.timed_read() {
                Some(byte) if byte != terminator => {
                    *slot = byte;
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }

    /// Collects bytes until the source stays quiet for a full timeout.
    #[cfg(feature = "alloc")]
    fn read_string(&mut self) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(byte) = self.timed_read() {
            out.push(byte);
        }
        out
    }

    /// Collects bytes up to `terminator` (consumed, not included) or timeout.
    #[cfg(feature = "alloc")]
    fn read_string_until(&mut self, terminator: u8) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(byte) = self.timed_read() {
            if byte == terminator {
                break;
            }
            out.push(byte);
        }
        out
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Clock = S::Clock;

    fn available(&mut self) -> usize {
        (**self).available()
    }

    fn read(&mut self) -> Option<u8> {
        (**self).read()
    }

    fn peek(&mut self) -> Option<u8> {
        (**self).peek()
    }

    fn timing(&self) -> &Timing<Self::Clock> {
        (**self).timing()
    }

    fn timing_mut(&mut self) -> &mut Timing<Self::Clock> {
        (**self).timing_mut()
    }
}
