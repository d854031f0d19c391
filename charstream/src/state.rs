//! State records shared by the Print and Stream roles.

use crate::clock::Clock;

/// Error code latched when an implementation does not pick its own.
pub const WRITE_ERROR_DEFAULT: i32 = 1;

/// Default timeout for timed stream operations, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// Sticky write-error state carried by every [`Print`](crate::Print) sink.
///
/// The code starts at zero and stays at whatever nonzero value was last set
/// until explicitly cleared.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintState {
    write_error: i32,
}

impl PrintState {
    /// Creates a state with no error latched.
    #[must_use]
    pub const fn new() -> Self {
        Self { write_error: 0 }
    }

    /// The latched code, or zero.
    #[inline]
    pub const fn write_error(&self) -> i32 {
        self.write_error
    }

    /// Overwrites the latched code.
    #[inline]
    pub fn set_write_error(&mut self, code: i32) {
        self.write_error = code;
    }

    /// Latches `code` only if no error is currently latched.
    ///
    /// Returns `true` if the code was stored.
    pub fn latch(&mut self, code: i32) -> bool {
        if self.write_error == 0 {
            self.write_error = code;
            true
        } else {
            false
        }
    }

    /// Resets the latched code to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.write_error = 0;
    }
}

/// Timeout bookkeeping for a [`Stream`](crate::Stream) source.
#[derive(Debug, Clone)]
pub struct Timing<C> {
    clock: C,
    timeout_ms: u32,
    start_ms: u32,
}

impl<C: Clock> Timing<C> {
    /// Creates timing state with [`DEFAULT_TIMEOUT_MS`].
    pub fn new(clock: C) -> Self {
        Self::with_timeout(clock, DEFAULT_TIMEOUT_MS)
    }

    /// Creates timing state with an explicit timeout.
    pub fn with_timeout(clock: C, timeout_ms: u32) -> Self {
        Self {
            clock,
            timeout_ms,
            start_ms: 0,
        }
    }

    /// Current timeout in milliseconds.
    #[inline]
    pub fn timeout(&self) -> u32 {
        self.timeout_ms
    }

    /// Sets the timeout applied to every timed operation.
    #[inline]
    pub fn set_timeout(&mut self, timeout_ms: u32) {
        self.timeout_ms = timeout_ms;
    }

    /// Timestamp recorded by the last call to [`start`](Self::start).
    #[inline]
    pub fn start_ms(&self) -> u32 {
        self.start_ms
    }

    /// Records the start of a timed operation.
    pub fn start(&mut self) {
        self.start_ms = self.clock.millis();
    }

    /// Whether the timeout has elapsed since the last [`start`](Self::start).
    pub fn expired(&self) -> bool {
        self.clock.elapsed_since(self.start_ms) >= self.timeout_ms
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
