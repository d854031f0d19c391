//! Millisecond clock port.
//!
//! Timed stream operations measure elapsed time through [`Clock`]. The counter
//! is allowed to wrap; elapsed time is always computed with wrapping
//! subtraction, so a timeout spanning the wrap point still expires on time.

use core::cell::Cell;
use core::fmt::Debug;

/// A monotonic millisecond counter.
///
/// Implementations return a free-running `u32` that wraps arithmetically
/// (roughly every 49.7 days at 1 kHz).
pub trait Clock: Debug {
    /// Current counter value in milliseconds.
    fn millis(&self) -> u32;

    /// Milliseconds elapsed since `start`, accounting for wrap-around.
    fn elapsed_since(&self, start: u32) -> u32 {
        self.millis().wrapping_sub(start)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u32 {
        (*self).millis()
    }
}

/// Deterministic clock that advances by a fixed step every time it is read.
///
/// Useful for simulations and tests: a timed read against an empty source
/// performs `timeout / step` polls before giving up, independent of wall time.
#[derive(Debug, Clone)]
pub struct StepClock {
    now: Cell<u32>,
    step: u32,
}

impl StepClock {
    /// Creates a clock starting at zero that advances 1 ms per read.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0, 1)
    }

    /// Creates a clock starting at `start` that advances `step` ms per read.
    #[must_use]
    pub const fn starting_at(start: u32, step: u32) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }

    /// Current value without advancing.
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    /// Moves the clock forward by `ms` without counting as a read.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StepClock {
    fn millis(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step));
        now
    }
}

/// Clock backed by a closure, typically a HAL's `millis()` function.
///
/// ```ignore
/// let clock = FnClock::new(|| hal::timer::millis());
/// ```
#[derive(Clone, Copy)]
pub struct FnClock<F>(F);

impl<F: Fn() -> u32> FnClock<F> {
    /// Wraps `f` as a clock.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Debug for FnClock<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("FnClock")
    }
}

impl<F: Fn() -> u32> Clock for FnClock<F> {
    fn millis(&self) -> u32 {
        (self.0)()
    }
}
