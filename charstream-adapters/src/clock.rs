//! Wall-clock time source.

use std::time::Instant;

use charstream::Clock;

/// Milliseconds since construction, read from [`Instant`].
///
/// Truncated to `u32`, so the counter wraps after about 49.7 days.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    /// Starts counting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    #[allow(clippy::cast_possible_truncation)]
    fn millis(&self) -> u32 {
        // truncation is the wrap-around
        self.origin.elapsed().as_millis() as u32
    }
}
