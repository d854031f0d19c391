//! In-memory loopback stream.

use alloc::collections::VecDeque;

use charstream::{Clock, Print, PrintState, StepClock, Stream, Timing, WRITE_ERROR_DEFAULT};

/// A stream whose writes become its own input.
///
/// Bytes printed to the stream are queued and handed back, in order, by
/// `read`. An optional capacity bound makes writes fail once the queue is
/// full, which latches the write error.
///
/// ```
/// use charstream::{PrintExt, StepClock, Stream};
/// use charstream_adapters::LoopbackStream;
///
/// let mut stream = LoopbackStream::new(StepClock::new());
/// stream.print("This is a test string");
/// assert!(stream.find(b"test"));
/// assert_eq!(stream.read_string(), b" string");
/// ```
#[derive(Debug, Clone)]
pub struct LoopbackStream<C = StepClock> {
    queue: VecDeque<u8>,
    capacity: Option<usize>,
    state: PrintState,
    timing: Timing<C>,
}

impl<C: Clock> LoopbackStream<C> {
    /// Creates an unbounded loopback stream.
    pub fn new(clock: C) -> Self {
        Self {
            queue: VecDeque::new(),
            capacity: None,
            state: PrintState::new(),
            timing: Timing::new(clock),
        }
    }

    /// Creates a loopback stream that holds at most `capacity` unread bytes.
    pub fn bounded(clock: C, capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            state: PrintState::new(),
            timing: Timing::new(clock),
        }
    }

    /// Unread bytes.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is waiting to be read.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every unread byte.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    fn room(&self) -> usize {
        self.capacity.map_or(usize::MAX, |cap| cap.saturating_sub(self.queue.len()))
    }
}

impl<C: Clock> Print for LoopbackStream<C> {
    fn write_byte(&mut self, byte: u8) -> usize {
        if self.room() == 0 {
            debug!("loopback full at {} bytes", self.queue.len());
            self.state.latch(WRITE_ERROR_DEFAULT);
            return 0;
        }
        self.queue.push_back(byte);
        1
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }

    fn available_for_write(&mut self) -> i32 {
        i32::try_from(self.room()).unwrap_or(i32::MAX)
    }
}

impl<C: Clock> Stream for LoopbackStream<C> {
    type Clock = C;

    fn available(&mut self) -> usize {
        self.queue.len()
    }

    fn read(&mut self) -> Option<u8> {
        self.queue.pop_front()
    }

    fn peek(&mut self) -> Option<u8> {
        self.queue.front().copied()
    }

    fn timing(&self) -> &Timing<C> {
        &self.timing
    }

    fn timing_mut(&mut self) -> &mut Timing<C> {
        &mut self.timing
    }
}
