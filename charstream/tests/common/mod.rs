//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use charstream::{Print, PrintState, StepClock, Stream, Timing};

/// Stream over a scripted byte sequence.
///
/// Each byte carries the clock reading at which it becomes readable, so
/// tests can model a sender that pauses between bursts.
pub struct ScriptedStream {
    input: VecDeque<(u32, u8)>,
    pub output: Vec<u8>,
    state: PrintState,
    timing: Timing<StepClock>,
}

impl ScriptedStream {
    /// All of `bytes` readable immediately, with a 10 ms timeout.
    pub fn new(bytes: &[u8]) -> Self {
        let mut stream = Self {
            input: VecDeque::new(),
            output: Vec::new(),
            state: PrintState::new(),
            timing: Timing::with_timeout(StepClock::new(), 10),
        };
        stream.push_at(0, bytes);
        stream
    }

    /// Queues `bytes` to arrive once the clock reaches `at_ms`.
    pub fn push_at(&mut self, at_ms: u32, bytes: &[u8]) {
        self.input.extend(bytes.iter().map(|&b| (at_ms, b)));
    }

    /// Unread bytes, regardless of arrival time.
    pub fn rest(&self) -> Vec<u8> {
        self.input.iter().map(|&(_, b)| b).collect()
    }

    pub fn now(&self) -> u32 {
        self.timing().clock().now()
    }

    fn ready(&self) -> bool {
        self.input.front().is_some_and(|&(at, _)| at <= self.now())
    }
}

impl Print for ScriptedStream {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.output.push(byte);
        1
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }
}

impl Stream for ScriptedStream {
    type Clock = StepClock;

    fn available(&mut self) -> usize {
        let now = self.now();
        self.input.iter().take_while(|&&(at, _)| at <= now).count()
    }

    fn read(&mut self) -> Option<u8> {
        if !self.ready() {
            return None;
        }
        self.input.pop_front().map(|(_, b)| b)
    }

    fn peek(&mut self) -> Option<u8> {
        if !self.ready() {
            return None;
        }
        self.input.front().map(|&(_, b)| b)
    }

    fn timing(&self) -> &Timing<StepClock> {
        &self.timing
    }

    fn timing_mut(&mut self) -> &mut Timing<StepClock> {
        &mut self.timing
    }
}

/// Sink collecting into a `Vec`, optionally refusing bytes past `limit`.
#[derive(Default)]
pub struct VecSink {
    pub bytes: Vec<u8>,
    limit: Option<usize>,
    state: PrintState,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or("<invalid utf-8>")
    }
}

impl Print for VecSink {
    fn write_byte(&mut self, byte: u8) -> usize {
        if self.limit.is_some_and(|limit| self.bytes.len() >= limit) {
            self.print_state_mut().latch(charstream::WRITE_ERROR_DEFAULT);
            return 0;
        }
        self.bytes.push(byte);
        1
    }

    fn print_state(&self) -> &PrintState {
        &self.state
    }

    fn print_state_mut(&mut self) -> &mut PrintState {
        &mut self.state
    }
}
