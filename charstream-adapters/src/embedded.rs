//! Bridges to the `embedded-io` traits.
//!
//! - [`EmbeddedPrinter`]: a [`Print`] sink over any `embedded_io::Write`.
//! - [`EmbeddedStream`]: a full [`Stream`] over a device that is
//!   `Read + ReadReady + Write`, e.g. a HAL UART.
//! - [`PrintWriter`]: the other direction, exposing any [`Print`] sink as an
//!   `embedded_io::Write`.
//!
//! The Print/Stream contract reports failures only through byte counts and
//! the sticky write error, so the adapters keep the last transport error for
//! callers that want the cause (`take_error`).

use core::convert::Infallible;

use charstream::{Clock, Print, PrintState, Stream, Timing, WRITE_ERROR_DEFAULT};
use embedded_io::{ErrorType, Read, ReadReady, Write};

use crate::error::AdapterError;

/// Writes `buf` through `inner`, returning how many bytes it accepted.
fn write_through<W: Write>(
    inner: &mut W,
    buf: &[u8],
    state: &mut PrintState,
    last_error: &mut Option<AdapterError<W::Error>>,
) -> usize {
    let mut written = 0;
    while written < buf.len() {
        match inner.write(&buf[written..]) {
            Ok(0) => {
                warn!("device accepted 0 of {} bytes", buf.len() - written);
                state.latch(WRITE_ERROR_DEFAULT);
                break;
            }
            Ok(n) => written += n,
            Err(e) => {
                warn!("device write failed after {} bytes", written);
                *last_error = Some(AdapterError::Io(e));
                state.latch(WRITE_ERROR_DEFAULT);
                break;
            }
        }
    }
    written
}

/// [`Print`] sink over an `embedded_io::Write` device.
///
/// ```ignore
/// let mut console = EmbeddedPrinter::new(uart_tx);
/// console.println("booted");
/// ```
pub struct EmbeddedPrinter<W: ErrorType> {
    inner: W,
    state: PrintState,
    last_error: Option<AdapterError<W::Error>>,
}

impl<W: Write> EmbeddedPrinter<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            state: PrintState::new(),
            last_error: None,
        }
    }

    /// Takes the last transport error, if any.
    pub fn take_error(&mut self) -> Option<AdapterError<W::Error>> {
        self.last_error.take()
    }

    /// The wrapped device.
    pub fn inner(&self) -> &W {
        &self.inner
    }

    /// The wrapped device, mutably.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the device.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Print for EmbeddedPrinter<W> {
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        write_through(&mut self.inner, buf, &mut self.state, &mut self.last_error)
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
        if let Err(e) = self.inner.flush() {
            warn!("device flush failed");
            self.last_error = Some(AdapterError::Io(e));
            self.state.latch(WRITE_ERROR_DEFAULT);
        }
    }
}

/// [`Stream`] over an `embedded_io` device.
///
/// `ReadReady` keeps reads nonblocking; a one-byte slot provides `peek`.
pub struct EmbeddedStream<T: ErrorType, C> {
    inner: T,
    peeked: Option<u8>,
    state: PrintState,
    timing: Timing<C>,
    last_error: Option<AdapterError<T::Error>>,
}

impl<T, C> EmbeddedStream<T, C>
where
    T: Read + ReadReady + Write,
    C: Clock,
{
    /// Wraps `inner`, measuring timeouts with `clock`.
    pub fn new(inner: T, clock: C) -> Self {
        Self {
            inner,
            peeked: None,
            state: PrintState::new(),
            timing: Timing::new(clock),
            last_error: None,
        }
    }

    /// Takes the last transport error, if any.
    pub fn take_error(&mut self) -> Option<AdapterError<T::Error>> {
        self.last_error.take()
    }

    /// The wrapped device.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// The wrapped device, mutably.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the device, dropping any peeked byte.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Pulls one byte into the peek slot if the device has one ready.
    fn fill(&mut self) {
        if self.peeked.is_some() {
            return;
        }
        match self.inner.read_ready() {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                warn!("device read_ready failed");
                self.last_error = Some(AdapterError::Io(e));
                return;
            }
        }
        let mut byte = [0u8; 1];
        match self.inner.read(&mut byte) {
            Ok(1) => self.peeked = Some(byte[0]),
            Ok(_) => {}
            Err(e) => {
                warn!("device read failed");
                self.last_error = Some(AdapterError::Io(e));
            }
        }
    }
}

impl<T, C> Print for EmbeddedStream<T, C>
where
    T: Read + ReadReady + Write,
    C: Clock,
{
    fn write_byte(&mut self, byte: u8) -> usize {
        self.write_bytes(&[byte])
    }

    fn write_bytes(&mut self, buf: &[u8]) -> usize {
        write_through(&mut self.inner, buf, &mut self.state, &mut self.last_error)
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
        if let Err(e) = self.inner.flush() {
            warn!("device flush failed");
            self.last_error = Some(AdapterError::Io(e));
            self.state.latch(WRITE_ERROR_DEFAULT);
        }
    }
}

impl<T, C> Stream for EmbeddedStream<T, C>
where
    T: Read + ReadReady + Write,
    C: Clock,
{
    type Clock = C;

    /// One if a byte is ready, else zero; `ReadReady` gives no exact count.
    fn available(&mut self) -> usize {
        self.fill();
        usize::from(self.peeked.is_some())
    }

    fn read(&mut self) -> Option<u8> {
        self.fill();
        self.peeked.take()
    }

    fn peek(&mut self) -> Option<u8> {
        self.fill();
        self.peeked
    }

    fn timing(&self) -> &Timing<C> {
        &self.timing
    }

    fn timing_mut(&mut self) -> &mut Timing<C> {
        &mut self.timing
    }
}

/// Exposes a [`Print`] sink as an `embedded_io::Write`.
///
/// Partial writes are passed through; a write the sink rejects entirely fails
/// with [`AdapterError::WriteFailed`] carrying the sink's write error.
pub struct PrintWriter<P> {
    inner: P,
}

impl<P: Print> PrintWriter<P> {
    /// Wraps `inner`.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped sink.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the sink.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Print> ErrorType for PrintWriter<P> {
    type Error = AdapterError<Infallible>;
}

impl<P: Print> Write for PrintWriter<P> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.inner.write_bytes(buf) {
            0 => Err(AdapterError::WriteFailed {
                code: self.inner.write_error(),
            }),
            n => Ok(n),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charstream::{LookaheadMode, NO_IGNORE, PrintExt, StepClock};
    use std::collections::VecDeque;

    #[derive(Debug)]
    struct DeviceError;

    impl core::fmt::Display for DeviceError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("device error")
        }
    }

    impl core::error::Error for DeviceError {}

    impl embedded_io::Error for DeviceError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    /// UART-like device: `rx` is what the peer sent, `tx` what we wrote.
    struct FakeUart {
        rx: VecDeque<u8>,
        tx: Vec<u8>,
        tx_room: usize,
    }

    impl FakeUart {
        fn new(rx: &[u8]) -> Self {
            Self {
                rx: rx.iter().copied().collect(),
                tx: Vec::new(),
                tx_room: usize::MAX,
            }
        }
    }

    impl ErrorType for FakeUart {
        type Error = DeviceError;
    }

    impl Read for FakeUart {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            let mut n = 0;
            while n < buf.len() {
                match self.rx.pop_front() {
                    Some(b) => {
                        buf[n] = b;
                        n += 1;
                    }
                    None => break,
                }
            }
            Ok(n)
        }
    }

    impl ReadReady for FakeUart {
        fn read_ready(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.rx.is_empty())
        }
    }

    impl Write for FakeUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if self.tx_room == 0 {
                return Err(DeviceError);
            }
            let n = buf.len().min(self.tx_room);
            self.tx.extend_from_slice(&buf[..n]);
            self.tx_room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn stream_parses_from_device() {
        let mut stream = EmbeddedStream::new(FakeUart::new(b"T=  -17C"), StepClock::new());
        stream.set_timeout(5);
        assert!(stream.find(b"T="));
        assert_eq!(stream.parse_int(LookaheadMode::SkipWhitespace, NO_IGNORE), -17);
        assert_eq!(stream.peek(), Some(b'C'));
        assert_eq!(stream.available(), 1);
        assert_eq!(stream.read(), Some(b'C'));
        assert_eq!(stream.available(), 0);
    }

    #[test]
    fn stream_writes_reach_device() {
        let mut stream = EmbeddedStream::new(FakeUart::new(b""), StepClock::new());
        stream.println("AT");
        assert_eq!(stream.inner().tx, b"AT\r\n");
    }

    #[test]
    fn printer_keeps_transport_error() {
        let mut uart = FakeUart::new(b"");
        uart.tx_room = 3;
        let mut out = EmbeddedPrinter::new(uart);
        assert_eq!(out.write_text("hello"), 3);
        assert_eq!(out.write_error(), WRITE_ERROR_DEFAULT);
        assert!(matches!(out.take_error(), Some(AdapterError::Io(DeviceError))));
        assert!(out.take_error().is_none());
    }

    #[test]
    fn print_writer_reports_rejected_write() {
        let mut sink = charstream_sink(2);
        assert_eq!(sink.write(b"abc").ok(), Some(2));
        match sink.write(b"d") {
            Err(AdapterError::WriteFailed { code }) => assert_eq!(code, WRITE_ERROR_DEFAULT),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    fn charstream_sink(capacity: usize) -> PrintWriter<crate::LoopbackStream<StepClock>> {
        PrintWriter::new(crate::LoopbackStream::bounded(StepClock::new(), capacity))
    }
}
