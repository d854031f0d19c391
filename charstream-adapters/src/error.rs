//! Adapter-level errors.

use core::fmt;

/// Errors surfaced by adapters that sit between a Print/Stream endpoint and a
/// fallible transport.
#[derive(Debug)]
pub enum AdapterError<E> {
    /// Error from the underlying transport.
    Io(E),
    /// The Print sink accepted none of the bytes; carries its latched code.
    WriteFailed {
        /// The sink's sticky write error at the time of failure.
        code: i32,
    },
}

impl<E: fmt::Display> fmt::Display for AdapterError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Transport error: {}", e),
            Self::WriteFailed { code } => write!(f, "Sink rejected write (write error {})", code),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for AdapterError<E> {}

// Lets adapters be used wherever embedded-io expects an error type
#[cfg(feature = "embedded-io")]
impl<E: fmt::Debug + fmt::Display> embedded_io::Error for AdapterError<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::Io(_) => embedded_io::ErrorKind::Other,
            Self::WriteFailed { .. } => embedded_io::ErrorKind::WriteZero,
        }
    }
}
