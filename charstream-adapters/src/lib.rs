//! Concrete Print and Stream endpoints for `charstream`.
//!
//! The core crate only defines the traits; this crate connects them to
//! something that actually moves bytes.
//!
//! ## In-memory
//! - **`StringPrinter`**: Appends printed output to a growable buffer
//! - **`LoopbackStream`**: A stream whose writes come back as its input
//!
//! ## Standard library (`std`)
//! - **`PutPrinter`**: One `write_all` per byte into a `std::io::Write`
//! - **`StdPrinter`**: Bulk writes into a `std::io::Write`
//! - **`StdClock`**: Millisecond clock backed by `Instant`
//!
//! ## embedded-io (`embedded-io`)
//! - **`EmbeddedPrinter`**: Print over any `embedded_io::Write`
//! - **`EmbeddedStream`**: Stream over a `Read + ReadReady + Write` device
//! - **`PrintWriter`**: Any Print sink as an `embedded_io::Write`
//!
//! # Quick Start
//!
//! ```
//! use charstream::{LookaheadMode, NO_IGNORE, PrintExt, StepClock, Stream};
//! use charstream_adapters::LoopbackStream;
//!
//! let mut link = LoopbackStream::new(StepClock::new());
//! link.set_timeout(10);
//! link.print("temp=");
//! link.println(&-12i32);
//!
//! assert!(link.find(b"temp="));
//! assert_eq!(link.parse_int(LookaheadMode::SkipAll, NO_IGNORE), -12);
//! ```
//!
//! # Features
//!
//! - `std`: Enable `std::io` printers and `StdClock` (default)
//! - `embedded-io`: Enable the embedded-io bridges (default)
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod log_macros;

pub mod error;
pub mod loopback;
pub mod string;

#[cfg(feature = "std")]
pub mod clock;
#[cfg(feature = "std")]
pub mod ostream;

#[cfg(feature = "embedded-io")]
pub mod embedded;

pub use charstream;

pub use error::AdapterError;
pub use loopback::LoopbackStream;
pub use string::StringPrinter;

#[cfg(feature = "std")]
pub use clock::StdClock;
#[cfg(feature = "std")]
pub use ostream::{PutPrinter, StdPrinter};

#[cfg(feature = "embedded-io")]
pub use embedded::{EmbeddedPrinter, EmbeddedStream, PrintWriter};
