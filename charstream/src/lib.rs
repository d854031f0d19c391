//! Byte-oriented Print and Stream abstractions.
//!
//! This crate provides the two halves of a character-stream endpoint:
//!
//! ## Print (`print`)
//! A byte sink. Implementers write single bytes; the trait derives bulk
//! writes, integer formatting in any base from 2 to 36, fixed-point float
//! formatting, line endings and a sticky write-error flag.
//!
//! ## Stream (`stream`)
//! A byte source that is also a sink. Implementers provide nonblocking
//! `available`/`read`/`peek`; the trait derives timed reads, tolerant integer
//! and float parsing, streaming multi-pattern search and bounded reads.
//!
//! Transport adapters (std writers, string buffers, embedded-io devices) live
//! in the `charstream-adapters` crate.
//!
//! # Quick Start
//!
//! ```ignore
//! use charstream::{LookaheadMode, PrintExt, Radix, Stream, HEX, NO_IGNORE};
//!
//! uart.println("ready");
//! uart.print(&Radix(status, HEX));
//!
//! if uart.find(b"SET ") {
//!     let value = uart.parse_int(LookaheadMode::SkipWhitespace, NO_IGNORE);
//! }
//! ```
//!
//! # Features
//!
//! - `alloc`: Enable `read_string`/`read_string_until` and printing of `String`/`Vec<u8>`
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod log_macros;

pub mod clock;
pub mod format;
pub mod lookahead;
pub mod print;
pub mod printable;
pub mod search;
pub mod state;
pub mod stream;

pub use clock::{Clock, FnClock, StepClock};
pub use format::{BIN, DEC, DEFAULT_FLOAT_DIGITS, Digits, FLOAT_OVERFLOW_LIMIT, HEX, OCT};
pub use lookahead::{LookaheadMode, NO_IGNORE};
pub use print::{LINE_ENDING, Print, PrintExt};
pub use printable::{Fixed, Printable, Radix};
pub use search::MultiTarget;
pub use state::{DEFAULT_TIMEOUT_MS, PrintState, Timing, WRITE_ERROR_DEFAULT};
pub use stream::Stream;
