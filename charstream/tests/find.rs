//! Streaming search tests
//!
//! These tests cover:
//! - `find`, `find_prefix` and `find_byte` over a whole source
//! - `find_until` terminator handling
//! - `find_multi` winner selection with overlapping patterns
//! - Searches that straddle a pause in the input

#![cfg(feature = "alloc")]

mod common;

use charstream::{MultiTarget, Stream};
use common::ScriptedStream;

#[test]
fn find_positions_after_first_occurrence() {
    let mut stream = ScriptedStream::new(b"This is a test string");
    assert!(stream.find(b"test"));
    assert_eq!(stream.read_string(), b" string");
}

#[test]
fn find_missing_target_drains_source() {
    let mut stream = ScriptedStream::new(b"This is a string");
    assert!(!stream.find(b"test"));
    assert_eq!(stream.read_string(), b"");
}

#[test]
fn find_prefix_matches_leading_bytes_only() {
    let mut stream = ScriptedStream::new(b"This is a test string");
    assert!(stream.find_prefix(b"test", 3));
    assert_eq!(stream.read_string(), b"t string");
}

#[test]
fn find_prefix_missing_target() {
    let mut stream = ScriptedStream::new(b"This is a string");
    assert!(!stream.find_prefix(b"test", 3));
    assert_eq!(stream.read_string(), b"");
}

#[test]
fn find_byte_stops_after_byte() {
    let mut stream = ScriptedStream::new(b"This is a test string");
    assert!(stream.find_byte(b't'));
    assert_eq!(stream.read_string(), b"est string");
}

#[test]
fn find_byte_missing() {
    let mut stream = ScriptedStream::new(b"This is a string");
    assert!(!stream.find_byte(b'!'));
    assert_eq!(stream.read_string(), b"");
}

#[test]
fn find_handles_repeating_prefix() {
    let mut stream = ScriptedStream::new(b"11112tail");
    assert!(stream.find(b"1112"));
    assert_eq!(stream.rest(), b"tail");

    let mut stream = ScriptedStream::new(b"abababc!");
    assert!(stream.find(b"ababc"));
    assert_eq!(stream.rest(), b"!");
}

#[test]
fn find_until_true_only_before_terminator() {
    let mut stream = ScriptedStream::new(b"key=value\r\nOK");
    assert!(stream.find_until(b"=", b"\r\n"));
    assert_eq!(stream.rest(), b"value\r\nOK");

    let mut stream = ScriptedStream::new(b"value\r\nOK");
    assert!(!stream.find_until(b"OK", b"\r\n"));
    assert_eq!(stream.rest(), b"OK");
}

#[test]
fn find_until_prefix_clamps_lengths() {
    let mut stream = ScriptedStream::new(b"xxabcyy");
    assert!(stream.find_until_prefix(b"abc", 99, Some(b";"), 99));
    assert_eq!(stream.rest(), b"yy");
}

#[test]
fn find_multi_reports_first_completed_target() {
    let mut stream = ScriptedStream::new(b"+CME ERROR: 3\r\nOK\r\n");
    let mut targets = [
        MultiTarget::new(b"OK\r\n"),
        MultiTarget::new(b"ERROR"),
    ];
    assert_eq!(stream.find_multi(&mut targets), Some(1));
    assert_eq!(stream.rest(), b": 3\r\nOK\r\n");
}

#[test]
fn find_multi_times_out_with_none() {
    let mut stream = ScriptedStream::new(b"nothing here");
    let mut targets = [MultiTarget::new(b"OK"), MultiTarget::new(b"FAIL")];
    assert_eq!(stream.find_multi(&mut targets), None);
    assert!(stream.rest().is_empty());
}

#[test]
fn find_spans_a_short_pause() {
    let mut stream = ScriptedStream::new(b"te");
    stream.push_at(5, b"st!");
    assert!(stream.find(b"test"));
    assert_eq!(stream.rest(), b"!");
}

#[test]
fn find_gives_up_on_a_long_pause() {
    let mut stream = ScriptedStream::new(b"te");
    stream.push_at(1_000, b"st");
    assert!(!stream.find(b"test"));
    assert_eq!(stream.rest(), b"st");
}
