//! Lookahead policy for the numeric parsers.

/// Byte meaning "no ignore byte is active"; it never appears inside an ASCII
/// numeric field.
pub const NO_IGNORE: u8 = 0x01;

/// How `parse_int`/`parse_float` treat bytes before the first numeric one.
///
/// The policy applies only until the first valid byte is found or a timeout
/// occurs.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LookaheadMode {
    /// Every non-numeric byte is consumed and skipped.
    #[default]
    SkipAll,
    /// Nothing is skipped; the source is untouched unless the next byte is
    /// numeric.
    SkipNone,
    /// Only space, tab, CR and LF are skipped.
    SkipWhitespace,
}

/// Whether `byte` can start a number: `'-'`, a digit, or `'.'` when decimals
/// are allowed.
#[inline]
pub const fn is_numeric_start(byte: u8, allow_decimal: bool) -> bool {
    byte == b'-' || byte.is_ascii_digit() || (allow_decimal && byte == b'.')
}

/// Whether [`LookaheadMode::SkipWhitespace`] may consume `byte`.
#[inline]
pub const fn is_skippable_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}
