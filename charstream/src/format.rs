//! Integer radix and fixed-point float formatting.
//!
//! All formatting happens in stack buffers sized for a `u128` in base 2;
//! nothing here allocates.

use crate::print::Print;

/// Decimal base.
pub const DEC: u8 = 10;
/// Hexadecimal base (uppercase digits, no prefix).
pub const HEX: u8 = 16;
/// Octal base.
pub const OCT: u8 = 8;
/// Binary base.
pub const BIN: u8 = 2;

/// Magnitude bound for float formatting; anything beyond prints `"ovf"`.
///
/// The largest double whose integer part survives the trip through a 32-bit
/// unsigned integer without rounding.
pub const FLOAT_OVERFLOW_LIMIT: f64 = 4_294_967_040.0;

/// Digits printed after the point when no precision is given.
pub const DEFAULT_FLOAT_DIGITS: i32 = 2;

const MAX_DIGITS: usize = u128::BITS as usize;

/// Digits of an unsigned integer rendered in some base.
#[derive(Clone, Copy)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    /// Renders `n` in `base`. Bases below 2 are treated as decimal.
    #[must_use]
    pub fn new(mut n: u128, base: u8) -> Self {
        let base = if base < 2 { DEC } else { base };
        let radix = u128::from(base);
        let mut buf = [0u8; MAX_DIGITS];
        let mut start = MAX_DIGITS;

        loop {
            // remainder < base <= 255
            #[allow(clippy::cast_possible_truncation)]
            let digit = (n % radix) as u8;
            n /= radix;
            start -= 1;
            buf[start] = digit_char(digit);
            if n == 0 {
                break;
            }
        }

        Self { buf, start }
    }

    /// The rendered digits, most significant first.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

impl core::fmt::Debug for Digits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // digits are always ASCII
        f.write_str(core::str::from_utf8(self.as_bytes()).unwrap_or("?"))
    }
}

#[inline]
const fn digit_char(digit: u8) -> u8 {
    if digit < 10 {
        b'0' + digit
    } else {
        (b'A' - 10).wrapping_add(digit)
    }
}

/// Writes `n` in `base`. Base 0 writes the low byte of `n` unchanged.
pub fn write_unsigned<P: Print + ?Sized>(out: &mut P, n: impl Into<u128>, base: u8) -> usize {
    let n = n.into();
    if base == 0 {
        // raw pass-through keeps only the low byte
        #[allow(clippy::cast_possible_truncation)]
        return out.write_byte(n as u8);
    }
    out.write_bytes(Digits::new(n, base).as_bytes())
}

/// Writes a signed value.
///
/// Base 0 is raw pass-through; base 10 prints a leading `'-'` for negative
/// values; every other base prints the 64-bit two's-complement pattern.
pub fn write_signed<P: Print + ?Sized>(out: &mut P, n: i64, base: u8) -> usize {
    match base {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        0 => out.write_byte(n as u8),
        DEC if n < 0 => {
            let sign = out.write_byte(b'-');
            sign + write_unsigned(out, n.unsigned_abs(), DEC)
        }
        #[allow(clippy::cast_sign_loss)]
        _ => write_unsigned(out, n as u64, base),
    }
}

/// [`write_signed`] for `i128`; non-decimal bases print the 128-bit pattern.
pub fn write_signed_wide<P: Print + ?Sized>(out: &mut P, n: i128, base: u8) -> usize {
    match base {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        0 => out.write_byte(n as u8),
        DEC if n < 0 => {
            let sign = out.write_byte(b'-');
            sign + write_unsigned(out, n.unsigned_abs(), DEC)
        }
        #[allow(clippy::cast_sign_loss)]
        _ => write_unsigned(out, n as u128, base),
    }
}

/// Writes `x` with exactly `digits` places after the point.
///
/// Negative `digits` means [`DEFAULT_FLOAT_DIGITS`]. NaN prints `"nan"`;
/// infinities and magnitudes beyond [`FLOAT_OVERFLOW_LIMIT`] print `"ovf"`.
pub fn write_float<P: Print + ?Sized>(out: &mut P, mut x: f64, digits: i32) -> usize {
    let digits = if digits < 0 { DEFAULT_FLOAT_DIGITS } else { digits };

    if x.is_nan() {
        return out.write_bytes(b"nan");
    }
    if x.is_infinite() || x > FLOAT_OVERFLOW_LIMIT || x < -FLOAT_OVERFLOW_LIMIT {
        return out.write_bytes(b"ovf");
    }

    let mut n = 0;
    if x < 0.0 {
        n += out.write_byte(b'-');
        x = -x;
    }

    // so that 1.999 at two places prints "2.00"
    let mut rounding = 0.5;
    for _ in 0..digits {
        rounding /= 10.0;
    }
    x += rounding;

    // x is within [0, FLOAT_OVERFLOW_LIMIT + 0.5]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let int_part = x as u64;
    #[allow(clippy::cast_precision_loss)]
    let mut remainder = x - int_part as f64;
    n += write_unsigned(out, int_part, DEC);

    if digits > 0 {
        n += out.write_byte(b'.');
    }

    for _ in 0..digits {
        remainder *= 10.0;
        // remainder is within [0, 10)
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let digit = remainder as u64;
        n += write_unsigned(out, digit, DEC);
        #[allow(clippy::cast_precision_loss)]
        let consumed = digit as f64;
        remainder -= consumed;
    }

    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_prints_single_digit_in_every_base() {
        for base in [BIN, OCT, DEC, HEX, 36] {
            assert_eq!(Digits::new(0, base).as_bytes(), b"0");
        }
    }

    #[test]
    fn uppercase_hex_without_prefix() {
        assert_eq!(Digits::new(0xBEEF, HEX).as_bytes(), b"BEEF");
        assert_eq!(Digits::new(35, 36).as_bytes(), b"Z");
    }

    #[test]
    fn base_below_two_falls_back_to_decimal() {
        assert_eq!(Digits::new(1234, 1).as_bytes(), Digits::new(1234, DEC).as_bytes());
    }

    #[test]
    fn widest_binary_fits_the_buffer() {
        let digits = Digits::new(u128::MAX, BIN);
        assert_eq!(digits.as_bytes().len(), 128);
        assert!(digits.as_bytes().iter().all(|&b| b == b'1'));
    }

    #[test]
    fn octal_and_binary() {
        assert_eq!(Digits::new(8, OCT).as_bytes(), b"10");
        assert_eq!(Digits::new(5, BIN).as_bytes(), b"101");
    }
}
