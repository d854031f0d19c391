//! Values that know how to print themselves.
//!
//! [`Printable`] is the overload set behind [`PrintExt::print`]: strings and
//! byte slices are written verbatim, `char` is written as its UTF-8 bytes,
//! integers print in decimal and floats with two places. [`Radix`] and
//! [`Fixed`] pick another base or precision.
//!
//! [`PrintExt::print`]: crate::PrintExt::print

use core::ffi::CStr;

use crate::format::{self, DEC, DEFAULT_FLOAT_DIGITS};
use crate::print::Print;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// A value that can be written to a [`Print`] sink.
///
/// Implement this for your own types to make them usable with
/// [`PrintExt::print`](crate::PrintExt::print) and
/// [`PrintExt::println`](crate::PrintExt::println); call back into `out` to
/// emit bytes. `out.print(..)` works there too, as an inherent method of
/// `dyn Print`.
///
/// ```
/// use charstream::{Print, Printable, Radix, HEX};
///
/// struct Rgb(u8, u8, u8);
///
/// impl Printable for Rgb {
///     fn print_to(&self, out: &mut dyn Print) -> usize {
///         out.print("#")
///             + out.print(&Radix(self.0, HEX))
///             + out.print(&Radix(self.1, HEX))
///             + out.print(&Radix(self.2, HEX))
///     }
/// }
/// ```
pub trait Printable {
    /// Writes `self` to `out`, returning the number of bytes produced.
    fn print_to(&self, out: &mut dyn Print) -> usize;
}

impl<T: Printable + ?Sized> Printable for &T {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        (**self).print_to(out)
    }
}

impl Printable for str {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_bytes(self.as_bytes())
    }
}

impl Printable for [u8] {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_bytes(self)
    }
}

impl<const N: usize> Printable for [u8; N] {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_bytes(self)
    }
}

impl Printable for CStr {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_cstr(Some(self))
    }
}

/// A `char` is written as its UTF-8 encoding: one byte for ASCII, up to four
/// otherwise. To emit one arbitrary byte use `Radix(byte, 0)`.
impl Printable for char {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        let mut buf = [0u8; 4];
        out.write_bytes(self.encode_utf8(&mut buf).as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl Printable for String {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_bytes(self.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl Printable for Vec<u8> {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.write_bytes(self)
    }
}

/// An integer printed in an explicit base.
///
/// Base 0 writes the low byte of the value unchanged. Signed values print a
/// `'-'` only in base 10; in other bases they print their two's-complement
/// pattern at their own width, so `Radix(-1i8, HEX)` prints `"FF"`.
///
/// Every primitive integer width is supported, `u128`/`i128` included.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix<T>(pub T, pub u8);

/// A float printed with an explicit number of places after the point.
///
/// Negative place counts fall back to two.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub f64, pub i32);

impl Printable for Fixed {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.print_float(self.0, self.1)
    }
}

impl Printable for f64 {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.print_float(*self, DEFAULT_FLOAT_DIGITS)
    }
}

impl Printable for f32 {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        out.print_float(f64::from(*self), DEFAULT_FLOAT_DIGITS)
    }
}

macro_rules! unsigned_printable {
    ($($t:ty),*) => {$(
        impl Printable for $t {
            fn print_to(&self, out: &mut dyn Print) -> usize {
                out.print_unsigned(*self as u64, DEC)
            }
        }

        impl Printable for Radix<$t> {
            fn print_to(&self, out: &mut dyn Print) -> usize {
                out.print_unsigned(self.0 as u64, self.1)
            }
        }
    )*};
}

macro_rules! signed_printable {
    ($($t:ty => $u:ty),*) => {$(
        impl Printable for $t {
            fn print_to(&self, out: &mut dyn Print) -> usize {
                out.print_signed(*self as i64, DEC)
            }
        }

        impl Printable for Radix<$t> {
            #[allow(clippy::cast_sign_loss)]
            fn print_to(&self, out: &mut dyn Print) -> usize {
                match self.1 {
                    0 | DEC => out.print_signed(self.0 as i64, self.1),
                    base => out.print_unsigned((self.0 as $u) as u64, base),
                }
            }
        }
    )*};
}

unsigned_printable!(u8, u16, u32, u64, usize);
signed_printable!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

impl Printable for u128 {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        format::write_unsigned(out, *self, DEC)
    }
}

impl Printable for Radix<u128> {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        format::write_unsigned(out, self.0, self.1)
    }
}

impl Printable for i128 {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        format::write_signed_wide(out, *self, DEC)
    }
}

impl Printable for Radix<i128> {
    fn print_to(&self, out: &mut dyn Print) -> usize {
        format::write_signed_wide(out, self.0, self.1)
    }
}
