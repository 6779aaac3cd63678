//! Normalized scalar rescaling.
//!
//! A *normalized* value is a fraction of its type's representable range.
//! Floats hold the fraction directly and must stay inside `[0, 1]`; integers
//! map `[0, MAX]` onto `[0, 1]` (signed integers use `[0, MAX]` as well, so a
//! negative value is a negative fraction).
//!
//! ```rust
//! use tinct::normalize;
//!
//! assert_eq!(normalize::<u8, f32>(1.0), 255);
//! assert_eq!(normalize::<u16, u8>(255), 65535);
//! assert_eq!(normalize::<f32, u8>(255), 1.0);
//! ```

mod sealed {
    pub trait Sealed {}
}

/// A scalar element type a color channel can be stored in.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32`, `i64`,
/// `f32` and `f64`. Sealed: the rescaling rules depend on the exact width
/// and signedness of each type.
pub trait Channel:
    Copy + PartialEq + PartialOrd + Default + core::fmt::Debug + bytemuck::Pod + sealed::Sealed
{
    /// `true` for `f32` and `f64`.
    const IS_FLOAT: bool;
    /// `true` for signed integers (and floats).
    const IS_SIGNED: bool;
    /// Width of the type in bits.
    const BITS: u32;
    /// Numeric zero.
    const ZERO: Self;
    /// The value representing `1.0`, as `f64`.
    const MAX_F64: f64;
    /// The value representing `1.0`, as `i64`. Unused for 64-bit types and floats.
    const MAX_I64: i64;
    /// The value representing `1.0`, as `u64`. Unused for signed types and floats.
    const MAX_U64: u64;

    // Plain `as` casts to and from the 64-bit intermediates.
    #[doc(hidden)]
    fn to_f64(self) -> f64;
    #[doc(hidden)]
    fn from_f64(v: f64) -> Self;
    #[doc(hidden)]
    fn to_i64(self) -> i64;
    #[doc(hidden)]
    fn from_i64(v: i64) -> Self;
    #[doc(hidden)]
    fn to_u64(self) -> u64;
    #[doc(hidden)]
    fn from_u64(v: u64) -> Self;

    /// Method form of [`normalize`].
    #[inline(always)]
    fn normalize<To: Channel>(self) -> To {
        normalize(self)
    }
}

macro_rules! int_channel {
    ($($t:ty: signed = $signed:literal, max_i64 = $max_i64:expr, max_u64 = $max_u64:expr;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Channel for $t {
            const IS_FLOAT: bool = false;
            const IS_SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const MAX_F64: f64 = <$t>::MAX as f64;
            const MAX_I64: i64 = $max_i64;
            const MAX_U64: u64 = $max_u64;

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }
            #[inline(always)]
            fn from_i64(v: i64) -> Self {
                v as $t
            }
            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }
            #[inline(always)]
            fn from_u64(v: u64) -> Self {
                v as $t
            }
        }
    )*};
}

int_channel! {
    u8: signed = false, max_i64 = u8::MAX as i64, max_u64 = u8::MAX as u64;
    u16: signed = false, max_i64 = u16::MAX as i64, max_u64 = u16::MAX as u64;
    u32: signed = false, max_i64 = u32::MAX as i64, max_u64 = u32::MAX as u64;
    u64: signed = false, max_i64 = i64::MAX, max_u64 = u64::MAX;
    i8: signed = true, max_i64 = i8::MAX as i64, max_u64 = i8::MAX as u64;
    i16: signed = true, max_i64 = i16::MAX as i64, max_u64 = i16::MAX as u64;
    i32: signed = true, max_i64 = i32::MAX as i64, max_u64 = i32::MAX as u64;
    i64: signed = true, max_i64 = i64::MAX, max_u64 = i64::MAX as u64;
}

macro_rules! float_channel {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Channel for $t {
            const IS_FLOAT: bool = true;
            const IS_SIGNED: bool = true;
            const BITS: u32 = (core::mem::size_of::<$t>() * 8) as u32;
            const ZERO: Self = 0.0;
            const MAX_F64: f64 = 1.0;
            const MAX_I64: i64 = 1;
            const MAX_U64: u64 = 1;

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }
            #[inline(always)]
            fn from_i64(v: i64) -> Self {
                v as $t
            }
            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }
            #[inline(always)]
            fn from_u64(v: u64) -> Self {
                v as $t
            }
        }
    )*};
}

float_channel!(f32, f64);

#[inline(always)]
fn debug_assert_unit<T: Channel>(v: T) {
    debug_assert!(
        (0.0..=1.0).contains(&v.to_f64()),
        "normalized float out of [0, 1]: {v:?}"
    );
}

/// Rescale a normalized scalar from one representation to another.
///
/// - float → float: value-preserving precision change.
/// - integer → float: `from / From::MAX`.
/// - float → integer: `from * To::MAX`, truncated.
/// - integer → integer: `from * To::MAX / From::MAX`, truncated. 64-bit
///   types go through `f64`; other widths use exact 64-bit integer math
///   (signed if either side is signed).
///
/// Float inputs must lie in `[0, 1]`. This is checked with `debug_assert!`
/// only; out-of-range floats give unspecified (but memory-safe) results in
/// release builds.
#[inline(always)]
pub fn normalize<To: Channel, From: Channel>(from: From) -> To {
    match (From::IS_FLOAT, To::IS_FLOAT) {
        (true, true) => {
            debug_assert_unit(from);
            To::from_f64(from.to_f64())
        }
        (false, true) => To::from_f64(from.to_f64() / From::MAX_F64),
        (true, false) => {
            debug_assert_unit(from);
            To::from_f64(from.to_f64() * To::MAX_F64)
        }
        (false, false) => {
            if From::BITS == 64 || To::BITS == 64 {
                To::from_f64(from.to_f64() / From::MAX_F64 * To::MAX_F64)
            } else if From::IS_SIGNED || To::IS_SIGNED {
                To::from_i64(from.to_i64() * To::MAX_I64 / From::MAX_I64)
            } else {
                To::from_u64(from.to_u64() * To::MAX_U64 / From::MAX_U64)
            }
        }
    }
}

/// The largest value an unsigned field of `bits` bits can hold.
#[inline(always)]
pub(crate) const fn umax(bits: u32) -> u64 {
    (1u64 << bits) - 1
}
