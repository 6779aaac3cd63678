//! Interop with the [`rgb`] crate's pixel types.
//!
//! `rgb::Rgb`, `rgb::Bgr`, `rgb::Rgba` and `rgb::Bgra` join the conversion
//! graph with the same-shaped builtin as their canonical type, so they
//! convert to and from every other color here. Plain `From` conversions
//! move between the two spellings of one shape.
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use tinct::{Rgb565, convert_color};
//!
//! let px: Bgra<u8> = convert_color(Rgb565::new(31, 0, 0));
//! assert_eq!(px, Bgra { b: 0, g: 0, r: 255, a: 255 });
//!
//! let packed: Rgb565 = convert_color(Rgb::new(0u8, 255, 0));
//! assert_eq!(packed, Rgb565::new(0, 63, 0));
//! ```

use crate::cast::{FromCanonical, ToCanonical};
use crate::color::{Bgr, Bgra, Rgb, Rgba};
use crate::norm::Channel;

macro_rules! rgb_interop {
    ($($ours:ident <=> $theirs:ident { $($field:ident),+ })*) => {$(
        impl<T: Channel> ToCanonical for ::rgb::$theirs<T> {
            type Canonical = $ours<T>;

            #[inline(always)]
            fn to_canonical(&self) -> $ours<T> {
                $ours { $($field: self.$field),+ }
            }
        }

        impl<T: Channel> FromCanonical for ::rgb::$theirs<T> {
            type Canonical = $ours<T>;

            #[inline(always)]
            fn from_canonical(c: $ours<T>) -> Self {
                ::rgb::$theirs { $($field: c.$field),+ }
            }
        }

        impl<T> From<::rgb::$theirs<T>> for $ours<T> {
            #[inline(always)]
            fn from(px: ::rgb::$theirs<T>) -> Self {
                $ours { $($field: px.$field),+ }
            }
        }

        impl<T> From<$ours<T>> for ::rgb::$theirs<T> {
            #[inline(always)]
            fn from(px: $ours<T>) -> Self {
                ::rgb::$theirs { $($field: px.$field),+ }
            }
        }
    )*};
}

rgb_interop! {
    Rgb <=> Rgb { r, g, b }
    Bgr <=> Bgr { b, g, r }
    Rgba <=> Rgba { r, g, b, a }
    Bgra <=> Bgra { b, g, r, a }
}
