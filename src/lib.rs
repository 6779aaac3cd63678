//! # tinct
//!
//! Exact color conversions between channel shapes, element types and
//! bit-packed pixel formats.
//!
//! Every conversion is a pure per-pixel function chosen at compile time from
//! the (source, destination) pair. Channels the source lacks are filled in
//! (color with zero, alpha with fully opaque); channels the destination
//! cannot hold are dropped; values are rescaled between element types by
//! [`normalize`].
//!
//! ```rust
//! use tinct::{Bgr8, CastColor, R, Rgb565, Rgb8, Rgba8, convert_color};
//!
//! let red = R::new(255u8);
//! assert_eq!(convert_color::<Rgba8, _>(red), Rgba8::new(255, 0, 0, 255));
//! assert_eq!(red.cast::<Bgr8>(), Bgr8::new(0, 0, 255));
//!
//! let white: Rgb8 = Rgb565::new(31, 63, 31).cast();
//! assert_eq!(white, Rgb8::new(255, 255, 255));
//! ```
//!
//! ## Core operations (always available)
//!
//! - [`normalize`]: rescale one normalized scalar.
//! - [`convert_color`] / [`CastColor::cast`]: convert one pixel.
//! - [`convert_slice`], [`convert_vec`], [`fill_alpha`]: typed buffers.
//! - [`convert_pixels`], [`convert_pixels_strided`]: raw bytes in a
//!   [`PixelFormat`] picked at run time.
//!
//! Your own color types join in by implementing [`ToCanonical`] and/or
//! [`FromCanonical`]; [`Hsv`] is built that way.
//!
//! ## Feature flags
//!
//! - **`rgb`**: the [`rgb`] crate's `Rgb`, `Bgr`, `Rgba` and `Bgra` convert
//!   to and from everything here.
//! - **`imgref`**: whole-image conversions over [`imgref`] types. Implies
//!   `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod cast;
mod color;
mod format;
mod hsv;
mod norm;
mod packed;
mod slice;

pub use cast::{
    Builtin, CastColor, Channels, ColorSource, ColorTarget, FromCanonical, Opaque, ToCanonical,
    convert_color,
};
pub use color::*;
pub use format::{PixelFormat, convert_pixels, convert_pixels_strided};
pub use hsv::Hsv;
pub use norm::{Channel, normalize};
pub use packed::{
    Abgr1555, Abgr2101010, Abgr4444, Argb1555, Argb2101010, Argb4444, Bgr332, Bgr565,
    Bgra1010102, Bgra4444, Bgra5551, Rgb233, Rgb565, Rgba1010102, Rgba4444, Rgba5551,
};
pub use slice::{convert_slice, convert_vec, fill_alpha};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod img;

/// Buffer geometry rejected by a slice, byte or image conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeError {
    /// A byte buffer is empty or not a whole number of pixels.
    NotPixelAligned,
    /// The destination holds fewer pixels than the source, or image
    /// dimensions differ.
    PixelCountMismatch,
    /// Zero width or height, a row wider than its stride, a buffer that ends
    /// before the last row, or arithmetic overflow.
    InvalidStride,
}

impl core::fmt::Display for SizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SizeError::NotPixelAligned => "buffer length is not a whole number of pixels",
            SizeError::PixelCountMismatch => "destination is smaller than source",
            SizeError::InvalidStride => "invalid stride or dimensions for buffer",
        })
    }
}

impl core::error::Error for SizeError {}
