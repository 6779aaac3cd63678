//! Typed buffer conversion.
//!
//! ```rust
//! use tinct::{Bgra8, Rgb565, convert_slice, convert_vec};
//!
//! let src = [Rgb565::new(31, 0, 0), Rgb565::new(0, 63, 0)];
//! let mut dst = [Bgra8::default(); 2];
//! convert_slice(&src, &mut dst).unwrap();
//! assert_eq!(dst[0], Bgra8::new(0, 0, 255, 255));
//!
//! let v: Vec<Bgra8> = convert_vec(&src);
//! assert_eq!(v, dst);
//! ```

use alloc::vec::Vec;

use crate::SizeError;
use crate::cast::{ColorSource, ColorTarget, Opaque, convert_color};

/// Convert every pixel of `src` into the first `src.len()` slots of `dst`.
///
/// Slots of `dst` past `src.len()` are left untouched. Fails with
/// [`SizeError::PixelCountMismatch`] if `dst` is shorter than `src`.
#[inline]
pub fn convert_slice<From, To>(src: &[From], dst: &mut [To]) -> Result<(), SizeError>
where
    From: ColorSource + Copy,
    To: ColorTarget,
{
    if dst.len() < src.len() {
        return Err(SizeError::PixelCountMismatch);
    }
    convert_row(src, &mut dst[..src.len()]);
    Ok(())
}

/// Convert `src` into a newly allocated vector.
pub fn convert_vec<From, To>(src: &[From]) -> Vec<To>
where
    From: ColorSource + Copy,
    To: ColorTarget,
{
    src.iter().map(|&px| convert_color(px)).collect()
}

/// Set every pixel's alpha to fully opaque, leaving color channels as they are.
pub fn fill_alpha<T: Opaque>(pixels: &mut [T]) {
    for px in pixels {
        *px = px.opaque();
    }
}

/// Equal-length row loop shared by the slice, byte and image layers.
#[inline(always)]
pub(crate) fn convert_row<From, To>(src: &[From], dst: &mut [To])
where
    From: ColorSource + Copy,
    To: ColorTarget,
{
    debug_assert_eq!(src.len(), dst.len());
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = convert_color(*s);
    }
}
