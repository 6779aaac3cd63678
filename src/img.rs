//! Whole-image conversions using [`imgref`] types.
//!
//! Images are converted row by row, so source and destination strides are
//! independent and padding pixels are never touched.
//!
//! ```rust
//! use imgref::ImgVec;
//! use tinct::{Rgb565, Rgba8, img};
//!
//! let src = ImgVec::new(vec![Rgb565::new(31, 63, 31); 100], 10, 10);
//! let dst: ImgVec<Rgba8> = img::convert_img_vec(src.as_ref());
//! assert_eq!(dst.buf()[0], Rgba8::new(255, 255, 255, 255));
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};

use crate::SizeError;
use crate::cast::{ColorSource, ColorTarget, convert_color};
use crate::slice::convert_row;

/// Convert `src` into `dst`, which must have the same width and height.
///
/// Fails with [`SizeError::PixelCountMismatch`] if the dimensions differ.
pub fn convert_img<From, To>(src: ImgRef<'_, From>, mut dst: ImgRefMut<'_, To>) -> Result<(), SizeError>
where
    From: ColorSource + Copy,
    To: ColorTarget,
{
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(SizeError::PixelCountMismatch);
    }
    for (src_row, dst_row) in src.rows().zip(dst.rows_mut()) {
        convert_row(src_row, dst_row);
    }
    Ok(())
}

/// Convert `src` into a newly allocated, tightly packed image.
pub fn convert_img_vec<From, To>(src: ImgRef<'_, From>) -> ImgVec<To>
where
    From: ColorSource + Copy,
    To: ColorTarget,
{
    let buf: Vec<To> = src
        .rows()
        .flat_map(|row| row.iter().map(|&px| convert_color(px)))
        .collect();
    ImgVec::new(buf, src.width(), src.height())
}
