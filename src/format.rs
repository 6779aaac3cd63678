//! Runtime pixel formats over raw byte buffers.
//!
//! [`PixelFormat`] names every builtin shape at `u8`, `u16` and `f32`
//! element types plus the sixteen packed formats. Buffers hold pixels in
//! native-endian element layout, exactly as the typed structs sit in memory.
//!
//! The (source, destination) pair is resolved once per call to a fully
//! monomorphized row kernel; the per-pixel loop never branches on format.
//!
//! ```rust
//! use tinct::{PixelFormat, convert_pixels};
//!
//! let rgb565 = 0xF800u16.to_ne_bytes(); // blue field maxed
//! let mut bgra = [0u8; 4];
//! let n = convert_pixels(PixelFormat::Rgb565, &rgb565, PixelFormat::Bgra8, &mut bgra).unwrap();
//! assert_eq!(n, 1);
//! assert_eq!(bgra, [255, 0, 0, 255]);
//! ```
//!
//! Float formats carry the same `[0, 1]` contract as [`normalize`](crate::normalize):
//! out-of-range values trip a debug assertion.

use core::fmt;
use core::mem::size_of;

use bytemuck::{bytes_of, pod_read_unaligned};

use crate::SizeError;
use crate::cast::{Builtin, ColorSource, ColorTarget, convert_color};
use crate::color::{B, Bgr, Bgra, G, R, Rg, Rgb, Rgba};
use crate::norm::Channel;
use crate::packed::*;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Byte access
// ===========================================================================

/// Reads and writes one pixel at an arbitrary byte offset.
pub(crate) trait PixelBytes: Copy {
    const SIZE: usize;

    /// `bytes` is exactly `SIZE` long.
    fn read(bytes: &[u8]) -> Self;
    fn write(&self, bytes: &mut [u8]);
}

macro_rules! shape_bytes {
    ($($name:ident { $($field:ident),+ })*) => {$(
        impl<T: Channel> PixelBytes for $name<T> {
            const SIZE: usize = size_of::<T>() * [$(stringify!($field)),+].len();

            #[inline(always)]
            fn read(bytes: &[u8]) -> Self {
                let mut elems = bytes.chunks_exact(size_of::<T>());
                Self {
                    $($field: elems.next().map(pod_read_unaligned::<T>).unwrap_or_default(),)+
                }
            }

            #[inline(always)]
            fn write(&self, bytes: &mut [u8]) {
                let mut elems = bytes.chunks_exact_mut(size_of::<T>());
                $(
                    if let Some(e) = elems.next() {
                        e.copy_from_slice(bytes_of(&self.$field));
                    }
                )+
            }
        }
    )*};
}

shape_bytes! {
    R { r }
    G { g }
    B { b }
    Rg { r, g }
    Rgb { r, g, b }
    Bgr { b, g, r }
    Rgba { r, g, b, a }
    Bgra { b, g, r, a }
}

macro_rules! packed_bytes {
    ($($name:ident),*) => {$(
        impl PixelBytes for $name {
            const SIZE: usize = size_of::<$name>();

            #[inline(always)]
            fn read(bytes: &[u8]) -> Self {
                pod_read_unaligned(bytes)
            }

            #[inline(always)]
            fn write(&self, bytes: &mut [u8]) {
                bytes.copy_from_slice(bytes_of(self));
            }
        }
    )*};
}

packed_bytes!(
    Rgb233, Rgb565, Bgr332, Bgr565, Rgba4444, Rgba5551, Rgba1010102, Abgr4444, Abgr1555,
    Abgr2101010, Bgra4444, Bgra5551, Bgra1010102, Argb4444, Argb1555, Argb2101010
);

type RowFn = fn(&[u8], &mut [u8]);

/// Convert whole pixels from `src` into `dst`. Both hold the same pixel count.
fn convert_bytes_row<From, To>(src: &[u8], dst: &mut [u8])
where
    From: PixelBytes + ColorSource,
    To: PixelBytes + ColorTarget,
{
    for (s, d) in src
        .chunks_exact(From::SIZE)
        .zip(dst.chunks_exact_mut(To::SIZE))
    {
        let px: To = convert_color(From::read(s));
        px.write(d);
    }
}

/// Maps a builtin type to its runtime format.
pub(crate) trait HasFormat {
    const FORMAT: PixelFormat;
}

// ===========================================================================
// Format table
// ===========================================================================

macro_rules! pixel_formats {
    ($($(#[$meta:meta])* $variant:ident: $ty:ty,)*) => {
        /// A pixel layout chosen at run time.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum PixelFormat {
            $($(#[$meta])* $variant,)*
        }

        $(
            impl HasFormat for $ty {
                const FORMAT: PixelFormat = PixelFormat::$variant;
            }
        )*

        impl PixelFormat {
            /// Every format, in declaration order.
            pub const ALL: &'static [PixelFormat] = &[$(PixelFormat::$variant),*];

            /// The variant name, e.g. `"Rgba8"` or `"Rgb565"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(PixelFormat::$variant => stringify!($variant),)*
                }
            }

            /// Size of one pixel in bytes.
            pub const fn bytes_per_pixel(self) -> usize {
                match self {
                    $(PixelFormat::$variant => <$ty as PixelBytes>::SIZE,)*
                }
            }

            /// Number of channels stored per pixel.
            pub const fn channel_count(self) -> usize {
                match self {
                    $(PixelFormat::$variant => <$ty as Builtin>::CHANNELS as usize,)*
                }
            }

            /// Whether an alpha channel is stored.
            pub const fn has_alpha(self) -> bool {
                match self {
                    $(PixelFormat::$variant => <$ty as Builtin>::HAS_ALPHA,)*
                }
            }

            /// Whether all channels share one bit-packed word.
            pub const fn is_packed(self) -> bool {
                match self {
                    $(PixelFormat::$variant => <$ty as Builtin>::IS_PACKED,)*
                }
            }

            /// The unpacked format a packed format widens into; `self` for
            /// the others.
            pub const fn canonical(self) -> PixelFormat {
                match self {
                    $(PixelFormat::$variant => <<$ty as Builtin>::Canonical as HasFormat>::FORMAT,)*
                }
            }
        }

        fn kernel_to<From: PixelBytes + ColorSource>(dst: PixelFormat) -> RowFn {
            match dst {
                $(PixelFormat::$variant => convert_bytes_row::<From, $ty> as RowFn,)*
            }
        }

        fn kernel(src: PixelFormat, dst: PixelFormat) -> RowFn {
            match src {
                $(PixelFormat::$variant => kernel_to::<$ty>(dst),)*
            }
        }
    };
}

pixel_formats! {
    R8: R<u8>,
    R16: R<u16>,
    RF32: R<f32>,
    G8: G<u8>,
    G16: G<u16>,
    GF32: G<f32>,
    B8: B<u8>,
    B16: B<u16>,
    BF32: B<f32>,
    Rg8: Rg<u8>,
    Rg16: Rg<u16>,
    RgF32: Rg<f32>,
    Rgb8: Rgb<u8>,
    Rgb16: Rgb<u16>,
    RgbF32: Rgb<f32>,
    Bgr8: Bgr<u8>,
    Bgr16: Bgr<u16>,
    BgrF32: Bgr<f32>,
    Rgba8: Rgba<u8>,
    Rgba16: Rgba<u16>,
    RgbaF32: Rgba<f32>,
    Bgra8: Bgra<u8>,
    Bgra16: Bgra<u16>,
    BgraF32: Bgra<f32>,
    Rgb233: Rgb233,
    Rgb565: Rgb565,
    Bgr332: Bgr332,
    Bgr565: Bgr565,
    Rgba4444: Rgba4444,
    Rgba5551: Rgba5551,
    Rgba1010102: Rgba1010102,
    Abgr4444: Abgr4444,
    Abgr1555: Abgr1555,
    Abgr2101010: Abgr2101010,
    Bgra4444: Bgra4444,
    Bgra5551: Bgra5551,
    Bgra1010102: Bgra1010102,
    Argb4444: Argb4444,
    Argb1555: Argb1555,
    Argb2101010: Argb2101010,
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===========================================================================
// Public API
// ===========================================================================

/// Convert a contiguous buffer of `src_format` pixels into `dst`.
///
/// Returns the number of pixels converted. `dst` may be longer than needed;
/// bytes past the converted pixels are left untouched.
///
/// Fails with [`SizeError::NotPixelAligned`] if `src` is empty or not a whole
/// number of pixels, and [`SizeError::PixelCountMismatch`] if `dst` cannot
/// hold them all.
///
/// # Panics
///
/// With `debug_assertions` on, if a float source channel that has to be
/// rescaled lies outside `[0, 1]` (NaN included).
pub fn convert_pixels(
    src_format: PixelFormat,
    src: &[u8],
    dst_format: PixelFormat,
    dst: &mut [u8],
) -> Result<usize, SizeError> {
    let src_bpp = src_format.bytes_per_pixel();
    let dst_bpp = dst_format.bytes_per_pixel();
    check_copy(src.len(), src_bpp, dst.len(), dst_bpp)?;
    let n = src.len() / src_bpp;
    kernel(src_format, dst_format)(src, &mut dst[..n * dst_bpp]);
    Ok(n)
}

/// Convert a `width` x `height` image between strided buffers.
///
/// `src_stride` / `dst_stride` are the distances in bytes between the start
/// of consecutive rows. Padding bytes between rows are neither read nor
/// written. Fails with [`SizeError::InvalidStride`] on inconsistent
/// geometry.
///
/// # Panics
///
/// Under the same conditions as [`convert_pixels`].
#[allow(clippy::too_many_arguments)]
pub fn convert_pixels_strided(
    src_format: PixelFormat,
    src: &[u8],
    src_stride: usize,
    dst_format: PixelFormat,
    dst: &mut [u8],
    dst_stride: usize,
    width: usize,
    height: usize,
) -> Result<(), SizeError> {
    let src_bpp = src_format.bytes_per_pixel();
    let dst_bpp = dst_format.bytes_per_pixel();
    check_strided(src.len(), width, height, src_stride, src_bpp)?;
    check_strided(dst.len(), width, height, dst_stride, dst_bpp)?;
    let row = kernel(src_format, dst_format);
    for y in 0..height {
        let s = &src[y * src_stride..][..width * src_bpp];
        let d = &mut dst[y * dst_stride..][..width * dst_bpp];
        row(s, d);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn metadata() {
        assert_eq!(PixelFormat::ALL.len(), 40);
        assert_eq!(PixelFormat::Rgba8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::RgbaF32.bytes_per_pixel(), 16);
        assert_eq!(PixelFormat::Bgr16.bytes_per_pixel(), 6);
        assert_eq!(PixelFormat::R8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rgb233.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Argb2101010.bytes_per_pixel(), 4);

        assert_eq!(PixelFormat::Rg16.channel_count(), 2);
        assert_eq!(PixelFormat::Bgr565.channel_count(), 3);
        assert_eq!(PixelFormat::Abgr1555.channel_count(), 4);

        assert!(PixelFormat::Bgra5551.has_alpha());
        assert!(!PixelFormat::Rgb565.has_alpha());
        assert!(PixelFormat::Rgb565.is_packed());
        assert!(!PixelFormat::Rgb8.is_packed());
    }

    #[test]
    fn canonical_formats() {
        assert_eq!(PixelFormat::Rgb565.canonical(), PixelFormat::Rgb8);
        assert_eq!(PixelFormat::Bgr332.canonical(), PixelFormat::Rgb8);
        assert_eq!(PixelFormat::Argb1555.canonical(), PixelFormat::Rgba8);
        assert_eq!(PixelFormat::Bgra1010102.canonical(), PixelFormat::Rgba16);
        assert_eq!(PixelFormat::BgrF32.canonical(), PixelFormat::BgrF32);
        for &f in PixelFormat::ALL {
            assert!(!f.canonical().is_packed(), "{f}");
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in PixelFormat::ALL.iter().enumerate() {
            for b in &PixelFormat::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
        assert_eq!(PixelFormat::Rgba1010102.name(), "Rgba1010102");
        assert_eq!(alloc::format!("{}", PixelFormat::RgF32), "RgF32");
    }

    #[test]
    fn rgb8_to_rgb565_bytes() {
        let src = [255u8, 255, 255, 255, 0, 0];
        let mut dst = [0u8; 4];
        let n = convert_pixels(PixelFormat::Rgb8, &src, PixelFormat::Rgb565, &mut dst).unwrap();
        assert_eq!(n, 2);
        assert_eq!(dst[..2], 0xFFFFu16.to_ne_bytes());
        assert_eq!(dst[2..], 0x001Fu16.to_ne_bytes());
    }

    #[test]
    fn float_bytes_are_native_endian() {
        let src: Vec<u8> = [1.0f32, 0.0, 0.2]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut dst = [0u8; 4];
        convert_pixels(PixelFormat::RgbF32, &src, PixelFormat::Bgra8, &mut dst).unwrap();
        assert_eq!(dst, [51, 0, 255, 255]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "normalized float out of [0, 1]")]
    fn out_of_range_float_bytes_panic_in_debug() {
        let src: Vec<u8> = [2.0f32, 0.0, 0.0, 1.0]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut dst = [0u8; 4];
        let _ = convert_pixels(PixelFormat::RgbaF32, &src, PixelFormat::Rgba8, &mut dst);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "normalized float out of [0, 1]")]
    fn nan_float_bytes_panic_in_debug() {
        let src: Vec<u8> = [0.0f32, f32::NAN, 0.0]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut dst = [0u8; 2];
        let _ = convert_pixels(PixelFormat::RgbF32, &src, PixelFormat::Rgb565, &mut dst);
    }

    #[test]
    fn sixteen_bit_alpha_round_trip() {
        let src: Vec<u8> = [0u16, 65535, 0, 32896]
            .iter()
            .flat_map(|v| v.to_ne_bytes())
            .collect();
        let mut dst = [0u8; 4];
        convert_pixels(PixelFormat::Rgba16, &src, PixelFormat::Rgba8, &mut dst).unwrap();
        assert_eq!(dst, [0, 255, 0, 128]);
    }

    #[test]
    fn every_pair_has_a_kernel() {
        for &s in PixelFormat::ALL {
            for &d in PixelFormat::ALL {
                let src = vec![0u8; s.bytes_per_pixel() * 3];
                let mut dst = vec![0xAAu8; d.bytes_per_pixel() * 3];
                assert_eq!(convert_pixels(s, &src, d, &mut dst), Ok(3), "{s} -> {d}");
            }
        }
    }

    #[test]
    fn zeros_convert_to_transparent_or_opaque_black() {
        let src = [0u8; 4];
        let mut dst = [0u8; 4];
        convert_pixels(PixelFormat::Rgba8, &src, PixelFormat::Argb4444, &mut dst[..2]).unwrap();
        assert_eq!(dst[..2], [0, 0]);
        convert_pixels(PixelFormat::Rgb8, &src[..3], PixelFormat::Rgba8, &mut dst).unwrap();
        assert_eq!(dst, [0, 0, 0, 255]);
    }

    #[test]
    fn size_errors() {
        let mut dst = [0u8; 8];
        assert_eq!(
            convert_pixels(PixelFormat::Rgb8, &[], PixelFormat::Rgba8, &mut dst),
            Err(SizeError::NotPixelAligned)
        );
        assert_eq!(
            convert_pixels(PixelFormat::Rgb8, &[0; 4], PixelFormat::Rgba8, &mut dst),
            Err(SizeError::NotPixelAligned)
        );
        assert_eq!(
            convert_pixels(PixelFormat::Rgb8, &[0; 9], PixelFormat::Rgba8, &mut dst),
            Err(SizeError::PixelCountMismatch)
        );
    }

    #[test]
    fn strided_skips_padding() {
        // 2x2 Rgb565, stride 6 (one padding word per row)
        let mut src = vec![0u8; 12];
        src[0..2].copy_from_slice(&0x001Fu16.to_ne_bytes());
        src[2..4].copy_from_slice(&0x07E0u16.to_ne_bytes());
        src[4..6].copy_from_slice(&[0xEE, 0xEE]);
        src[6..8].copy_from_slice(&0xF800u16.to_ne_bytes());
        src[8..10].copy_from_slice(&0xFFFFu16.to_ne_bytes());
        src[10..12].copy_from_slice(&[0xEE, 0xEE]);

        // stride 10: 8 bytes of pixels, 2 bytes padding
        let mut dst = vec![0x77u8; 20];
        convert_pixels_strided(
            PixelFormat::Rgb565,
            &src,
            6,
            PixelFormat::Rgba8,
            &mut dst,
            10,
            2,
            2,
        )
        .unwrap();

        assert_eq!(dst[0..4], [255, 0, 0, 255]);
        assert_eq!(dst[4..8], [0, 255, 0, 255]);
        assert_eq!(dst[8..10], [0x77, 0x77]);
        assert_eq!(dst[10..14], [0, 0, 255, 255]);
        assert_eq!(dst[14..18], [255, 255, 255, 255]);
        assert_eq!(dst[18..20], [0x77, 0x77]);
    }

    #[test]
    fn strided_last_row_may_be_short() {
        let src = [0u8; 3 + 1 + 3];
        let mut dst = [0u8; 4 * 2];
        convert_pixels_strided(
            PixelFormat::Bgr8,
            &src,
            4,
            PixelFormat::Bgra8,
            &mut dst,
            4,
            1,
            2,
        )
        .unwrap();
        assert_eq!(dst, [0, 0, 0, 255, 0, 0, 0, 255]);
    }

    #[test]
    fn strided_geometry_errors() {
        let src = [0u8; 64];
        let mut dst = [0u8; 64];
        let f = PixelFormat::Rgba8;
        // zero width / height
        assert_eq!(
            convert_pixels_strided(f, &src, 16, f, &mut dst, 16, 0, 2),
            Err(SizeError::InvalidStride)
        );
        assert_eq!(
            convert_pixels_strided(f, &src, 16, f, &mut dst, 16, 2, 0),
            Err(SizeError::InvalidStride)
        );
        // row wider than stride
        assert_eq!(
            convert_pixels_strided(f, &src, 4, f, &mut dst, 16, 2, 2),
            Err(SizeError::InvalidStride)
        );
        // buffer too short for the last row
        assert_eq!(
            convert_pixels_strided(f, &src, 16, f, &mut dst[..20], 16, 2, 2),
            Err(SizeError::InvalidStride)
        );
        // overflow
        assert_eq!(
            convert_pixels_strided(f, &src, usize::MAX, f, &mut dst, 16, 1, 3),
            Err(SizeError::InvalidStride)
        );
    }
}
