//! Channel-shape color families.
//!
//! Each family names *which* channels it stores and in what memory order.
//! `R`, `G` and `B` all hold one value but are not interchangeable: a green
//! value converted to `Rgb` lands in the green slot, and converting it to
//! `R` yields zero.
//!
//! Element types are any [`Channel`]: floats in `[0, 1]` or integers spanning
//! their full unsigned range.

use crate::cast::{
    Builtin, Channels, ColorSource, ColorTarget, Opaque, alpha_or_opaque, color_or_zero,
    projected_or_channels, sealed,
};
use crate::norm::Channel;

macro_rules! shape {
    ($(
        $(#[$meta:meta])*
        $name:ident { $($field:ident),+ }
    )*) => {$(
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name<T> {
            $(pub $field: T,)+
        }

        impl<T> $name<T> {
            #[inline(always)]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> sealed::Sealed for $name<T> {}
    )*};
}

shape! {
    /// Red only.
    R { r }
    /// Green only.
    G { g }
    /// Blue only.
    B { b }
    /// Red and green.
    Rg { r, g }
    /// Red, green, blue.
    Rgb { r, g, b }
    /// Blue, green, red.
    Bgr { b, g, r }
    /// Red, green, blue, alpha.
    Rgba { r, g, b, a }
    /// Blue, green, red, alpha.
    Bgra { b, g, r, a }
}

pub type Rgb8 = Rgb<u8>;
pub type Rgb16 = Rgb<u16>;
pub type RgbF = Rgb<f32>;
pub type Bgr8 = Bgr<u8>;
pub type Bgr16 = Bgr<u16>;
pub type BgrF = Bgr<f32>;
pub type Rgba8 = Rgba<u8>;
pub type Rgba16 = Rgba<u16>;
pub type RgbaF = Rgba<f32>;
pub type Bgra8 = Bgra<u8>;
pub type Bgra16 = Bgra<u16>;
pub type BgraF = Bgra<f32>;

// ---------------------------------------------------------------------------
// Sources: which channels each family carries
// ---------------------------------------------------------------------------

impl<T: Channel> ColorSource for R<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels {
            r: Some(self.r),
            ..Channels::NONE
        }
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for G<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels {
            g: Some(self.g),
            ..Channels::NONE
        }
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for B<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels {
            b: Some(self.b),
            ..Channels::NONE
        }
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for Rg<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels {
            r: Some(self.r),
            g: Some(self.g),
            ..Channels::NONE
        }
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for Rgb<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels::rgb(self.r, self.g, self.b)
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for Bgr<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels::rgb(self.r, self.g, self.b)
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for Rgba<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels::rgba(self.r, self.g, self.b, self.a)
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

impl<T: Channel> ColorSource for Bgra<T> {
    type Elem = T;
    #[inline(always)]
    fn channels(&self) -> Channels<T> {
        Channels::rgba(self.r, self.g, self.b, self.a)
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_builtin(*self)
    }
}

// ---------------------------------------------------------------------------
// Targets: where each channel lands, and what fills the gaps
// ---------------------------------------------------------------------------

impl<T: Channel> ColorTarget for R<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            r: color_or_zero(c.r),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for G<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            g: color_or_zero(c.g),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for B<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            b: color_or_zero(c.b),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for Rg<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            r: color_or_zero(c.r),
            g: color_or_zero(c.g),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for Rgb<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            r: color_or_zero(c.r),
            g: color_or_zero(c.g),
            b: color_or_zero(c.b),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for Bgr<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            b: color_or_zero(c.b),
            g: color_or_zero(c.g),
            r: color_or_zero(c.r),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for Rgba<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            r: color_or_zero(c.r),
            g: color_or_zero(c.g),
            b: color_or_zero(c.b),
            a: alpha_or_opaque(c.a),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

impl<T: Channel> ColorTarget for Bgra<T> {
    #[inline(always)]
    fn from_channels<E: Channel>(c: Channels<E>) -> Self {
        Self {
            b: color_or_zero(c.b),
            g: color_or_zero(c.g),
            r: color_or_zero(c.r),
            a: alpha_or_opaque(c.a),
        }
    }

    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        projected_or_channels(c)
    }
}

macro_rules! builtin_shape {
    ($($name:ident: channels = $n:literal, alpha = $alpha:literal;)*) => {$(
        impl<T: Channel> Builtin for $name<T> {
            const CHANNELS: u8 = $n;
            const HAS_ALPHA: bool = $alpha;
            const IS_PACKED: bool = false;
            type Canonical = Self;
        }
    )*};
}

builtin_shape! {
    R: channels = 1, alpha = false;
    G: channels = 1, alpha = false;
    B: channels = 1, alpha = false;
    Rg: channels = 2, alpha = false;
    Rgb: channels = 3, alpha = false;
    Bgr: channels = 3, alpha = false;
    Rgba: channels = 4, alpha = true;
    Bgra: channels = 4, alpha = true;
}

impl<T: Channel> Opaque for Rgba<T> {
    #[inline(always)]
    fn opaque(self) -> Self {
        Self {
            a: alpha_or_opaque::<T, T>(None),
            ..self
        }
    }
}

impl<T: Channel> Opaque for Bgra<T> {
    #[inline(always)]
    fn opaque(self) -> Self {
        Self {
            a: alpha_or_opaque::<T, T>(None),
            ..self
        }
    }
}
