//! Bit-packed pixel formats.
//!
//! Each type wraps one machine word holding every channel as an unsigned
//! bit-field. Fields are listed from the least significant bit up: in
//! [`Rgb565`], red occupies bits 0..5, green 5..11 and blue 11..16. The
//! constructor takes the fields in that same order.
//!
//! Converting *from* a packed format widens it into its canonical unpacked
//! type first (`Rgb<u8>` for the 3-channel formats, `Rgba<u8>` for the
//! 4/4/4/4 and 5/5/5/1 families, `Rgba<u16>` for the 10/10/10/2 family) by
//! linear scaling, `field * MAX / (2^bits - 1)`. Every other destination is
//! reached from there.
//!
//! Converting *to* a packed format rescales each channel's 32-bit normalized
//! view into the field, `normalize::<u32>(c) * (2^bits - 1) / u32::MAX`,
//! multiplying first in 64-bit integers. A missing alpha becomes the field's
//! maximum.
//!
//! ```rust
//! use tinct::{Rgb565, Rgb8, convert_color};
//!
//! let white = Rgb565::new(31, 63, 31);
//! assert_eq!(convert_color::<Rgb8, _>(white), Rgb8::new(255, 255, 255));
//! assert_eq!(convert_color::<Rgb565, _>(Rgb8::new(255, 255, 255)), white);
//! ```

use bytemuck::{Pod, Zeroable};

use crate::cast::{
    Builtin, Channels, ColorSource, ColorTarget, Opaque, projected_or_channels, sealed,
};
use crate::color::{Rgb, Rgba};
use crate::norm::{Channel, normalize, umax};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    R,
    G,
    B,
    A,
}

/// Position of one channel inside a packed word.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Field {
    slot: Slot,
    shift: u32,
    bits: u32,
}

impl Field {
    const fn new(slot: Slot, begin: u32, end: u32) -> Self {
        Field {
            slot,
            shift: begin,
            bits: end - begin,
        }
    }

    #[inline(always)]
    const fn mask(self) -> u32 {
        umax(self.bits) as u32
    }

    #[inline(always)]
    const fn extract(self, word: u32) -> u32 {
        (word >> self.shift) & self.mask()
    }
}

impl<E: Copy> Channels<E> {
    #[inline(always)]
    fn get(&self, slot: Slot) -> Option<E> {
        match slot {
            Slot::R => self.r,
            Slot::G => self.g,
            Slot::B => self.b,
            Slot::A => self.a,
        }
    }

    #[inline(always)]
    fn set(&mut self, slot: Slot, v: E) {
        match slot {
            Slot::R => self.r = Some(v),
            Slot::G => self.g = Some(v),
            Slot::B => self.b = Some(v),
            Slot::A => self.a = Some(v),
        }
    }
}

/// Widen every field of `word` into `E` by `field * E::MAX / (2^bits - 1)`.
#[inline(always)]
fn unpack_fields<E: Channel>(word: u32, fields: &[Field]) -> Channels<E> {
    let mut channels = Channels::NONE;
    for &f in fields {
        let v = u64::from(f.extract(word)) * E::MAX_U64 / umax(f.bits);
        channels.set(f.slot, E::from_u64(v));
    }
    channels
}

#[inline(always)]
fn pack_field<E: Channel>(v: Option<E>, f: Field) -> u32 {
    match v {
        Some(v) => {
            let wide = u64::from(normalize::<u32, E>(v));
            (wide * umax(f.bits) / u64::from(u32::MAX)) as u32
        }
        None if f.slot == Slot::A => f.mask(),
        None => 0,
    }
}

#[inline(always)]
fn pack_fields<E: Channel>(channels: &Channels<E>, fields: &[Field]) -> u32 {
    fields.iter().fold(0, |word, &f| {
        word | (pack_field(channels.get(f.slot), f) << f.shift)
    })
}

macro_rules! slot {
    (r) => {
        Slot::R
    };
    (g) => {
        Slot::G
    };
    (b) => {
        Slot::B
    };
    (a) => {
        Slot::A
    };
}

macro_rules! packed {
    ($(
        $(#[$meta:meta])*
        $name:ident($word:ty => $canon:ty) { $($ch:ident @ $lo:literal..$hi:literal),+ }
    )*) => {$(
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
        pub struct $name($word);

        impl $name {
            pub(crate) const FIELDS: &'static [Field] = &[$(Field::new(slot!($ch), $lo, $hi)),+];

            /// Pack the given fields, lowest bits first. Bits beyond each
            /// field's width are discarded.
            #[inline(always)]
            pub const fn new($($ch: $word),+) -> Self {
                Self(0 $(| (($ch & ((1 << ($hi - $lo)) - 1)) << $lo))+)
            }

            /// Reinterpret a raw word.
            #[inline(always)]
            pub const fn from_bits(bits: $word) -> Self {
                Self(bits)
            }

            /// The raw word.
            #[inline(always)]
            pub const fn bits(self) -> $word {
                self.0
            }

            $(
                #[inline(always)]
                pub const fn $ch(self) -> $word {
                    (self.0 >> $lo) & ((1 << ($hi - $lo)) - 1)
                }
            )+

            /// Widen into the canonical unpacked type.
            #[inline(always)]
            pub fn unpack(self) -> $canon {
                let elems = unpack_fields::<<$canon as ColorSource>::Elem>(u32::from(self.0), Self::FIELDS);
                <$canon>::from_channels(elems)
            }
        }

        impl sealed::Sealed for $name {}

        impl ColorSource for $name {
            type Elem = <$canon as ColorSource>::Elem;

            #[inline(always)]
            fn channels(&self) -> Channels<Self::Elem> {
                self.unpack().channels()
            }

            #[inline(always)]
            fn convert_to<To: ColorTarget>(&self) -> To {
                To::from_builtin(*self)
            }
        }

        impl ColorTarget for $name {
            #[inline(always)]
            fn from_channels<E: Channel>(channels: Channels<E>) -> Self {
                Self(pack_fields(&channels, Self::FIELDS) as $word)
            }

            #[inline(always)]
            fn from_projected<C: Builtin>(c: C) -> Self {
                projected_or_channels(c)
            }
        }

        impl Builtin for $name {
            const CHANNELS: u8 = [$(stringify!($ch)),+].len() as u8;
            const HAS_ALPHA: bool = <$canon as Builtin>::HAS_ALPHA;
            const IS_PACKED: bool = true;
            type Canonical = $canon;
        }
    )*};
}

packed! {
    /// 8-bit word: red 2, green 3, blue 3.
    Rgb233(u8 => Rgb<u8>) { r @ 0..2, g @ 2..5, b @ 5..8 }
    /// 16-bit word: red 5, green 6, blue 5.
    Rgb565(u16 => Rgb<u8>) { r @ 0..5, g @ 5..11, b @ 11..16 }
    /// 8-bit word: blue 3, green 3, red 2.
    Bgr332(u8 => Rgb<u8>) { b @ 0..3, g @ 3..6, r @ 6..8 }
    /// 16-bit word: blue 5, green 6, red 5.
    Bgr565(u16 => Rgb<u8>) { b @ 0..5, g @ 5..11, r @ 11..16 }
    /// 16-bit word: red 4, green 4, blue 4, alpha 4.
    Rgba4444(u16 => Rgba<u8>) { r @ 0..4, g @ 4..8, b @ 8..12, a @ 12..16 }
    /// 16-bit word: red 5, green 5, blue 5, alpha 1.
    Rgba5551(u16 => Rgba<u8>) { r @ 0..5, g @ 5..10, b @ 10..15, a @ 15..16 }
    /// 32-bit word: red 10, green 10, blue 10, alpha 2.
    Rgba1010102(u32 => Rgba<u16>) { r @ 0..10, g @ 10..20, b @ 20..30, a @ 30..32 }
    /// 16-bit word: alpha 4, blue 4, green 4, red 4.
    Abgr4444(u16 => Rgba<u8>) { a @ 0..4, b @ 4..8, g @ 8..12, r @ 12..16 }
    /// 16-bit word: alpha 1, blue 5, green 5, red 5.
    Abgr1555(u16 => Rgba<u8>) { a @ 0..1, b @ 1..6, g @ 6..11, r @ 11..16 }
    /// 32-bit word: alpha 2, blue 10, green 10, red 10.
    Abgr2101010(u32 => Rgba<u16>) { a @ 0..2, b @ 2..12, g @ 12..22, r @ 22..32 }
    /// 16-bit word: blue 4, green 4, red 4, alpha 4.
    Bgra4444(u16 => Rgba<u8>) { b @ 0..4, g @ 4..8, r @ 8..12, a @ 12..16 }
    /// 16-bit word: blue 5, green 5, red 5, alpha 1.
    Bgra5551(u16 => Rgba<u8>) { b @ 0..5, g @ 5..10, r @ 10..15, a @ 15..16 }
    /// 32-bit word: blue 10, green 10, red 10, alpha 2.
    Bgra1010102(u32 => Rgba<u16>) { b @ 0..10, g @ 10..20, r @ 20..30, a @ 30..32 }
    /// 16-bit word: alpha 4, red 4, green 4, blue 4.
    Argb4444(u16 => Rgba<u8>) { a @ 0..4, r @ 4..8, g @ 8..12, b @ 12..16 }
    /// 16-bit word: alpha 1, red 5, green 5, blue 5.
    Argb1555(u16 => Rgba<u8>) { a @ 0..1, r @ 1..6, g @ 6..11, b @ 11..16 }
    /// 32-bit word: alpha 2, red 10, green 10, blue 10.
    Argb2101010(u32 => Rgba<u16>) { a @ 0..2, r @ 2..12, g @ 12..22, b @ 22..32 }
}

macro_rules! packed_opaque {
    ($($name:ident),*) => {$(
        impl Opaque for $name {
            #[inline(always)]
            fn opaque(self) -> Self {
                let word = Self::FIELDS
                    .iter()
                    .filter(|f| f.slot == Slot::A)
                    .fold(u32::from(self.0), |w, f| w | (f.mask() << f.shift));
                Self(word as _)
            }
        }
    )*};
}

packed_opaque!(
    Rgba4444, Rgba5551, Rgba1010102, Abgr4444, Abgr1555, Abgr2101010, Bgra4444, Bgra5551,
    Bgra1010102, Argb4444, Argb1555, Argb2101010
);
