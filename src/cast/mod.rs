// ---------------------------------------------------------------------------
// Color conversion dispatch.
//
// Every conversion bottoms out in `To::from_channels(from.channels())`.
// Sources expose which of R/G/B/A they carry; targets pick the channels they
// store, rescale them with `normalize`, and fill the rest (color 0, alpha
// opaque). Both halves are monomorphized, so the rule for a (From, To) pair
// is fixed at compile time.
//
// Custom casters short-circuit: a value already of the type the other side
// wants is handed over as is, never split into channels and rebuilt.
// ---------------------------------------------------------------------------

use core::any::Any;

use crate::norm::{Channel, normalize};


/// The channels a color carries, each still in the source element type.
///
/// `None` means the source has no such channel. It is not the same as zero:
/// a missing alpha becomes opaque in the target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Channels<E> {
    pub r: Option<E>,
    pub g: Option<E>,
    pub b: Option<E>,
    pub a: Option<E>,
}

impl<E: Channel> Channels<E> {
    /// No channels at all; every target slot gets its default.
    pub const NONE: Self = Self {
        r: None,
        g: None,
        b: None,
        a: None,
    };

    /// Red, green and blue; no alpha.
    #[inline(always)]
    pub const fn rgb(r: E, g: E, b: E) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: None,
        }
    }

    /// All four channels.
    #[inline(always)]
    pub const fn rgba(r: E, g: E, b: E, a: E) -> Self {
        Self {
            r: Some(r),
            g: Some(g),
            b: Some(b),
            a: Some(a),
        }
    }
}

/// Rescale a color channel into `T`, or zero if the source lacks it.
#[inline(always)]
pub(crate) fn color_or_zero<T: Channel, E: Channel>(c: Option<E>) -> T {
    match c {
        Some(v) => normalize(v),
        None => T::ZERO,
    }
}

/// Rescale an alpha channel into `T`, or fully opaque if the source lacks it.
#[inline(always)]
pub(crate) fn alpha_or_opaque<T: Channel, E: Channel>(a: Option<E>) -> T {
    match a {
        Some(v) => normalize(v),
        None => normalize(1.0f64),
    }
}

/// `a` as a `B`, if `A` and `B` are the same type.
#[inline(always)]
fn same_type<A: 'static, B: 'static>(a: A) -> Option<B> {
    let mut slot = Some(a);
    (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<B>>()
        .and_then(Option::take)
}

/// `ColorTarget::from_projected` for the builtin types: identity when the
/// projected value already has the target type.
#[inline(always)]
pub(crate) fn projected_or_channels<T: Builtin, C: Builtin>(c: C) -> T {
    match same_type::<C, T>(c) {
        Some(t) => t,
        None => T::from_channels(c.channels()),
    }
}

/// A color that can be converted from.
pub trait ColorSource {
    /// Element type of the channels this color hands out.
    type Elem: Channel;

    /// The channels this color carries.
    fn channels(&self) -> Channels<Self::Elem>;

    /// Convert into `To`. Builtin colors hand themselves to
    /// [`ColorTarget::from_builtin`]; custom casters hand over their
    /// canonical value.
    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_channels(self.channels())
    }
}

/// A color that can be converted to.
pub trait ColorTarget: Sized {
    /// Build a value from the channels of any source.
    fn from_channels<E: Channel>(channels: Channels<E>) -> Self;

    /// Build a value from a builtin source color.
    #[inline(always)]
    fn from_builtin<C: Builtin>(c: C) -> Self {
        Self::from_channels(c.channels())
    }

    /// Build a value from the canonical value of a custom source.
    #[inline(always)]
    fn from_projected<C: Builtin>(c: C) -> Self {
        Self::from_builtin(c)
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The crate's own color types: the channel-shape families and the packed
/// formats. Only these can serve as a [`ToCanonical::Canonical`] or
/// [`FromCanonical::Canonical`].
pub trait Builtin: ColorSource + ColorTarget + Copy + 'static + sealed::Sealed {
    /// Number of channels stored.
    const CHANNELS: u8;
    /// Whether an alpha channel is stored.
    const HAS_ALPHA: bool;
    /// Whether the channels share one bit-packed word.
    const IS_PACKED: bool;
    /// The unpacked type a packed format is widened into. `Self` for the
    /// channel-shape families.
    type Canonical: Builtin;
}

/// A color with an alpha channel.
pub trait Opaque: Copy {
    /// The same color with alpha set to fully opaque. Color channels are
    /// left untouched, bit for bit.
    fn opaque(self) -> Self;
}

/// Convert a color into one of the builtin types.
///
/// Implementing this makes `Self` usable as a conversion *source* for every
/// target: the value is first projected into `Canonical`, which then
/// converts like any builtin color.
///
/// ```rust
/// use tinct::{RgbaF, Rgb8, ToCanonical, convert_color};
///
/// struct Grey(f32);
///
/// impl ToCanonical for Grey {
///     type Canonical = RgbaF;
///     fn to_canonical(&self) -> RgbaF {
///         RgbaF::new(self.0, self.0, self.0, 1.0)
///     }
/// }
///
/// assert_eq!(convert_color::<Rgb8, _>(Grey(1.0)), Rgb8::new(255, 255, 255));
/// ```
pub trait ToCanonical {
    /// The builtin type this color is projected into.
    type Canonical: Builtin;

    /// Project this color into its canonical type.
    fn to_canonical(&self) -> Self::Canonical;
}

/// Build a color from one of the builtin types.
///
/// Implementing this makes `Self` usable as a conversion *target* for every
/// source: the source is converted into `Canonical` first and then handed to
/// [`from_canonical`](Self::from_canonical).
pub trait FromCanonical: Sized {
    /// The builtin type this color is built from.
    type Canonical: Builtin;

    /// Build this color from a value of its canonical type.
    fn from_canonical(canonical: Self::Canonical) -> Self;
}

impl<T: ToCanonical> ColorSource for T {
    type Elem = <T::Canonical as ColorSource>::Elem;

    #[inline(always)]
    fn channels(&self) -> Channels<Self::Elem> {
        self.to_canonical().channels()
    }

    #[inline(always)]
    fn convert_to<To: ColorTarget>(&self) -> To {
        To::from_projected(self.to_canonical())
    }
}

impl<T: FromCanonical> ColorTarget for T {
    #[inline(always)]
    fn from_channels<E: Channel>(channels: Channels<E>) -> Self {
        T::from_canonical(T::Canonical::from_channels(channels))
    }

    #[inline(always)]
    fn from_builtin<C: Builtin>(c: C) -> Self {
        T::from_canonical(T::Canonical::from_projected(c))
    }
}

/// Convert `from` into the color type `To`.
///
/// Channels missing from the source are filled in: color channels with
/// zero, alpha with fully opaque. Channels the target cannot store are
/// dropped. Packed sources are widened to their canonical type first.
///
/// A custom caster's canonical value is passed along untouched when it
/// already has the type the target wants: `To` itself, the target's
/// canonical type, or both.
///
/// ```rust
/// use tinct::{Bgr8, R, Rgba8, convert_color};
///
/// let red = R::new(255u8);
/// assert_eq!(convert_color::<Rgba8, _>(red), Rgba8::new(255, 0, 0, 255));
/// assert_eq!(convert_color::<Bgr8, _>(red), Bgr8::new(0, 0, 255));
/// ```
#[inline(always)]
pub fn convert_color<To: ColorTarget, From: ColorSource>(from: From) -> To {
    from.convert_to()
}

/// Method form of [`convert_color`].
///
/// ```rust
/// use tinct::{CastColor, Hsv, Rgba8};
///
/// let green: Rgba8 = Hsv::new(120.0, 1.0, 1.0).cast();
/// assert_eq!(green, Rgba8::new(0, 255, 0, 255));
/// ```
pub trait CastColor: ColorSource + Sized {
    #[inline(always)]
    fn cast<To: ColorTarget>(self) -> To {
        convert_color(self)
    }
}

impl<T: ColorSource> CastColor for T {}
