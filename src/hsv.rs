//! Hue / saturation / value.
//!
//! `Hsv` is not a builtin: it joins the conversion graph through
//! [`ToCanonical`] and [`FromCanonical`] with `Rgba<f32>` as its canonical
//! type, the same way a downstream color type would.
//!
//! ```rust
//! use tinct::{Hsv, Rgb8, convert_color};
//!
//! let yellow: Rgb8 = convert_color(Hsv::new(60.0, 1.0, 1.0));
//! assert_eq!(yellow, Rgb8::new(255, 255, 0));
//! ```

use crate::cast::{FromCanonical, ToCanonical};
use crate::color::Rgba;

/// A color as hue in degrees, saturation and value in `[0, 1]`.
///
/// Any finite hue is accepted; it is wrapped into `[0, 360)` on conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    #[inline(always)]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Euclidean remainder: the result has the sign of `m`, so negative hues
/// wrap forward.
#[inline(always)]
fn euc_mod(arg: f32, m: f32) -> f32 {
    let r = arg - m * ((arg / m) as i64) as f32;
    if r < 0.0 { r + m } else { r }
}

#[inline(always)]
fn abs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

impl ToCanonical for Hsv {
    type Canonical = Rgba<f32>;

    fn to_canonical(&self) -> Rgba<f32> {
        let h = euc_mod(self.h, 360.0);
        let c = self.v * self.s;
        let m = self.v - c;
        let x = c * (1.0 - abs(euc_mod(h / 60.0, 2.0) - 1.0)) + m;
        let v = self.v;

        let (r, g, b) = if h < 60.0 {
            (v, x, m)
        } else if h < 120.0 {
            (x, v, m)
        } else if h < 180.0 {
            (m, v, x)
        } else if h < 240.0 {
            (m, x, v)
        } else if h < 300.0 {
            (x, m, v)
        } else {
            (v, m, x)
        };
        Rgba::new(r, g, b, 1.0)
    }
}

impl FromCanonical for Hsv {
    type Canonical = Rgba<f32>;

    fn from_canonical(c: Rgba<f32>) -> Self {
        let v = c.r.max(c.g).max(c.b);
        let delta = v - c.r.min(c.g).min(c.b);

        let h = if delta == 0.0 {
            0.0
        } else if c.r == v {
            60.0 * euc_mod((c.g - c.b) / delta, 6.0)
        } else if c.g == v {
            60.0 * ((c.b - c.r) / delta + 2.0)
        } else {
            60.0 * ((c.r - c.g) / delta + 4.0)
        };
        let s = if v != 0.0 { delta / v } else { 0.0 };
        Hsv { h, s, v }
    }
}
