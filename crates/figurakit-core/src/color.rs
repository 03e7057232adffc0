//! Color models and conversions.
//!
//! A figure stores exactly one canonical representation, [`Rgb`]; the
//! CMYK/HSL/HSV views are computed on demand and never stored, so no
//! drift between models can accumulate across edits. All channels are
//! normalized to `[0, 1]`, including hue (not degrees).
//!
//! Conversions are pure functions over single colors: no batching, no
//! shared state, no I/O. Inputs are constrained to `[0, 1]` by the
//! caller's widgets; out-of-range values propagate through the math
//! rather than being caught.

use serde::{Deserialize, Serialize};

/// Canonical RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CMYK view of a color, all channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

/// HSL view of a color. Hue is normalized to `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// HSV view of a color. Hue is normalized to `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts to CMYK: `k = 1 - max(r, g, b)`, `c/m/y = (1 - ch - k) / (1 - k)`.
    ///
    /// Pure black would divide by zero; the result is defined as
    /// `c = m = y = 0, k = 1` instead. The chromatic channels are
    /// computed as `(max - ch) / max`, which is the same quantity
    /// without the `1 - k` cancellation: near-black inputs round
    /// `1 - k` to zero in f32 while `max` itself stays nonzero.
    pub fn to_cmyk(self) -> Cmyk {
        let max = self.r.max(self.g).max(self.b);
        if max == 0.0 {
            return Cmyk { c: 0.0, m: 0.0, y: 0.0, k: 1.0 };
        }
        Cmyk {
            c: (max - self.r) / max,
            m: (max - self.g) / max,
            y: (max - self.b) / max,
            k: 1.0 - max,
        }
    }

    /// Converts to HSL using the standard hue/chroma decomposition.
    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        Hsl {
            h: hue_sector(self, max, delta),
            s,
            l,
        }
    }

    /// Converts to HSV using the max/min decomposition.
    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        if delta == 0.0 {
            return Hsv { h: 0.0, s: 0.0, v: max };
        }

        Hsv {
            h: hue_sector(self, max, delta),
            s: delta / max,
            v: max,
        }
    }
}

/// Hue from the dominant channel, normalized to `[0, 1)`.
fn hue_sector(rgb: Rgb, max: f32, delta: f32) -> f32 {
    let h6 = if max == rgb.r {
        ((rgb.g - rgb.b) / delta).rem_euclid(6.0)
    } else if max == rgb.g {
        (rgb.b - rgb.r) / delta + 2.0
    } else {
        (rgb.r - rgb.g) / delta + 4.0
    };
    h6 / 6.0
}

impl Cmyk {
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Converts back to RGB: `r = (1 - c)(1 - k)`, etc.
    ///
    /// Exact inverse of [`Rgb::to_cmyk`] for `k < 1`.
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: (1.0 - self.c) * (1.0 - self.k),
            g: (1.0 - self.m) * (1.0 - self.k),
            b: (1.0 - self.y) * (1.0 - self.k),
        }
    }
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Converts back to RGB. Zero saturation is pure gray `r = g = b = l`.
    pub fn to_rgb(self) -> Rgb {
        if self.s == 0.0 {
            return Rgb { r: self.l, g: self.l, b: self.l };
        }

        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h6 = self.h * 6.0;
        let x = c * (1.0 - (h6.rem_euclid(2.0) - 1.0).abs());
        let m = self.l - c / 2.0;

        let (r, g, b) = sector_rgb(h6, c, x);
        Rgb { r: r + m, g: g + m, b: b + m }
    }
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Converts back to RGB with the 6-sector rule on `i = floor(h * 6) mod 6`.
    pub fn to_rgb(self) -> Rgb {
        let h6 = self.h * 6.0;
        let i = (h6.floor() as i32).rem_euclid(6);
        let f = h6 - h6.floor();

        let p = self.v * (1.0 - self.s);
        let q = self.v * (1.0 - f * self.s);
        let t = self.v * (1.0 - (1.0 - f) * self.s);

        let (r, g, b) = match i {
            0 => (self.v, t, p),
            1 => (q, self.v, p),
            2 => (p, self.v, t),
            3 => (p, q, self.v),
            4 => (t, p, self.v),
            _ => (self.v, p, q),
        };
        Rgb { r, g, b }
    }
}

/// Channel triple for a hue sector, before lightness offset.
fn sector_rgb(h6: f32, c: f32, x: f32) -> (f32, f32, f32) {
    if h6 < 1.0 {
        (c, x, 0.0)
    } else if h6 < 2.0 {
        (x, c, 0.0)
    } else if h6 < 3.0 {
        (0.0, c, x)
    } else if h6 < 4.0 {
        (0.0, x, c)
    } else if h6 < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

/// The color model the editor panel currently displays.
///
/// Owned by the scene as explicit state; the stored color on a figure
/// is always RGB regardless of the active scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Rgb,
    Cmyk,
    Hsl,
    Hsv,
}

/// A color expressed in one scheme, used at the editing boundary.
///
/// The panel edits channels in whatever scheme is active; the value is
/// folded back to canonical RGB before it touches a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorValue {
    Rgb(Rgb),
    Cmyk(Cmyk),
    Hsl(Hsl),
    Hsv(Hsv),
}

impl ColorValue {
    /// Views a canonical color through the given scheme.
    pub fn of(scheme: ColorScheme, rgb: Rgb) -> Self {
        match scheme {
            ColorScheme::Rgb => ColorValue::Rgb(rgb),
            ColorScheme::Cmyk => ColorValue::Cmyk(rgb.to_cmyk()),
            ColorScheme::Hsl => ColorValue::Hsl(rgb.to_hsl()),
            ColorScheme::Hsv => ColorValue::Hsv(rgb.to_hsv()),
        }
    }

    /// Folds the value back to the canonical representation.
    pub fn to_rgb(self) -> Rgb {
        match self {
            ColorValue::Rgb(rgb) => rgb,
            ColorValue::Cmyk(cmyk) => cmyk.to_rgb(),
            ColorValue::Hsl(hsl) => hsl.to_rgb(),
            ColorValue::Hsv(hsv) => hsv.to_rgb(),
        }
    }

    /// The scheme this value is expressed in.
    pub fn scheme(self) -> ColorScheme {
        match self {
            ColorValue::Rgb(_) => ColorScheme::Rgb,
            ColorValue::Cmyk(_) => ColorScheme::Cmyk,
            ColorValue::Hsl(_) => ColorScheme::Hsl,
            ColorValue::Hsv(_) => ColorScheme::Hsv,
        }
    }
}
