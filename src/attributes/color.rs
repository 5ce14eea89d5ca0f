use std::fmt;

/// A fill or stroke colour.
///
/// HSLA colours are written out as `#RRGGBB` (alpha goes to a separate opacity
/// property) so that non-browser renderers and plotter software can read them.
/// OkLCH is passed through as a CSS function for browser-only output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Hue 0-360, saturation and lightness 0-100, alpha 0-1.
    Hsla {
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    },
    /// Lightness 0-100, chroma 0-0.4ish, hue 0-360, alpha 0-1.
    Oklch {
        lightness: f64,
        chroma: f64,
        hue: f64,
        alpha: f64,
    },
}

impl Color {
    pub fn hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Color {
        Color::Hsla {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Color {
        Color::hsla(hue, saturation, lightness, 1.0)
    }

    pub fn oklch(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Color {
        Color::Oklch {
            lightness,
            chroma,
            hue,
            alpha,
        }
    }

    pub fn black() -> Color {
        Color::hsl(0.0, 0.0, 0.0)
    }

    pub fn white() -> Color {
        Color::hsl(0.0, 0.0, 100.0)
    }

    /// Alpha that has to be emitted as a separate opacity property, if any.
    pub(crate) fn separate_alpha(&self) -> Option<f64> {
        match self {
            Color::Hsla { alpha, .. } if *alpha < 1.0 => Some(*alpha),
            _ => None,
        }
    }

    /// Uppercase `#RRGGBB` for HSLA colours. Non-finite input is logged and
    /// drawn black.
    fn hex(hue: f64, saturation: f64, lightness: f64) -> String {
        if !(hue.is_finite() && saturation.is_finite() && lightness.is_finite()) {
            log::warn!(
                "invalid colour hsl({}, {}, {}), using black",
                hue,
                saturation,
                lightness
            );
            return "#000000".to_string();
        }
        let [r, g, b, _] = csscolorparser::Color::from_hsla(
            hue as _,
            (saturation / 100.0) as _,
            (lightness / 100.0) as _,
            1.0,
        )
        .to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::Hsla {
                hue,
                saturation,
                lightness,
                ..
            } => write!(f, "{}", Color::hex(hue, saturation, lightness)),
            Color::Oklch {
                lightness,
                chroma,
                hue,
                alpha,
            } => write!(f, "oklch({}% {} {} / {})", lightness, chroma, hue, alpha),
        }
    }
}
