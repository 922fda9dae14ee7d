//=========================================================================
// Color
//=========================================================================
//
// 8-bit RGB with a floating alpha, mirroring the `rgba()`/`hsla()`
// notation the scene palettes are written in.
//
//=========================================================================

/// An sRGB color with straight (non-premultiplied) alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with alpha, clamped into `[0, 1]`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: clamp_alpha(a),
        }
    }

    /// Opaque color from hue (degrees), saturation and lightness (percent).
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self::hsla(hue, saturation, lightness, 1.0)
    }

    /// Color from hue (degrees), saturation and lightness (percent) and alpha.
    ///
    /// Hue wraps; saturation and lightness are clamped to `[0, 100]`.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::rgba(to_channel(r + m), to_channel(g + m), to_channel(b + m), alpha)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: clamp_alpha(alpha),
            ..self
        }
    }
}

fn clamp_alpha(a: f32) -> f32 {
    // NaN collapses to fully transparent
    if a.is_nan() {
        0.0
    } else {
        a.clamp(0.0, 1.0)
    }
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_clamps_alpha() {
        assert_eq!(Color::rgba(1, 2, 3, 1.7).a, 1.0);
        assert_eq!(Color::rgba(1, 2, 3, -0.2).a, 0.0);
        assert_eq!(Color::rgba(1, 2, 3, f32::NAN).a, 0.0);
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 100.0, 50.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::hsl(120.0, 100.0, 50.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsl(240.0, 100.0, 50.0), Color::rgb(0, 0, 255));
    }

    #[test]
    fn hsl_extremes_of_lightness() {
        assert_eq!(Color::hsl(200.0, 80.0, 100.0), Color::WHITE);
        assert_eq!(Color::hsl(200.0, 80.0, 0.0), Color::BLACK);
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(Color::hsl(360.0, 100.0, 50.0), Color::hsl(0.0, 100.0, 50.0));
        assert_eq!(Color::hsl(-120.0, 100.0, 50.0), Color::hsl(240.0, 100.0, 50.0));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::CYAN.with_alpha(0.25);
        assert_eq!((c.r, c.g, c.b, c.a), (0, 255, 255, 0.25));
    }
}
