//! Color type and RGB/hex/HSL conversions.
//!
//! RGB is the ground truth; HSL is always a derived view, recomputed on
//! demand. Conversions back from HSL truncate channel values to 8 bits
//! instead of rounding. That truncation is a pinned output-compatibility
//! policy: downstream palettes are regression-tested against it, so a
//! "fix" to rounding is a behavior change, not a bug fix.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RrssError};

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// A 24-bit RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex color string. The leading `#` is optional;
    /// anything other than exactly 6 hex digits is rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());

        // Length is in bytes and the digits are sliced by byte index, so
        // multi-byte input has to be rejected before slicing
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(RrssError::InvalidColor {
                message: format!("invalid hex color: {}", s),
                help: Some("Use #RRGGBB format (6 hex digits)".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL: hue in degrees `[0, 360)`, saturation and lightness
    /// in `[0, 1]`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let maxc = r.max(g).max(b);
        let minc = r.min(g).min(b);
        let sumc = maxc + minc;
        let rangec = maxc - minc;
        let l = sumc / 2.0;

        if minc == maxc {
            return (0.0, 0.0, l);
        }

        let s = if l <= 0.5 {
            rangec / sumc
        } else {
            rangec / (2.0 - maxc - minc)
        };

        let rc = (maxc - r) / rangec;
        let gc = (maxc - g) / rangec;
        let bc = (maxc - b) / rangec;

        let h = if r == maxc {
            bc - gc
        } else if g == maxc {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };

        (modulo_one(h / 6.0) * 360.0, s, l)
    }

    /// Convert HSL (hue in degrees, s/l in `[0, 1]`) back to a color.
    ///
    /// Hue is taken modulo 360 conceptually; callers pre-normalize with
    /// e.g. `(h + 180.0) % 360.0`. Channels are truncated to u8.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_rgb_f64(h / 360.0, s, l);
        Self::rgb(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
        )
    }
}

impl FromStr for Color {
    type Err = RrssError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Saturating clamp, defaulting to the `[0, 1]` unit interval at call sites.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Euclidean remainder by 1.0, always in `[0, 1)`.
fn modulo_one(x: f64) -> f64 {
    let r = x % 1.0;
    if r < 0.0 {
        r + 1.0
    } else {
        r
    }
}

fn hsl_to_rgb_f64(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
    let m1 = 2.0 * l - m2;
    (
        hue_channel(m1, m2, h + ONE_THIRD),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - ONE_THIRD),
    )
}

fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = modulo_one(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

fn parse_hex_byte(byte: &str, full: &str) -> Result<u8> {
    u8::from_str_radix(byte, 16).map_err(|_| RrssError::InvalidColor {
        message: format!("invalid hex color: {}", full),
        help: Some("Use #RRGGBB format (6 hex digits)".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#e94560").unwrap(), Color::rgb(0xe9, 0x45, 0x60));
        assert_eq!(Color::from_hex("E94560").unwrap(), Color::rgb(0xe9, 0x45, 0x60));
        assert_eq!(Color::from_hex("  #0f0f0f ").unwrap(), Color::rgb(15, 15, 15));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#e9456").is_err());
        assert!(Color::from_hex("#e945601a").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex_rejects_multibyte_input() {
        // 6 bytes but not 6 ASCII digits; must error, not slice
        // mid-character and panic
        assert!(Color::from_hex("€abc").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("#é9456").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#e94560", "#0a192f", "#64ffda"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
        // Case-insensitive in, lowercase out
        assert_eq!(Color::from_hex("#E94560").unwrap().to_hex(), "#e94560");
    }

    #[test]
    fn test_to_hsl_known_values() {
        let (h, s, l) = Color::from_hex("#e94560").unwrap().to_hsl();
        assert!((h - 350.1219512195122).abs() < 1e-9);
        assert!((s - 0.7884615384615382).abs() < 1e-9);
        assert!((l - 0.592156862745098).abs() < 1e-9);

        // Achromatic: hue and saturation are zero by definition
        let (h, s, l) = Color::rgb(128, 128, 128).to_hsl();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 0.5019607843137255).abs() < 1e-12);

        let (h, s, l) = Color::rgb(255, 0, 0).to_hsl();
        assert_eq!((h, s, l), (0.0, 1.0, 0.5));

        let (h, _, _) = Color::rgb(0, 0, 255).to_hsl();
        assert_eq!(h, 240.0);
    }

    #[test]
    fn test_from_hsl_truncates() {
        // The seed channel 0xe9 lands at 232.9999... after the round trip
        // and truncation drops it to 0xe8. Pinned behavior.
        let (h, s, l) = Color::from_hex("#e94560").unwrap().to_hsl();
        assert_eq!(Color::from_hsl(h, s, l).to_hex(), "#e84560");
    }

    #[test]
    fn test_hsl_round_trip_within_one() {
        // Sampled sweep over the RGB cube: each channel reproduced to ±1.
        for r in (0u16..=255).step_by(17) {
            for g in (0u16..=255).step_by(23) {
                for b in (0u16..=255).step_by(29) {
                    let c = Color::rgb(r as u8, g as u8, b as u8);
                    let (h, s, l) = c.to_hsl();
                    let back = Color::from_hsl(h, s, l);
                    assert!(
                        (i16::from(c.r) - i16::from(back.r)).abs() <= 1
                            && (i16::from(c.g) - i16::from(back.g)).abs() <= 1
                            && (i16::from(c.b) - i16::from(back.b)).abs() <= 1,
                        "{} round-tripped to {}",
                        c,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_hue_range() {
        for r in (0u16..=255).step_by(51) {
            for g in (0u16..=255).step_by(51) {
                for b in (0u16..=255).step_by(51) {
                    let (h, s, l) = Color::rgb(r as u8, g as u8, b as u8).to_hsl();
                    assert!((0.0..360.0).contains(&h));
                    assert!((0.0..=1.0).contains(&s));
                    assert!((0.0..=1.0).contains(&l));
                }
            }
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.12, 0.0, 0.1), 0.1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::rgb(255, 0, 0)), "#ff0000");
    }
}
