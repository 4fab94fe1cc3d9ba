//! Conversions between HSL triples and `#rrggbb` strings.

use ::palette::{FromColor, Srgb, encoding};
use serde::Serialize;

use super::PaletteError;

/// A color in hue/saturation/lightness form. Hue is in degrees, the other two
/// channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Build a color, wrapping `hue` into `[0, 360)`.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            lightness,
        }
    }
}

/// Wrap degrees into `[0, 360)`.
pub fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Encode an HSL triple as a lowercase `#rrggbb` string.
///
/// The hue is wrapped into `[0, 360)` first. Saturation and lightness must
/// already be clamped into `[0, 1]` by the caller. Each channel is scaled to
/// `[0, 255]` and truncated.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let rgb = hsl_to_rgb(hue, saturation, lightness);
    format!("#{}", hex::encode(rgb))
}

/// Convert HSL to 8-bit sRGB channels.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let hsl = ::palette::Hsl::new_srgb(wrap_hue(hue), saturation, lightness);
    let rgb = Srgb::<f64>::from_color(hsl);

    // `as` saturates, so float noise just outside [0, 1] cannot wrap.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    [rgb.red, rgb.green, rgb.blue].map(|c| (c * 255.0) as u8)
}

/// Parse `#rrggbb` (the leading `#` is optional) into its three bytes.
pub fn parse_hex(input: &str) -> Result<[u8; 3], PaletteError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 {
        return Err(PaletteError::InvalidFormat(format!(
            "expected 6 hex digits, got `{input}`"
        )));
    }

    let mut rgb = [0u8; 3];
    hex::decode_to_slice(digits, &mut rgb)
        .map_err(|err| PaletteError::InvalidFormat(format!("`{input}`: {err}")))?;
    Ok(rgb)
}

/// Convert 8-bit sRGB channels back to HSL. Achromatic colors report hue 0.
pub fn rgb_to_hsl(rgb: [u8; 3]) -> Hsl {
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let lightness_only = rgb[0] == rgb[1] && rgb[1] == rgb[2];
    let hsl = ::palette::Hsl::<encoding::Srgb, f64>::from_color(Srgb::new(r, g, b));

    if lightness_only {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness: hsl.lightness,
        };
    }

    Hsl {
        hue: wrap_hue(hsl.hue.into_positive_degrees()),
        saturation: hsl.saturation,
        lightness: hsl.lightness,
    }
}

/// Decode a hex color into HSL.
pub fn hex_to_hsl(input: &str) -> Result<Hsl, PaletteError> {
    parse_hex(input).map(rgb_to_hsl)
}

/// Hue of a hex color in degrees.
pub fn dominant_hue(input: &str) -> Result<f64, PaletteError> {
    hex_to_hsl(input).map(|hsl| hsl.hue)
}

/// Scale the saturation of a hex color by `factor`, capped at 1.0.
///
/// Hue and lightness are carried over unchanged.
pub fn adjust_intensity(input: &str, factor: f64) -> Result<String, PaletteError> {
    let hsl = hex_to_hsl(input)?;
    let saturation = (hsl.saturation * factor).min(1.0);
    Ok(hsl_to_hex(hsl.hue, saturation, hsl.lightness))
}
