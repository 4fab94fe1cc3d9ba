//! Simple polarity-driven palette used when the harmonic engine fails.

use super::codec::hsl_to_hex;

/// Map `value` from `[from.0, from.1]` onto `[to.0, to.1]`, clamping at the ends.
fn interp(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let t = ((value - from.0) / (from.1 - from.0)).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Five colors around a hue between red (polarity −1) and green (polarity 1).
///
/// Saturation grows with `confidence`, lightness drops as `|polarity|` grows.
pub fn dynamic_palette(polarity: f64, confidence: f64) -> Vec<String> {
    let hue = interp(polarity, (-1.0, 1.0), (0.0, 120.0));
    let saturation = interp(confidence, (0.0, 1.0), (0.45, 0.95));
    let lightness = interp(polarity.abs(), (0.0, 1.0), (0.9, 0.5));

    [
        (hue, (lightness + 0.15).min(0.95)),
        (hue - 30.0, lightness),
        (hue, lightness),
        (hue + 30.0, lightness),
        (hue, (lightness - 0.15).max(0.2)),
    ]
    .into_iter()
    .map(|(h, l)| hsl_to_hex(h, saturation, l))
    .collect()
}
