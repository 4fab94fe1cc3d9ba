//! Harmony schemes and the per-scheme hue/saturation/lightness curves.
//!
//! Every scheme follows the same shape: pick a hue for each position, compute
//! raw saturation and lightness from the profile ranges plus a scheme-specific
//! oscillation, then clamp both channels into the scheme's safety bounds. The
//! clamp is always the final step and is driven by [`HarmonyScheme::bounds`].

use std::{f64::consts::PI, fmt, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PaletteError, codec::Hsl, interval::Interval, profile::EmotionProfile};

/// Maximum hue jitter (degrees) applied per color by the monochromatic scheme.
const MONOCHROMATIC_JITTER: f64 = 8.0;

/// Classical color-theory rule governing hue relationships within a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HarmonyScheme {
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Tetradic,
    Monochromatic,
}

/// Safety bounds applied to the generated channels of a scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeBounds {
    pub saturation: Interval,
    pub lightness: Interval,
}

impl HarmonyScheme {
    pub const ALL: [Self; 6] = [
        Self::Complementary,
        Self::Triadic,
        Self::Analogous,
        Self::SplitComplementary,
        Self::Tetradic,
        Self::Monochromatic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::SplitComplementary => "split_complementary",
            Self::Tetradic => "tetradic",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Clamp intervals for saturation and lightness.
    pub fn bounds(self) -> SchemeBounds {
        let (saturation, lightness) = match self {
            Self::Complementary => ((0.15, 0.95), (0.15, 0.9)),
            Self::Triadic => ((0.2, 0.9), (0.2, 0.85)),
            Self::Analogous => ((0.25, 0.9), (0.25, 0.8)),
            Self::SplitComplementary => ((0.2, 0.9), (0.2, 0.8)),
            Self::Tetradic => ((0.3, 0.8), (0.3, 0.75)),
            Self::Monochromatic => ((0.2, 0.9), (0.2, 0.85)),
        };
        SchemeBounds {
            saturation: Interval::new(saturation.0, saturation.1),
            lightness: Interval::new(lightness.0, lightness.1),
        }
    }

    /// Fixed hue offsets from the base hue, or `None` for schemes whose hues
    /// are computed per position.
    fn offsets(self) -> Option<&'static [f64]> {
        match self {
            Self::Complementary => Some(&[0.0, 180.0, 30.0, 210.0, 150.0]),
            Self::Triadic => Some(&[0.0, 120.0, 240.0, 60.0, 300.0]),
            Self::SplitComplementary => Some(&[0.0, 150.0, 210.0, 60.0, -60.0]),
            Self::Tetradic => Some(&[0.0, 90.0, 180.0, 270.0, 45.0]),
            Self::Analogous | Self::Monochromatic => None,
        }
    }

    /// Produce `count` colors around `base_hue`.
    ///
    /// `confidence` is expected in `[0.3, 1.0]`. Fixed-offset schemes repeat
    /// their offsets when `count` exceeds the list. The monochromatic scheme
    /// draws one jitter value from `rng` per color; the others do not touch it.
    pub fn generate<R: Rng + ?Sized>(
        self,
        base_hue: f64,
        profile: &EmotionProfile,
        confidence: f64,
        count: usize,
        rng: &mut R,
    ) -> Vec<Hsl> {
        let bounds = self.bounds();
        let curve = Curve {
            saturation: profile.saturation_range,
            lightness: profile.lightness_range,
            confidence,
            count,
        };

        (0..count)
            .map(|i| {
                let hue = self.hue_at(base_hue, i, &curve, rng);
                let (saturation, lightness) = self.channels_at(i, &curve);
                Hsl::new(
                    hue,
                    bounds.saturation.clamp(saturation),
                    bounds.lightness.clamp(lightness),
                )
            })
            .collect()
    }

    fn hue_at<R: Rng + ?Sized>(self, base_hue: f64, i: usize, curve: &Curve, rng: &mut R) -> f64 {
        if let Some(offsets) = self.offsets() {
            return base_hue + offsets[i % offsets.len()];
        }

        match self {
            Self::Analogous => {
                let spread = 50.0 + 30.0 * curve.confidence;
                base_hue + (curve.eased(i, 0.8) - 0.5) * spread
            }
            _ => base_hue + rng.random_range(-MONOCHROMATIC_JITTER..=MONOCHROMATIC_JITTER),
        }
    }

    /// Unclamped saturation and lightness for position `i`.
    fn channels_at(self, i: usize, curve: &Curve) -> (f64, f64) {
        let Curve {
            saturation: s,
            lightness: l,
            confidence: c,
            ..
        } = *curve;
        let step = position(i);

        match self {
            Self::Complementary => (
                s.lerp(c) + 0.15 * (step * PI / 3.0).sin() * c,
                l.lerp(0.3 + 0.4 * curve.fraction(i)) + 0.2 * (step * PI / 2.0).cos(),
            ),
            Self::Triadic => (
                s.lerp(0.7 + 0.3 * c * (0.8 + 0.4 * (step * PI).sin())),
                l.lerp(0.4 + 0.5 * curve.fraction(i) + 0.1 * (step * PI / 2.0).cos()),
            ),
            Self::Analogous => {
                let eased = curve.eased(i, 0.8);
                (
                    s.lerp(c) + 0.2 * (step * PI * 2.0 / curve.len()).sin(),
                    l.lerp(0.3 + 0.4 * eased + 0.2 * (step * PI / 3.0).sin()),
                )
            }
            Self::SplitComplementary => {
                let intensity = 1.0 - step * 0.15;
                (
                    s.lerp(c * intensity),
                    l.lerp(0.4 + 0.3 * step / curve.len()),
                )
            }
            Self::Tetradic => (
                s.lerp(0.6 + 0.4 * c * (0.8 + 0.2 * (step * PI).cos())),
                l.lerp(0.3 + 0.4 * curve.fraction(i)),
            ),
            Self::Monochromatic => {
                let progress = curve.fraction(i);
                (
                    s.lerp(0.4 + 0.6 * curve.eased(i, 0.7)),
                    l.lerp(0.3 + 0.5 * progress + 0.1 * (progress * PI).sin()),
                )
            }
        }
    }
}

impl FromStr for HarmonyScheme {
    type Err = PaletteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == input)
            .ok_or_else(|| {
                PaletteError::Configuration(format!("unknown harmony scheme `{input}`"))
            })
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs shared by every position of one palette.
struct Curve {
    saturation: Interval,
    lightness: Interval,
    confidence: f64,
    count: usize,
}

impl Curve {
    fn len(&self) -> f64 {
        position(self.count)
    }

    /// `i / (count - 1)`, or 0 for single-color palettes.
    fn fraction(&self, i: usize) -> f64 {
        if self.count <= 1 {
            0.0
        } else {
            position(i) / position(self.count - 1)
        }
    }

    fn eased(&self, i: usize, exponent: f64) -> f64 {
        self.fraction(i).powf(exponent)
    }
}

#[allow(clippy::cast_precision_loss)]
fn position(i: usize) -> f64 {
    i as f64
}
