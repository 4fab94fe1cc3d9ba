//! Natural-language mood description and per-color psychological meanings.

use rand::{Rng, seq::IndexedRandom};

use super::{
    PaletteError,
    codec::dominant_hue,
    profile::{EmotionProfile, Energy, Temperature},
};

const FALLBACK_PHRASE: &str = "unique and expressive colors";

fn temperature_phrases(temperature: Temperature) -> &'static [&'static str] {
    match temperature {
        Temperature::Warm => &[
            "warm colors that embrace the soul",
            "vibrant tones full of vital energy",
            "golden hues dancing with passion",
        ],
        Temperature::Cool => &[
            "fresh colors whispering serenity",
            "bluish tones inviting contemplation",
            "glacial hues that calm the spirit",
        ],
        Temperature::Balanced => &[
            "balanced colors in perfect harmony",
            "neutral tones conveying stability",
            "even hues like a zen garden",
        ],
        Temperature::Dark => &[
            "deep colors charged with mystery",
            "intense tones reflecting emotional complexity",
            "somber hues with a melancholic beauty",
        ],
    }
}

fn energy_adverb(energy: Energy) -> &'static str {
    match energy {
        Energy::High => "intensely",
        Energy::MediumHigh => "vigorously",
        Energy::Medium => "gently",
        Energy::Low => "delicately",
        Energy::Intense => "profoundly",
    }
}

fn confidence_adverb(confidence: f64) -> &'static str {
    if confidence > 0.7 {
        "very"
    } else if confidence > 0.4 {
        "moderately"
    } else {
        "subtly"
    }
}

/// One-sentence mood description. Draws one phrase choice from `rng`.
pub fn describe_palette<R: Rng + ?Sized>(
    profile: &EmotionProfile,
    confidence: f64,
    rng: &mut R,
) -> String {
    let phrase = temperature_phrases(profile.temperature)
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_PHRASE);

    format!(
        "{} {} expressed through {}",
        confidence_adverb(confidence),
        energy_adverb(profile.energy),
        phrase
    )
}

/// Named hue range used to pick a color meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueFamily {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl HueFamily {
    /// Bucket a hue in degrees. Red covers both ends of the wheel and anything
    /// the other ranges miss.
    pub fn from_hue(hue: f64) -> Self {
        match hue {
            h if !(15.0..345.0).contains(&h) => Self::Red,
            h if h < 45.0 => Self::Orange,
            h if h < 75.0 => Self::Yellow,
            h if h < 165.0 => Self::Green,
            h if h < 255.0 => Self::Blue,
            h if h < 285.0 => Self::Purple,
            h if h < 315.0 => Self::Pink,
            _ => Self::Red,
        }
    }

    pub fn meanings(self) -> &'static [&'static str] {
        match self {
            Self::Red => &["passion", "energy", "strength"],
            Self::Orange => &["creativity", "enthusiasm", "warmth"],
            Self::Yellow => &["joy", "optimism", "clarity"],
            Self::Green => &["growth", "harmony", "nature"],
            Self::Blue => &["tranquility", "trust", "depth"],
            Self::Purple => &["mystery", "spirituality", "transformation"],
            Self::Pink => &["tenderness", "compassion", "love"],
        }
    }
}

/// One meaning per color, in order. Draws one choice from `rng` per color.
pub fn color_meanings<R: Rng + ?Sized>(
    colors: &[String],
    rng: &mut R,
) -> Result<Vec<String>, PaletteError> {
    colors
        .iter()
        .map(|color| {
            let family = HueFamily::from_hue(dominant_hue(color)?);
            let meaning = family.meanings().choose(rng).copied().unwrap_or("expression");
            Ok::<_, PaletteError>(meaning.to_string())
        })
        .collect()
}
