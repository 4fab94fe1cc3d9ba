//! Sentiment categories and the emotion profile table driving palette generation.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PaletteError, harmony::HarmonyScheme, interval::Interval};

/// Discrete emotion bucket derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
    VeryNegative,
}

impl SentimentCategory {
    /// Every category, ordered from most positive to most negative.
    pub const ALL: [Self; 7] = [
        Self::VeryPositive,
        Self::Positive,
        Self::SlightlyPositive,
        Self::Neutral,
        Self::SlightlyNegative,
        Self::Negative,
        Self::VeryNegative,
    ];

    /// Snake-case key (`"slightly_positive"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryPositive => "very_positive",
            Self::Positive => "positive",
            Self::SlightlyPositive => "slightly_positive",
            Self::Neutral => "neutral",
            Self::SlightlyNegative => "slightly_negative",
            Self::Negative => "negative",
            Self::VeryNegative => "very_negative",
        }
    }

    /// Human label with spaces (`"slightly positive"`).
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Case-fold the input and turn spaces into underscores before matching.
    /// Unknown labels resolve to [`SentimentCategory::Neutral`].
    pub fn normalize(input: &str) -> Self {
        input.parse().unwrap_or(Self::Neutral)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for SentimentCategory {
    type Err = PaletteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let key = input.to_lowercase().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == key)
            .ok_or_else(|| PaletteError::Configuration(format!("unknown sentiment `{input}`")))
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color temperature family of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cool,
    Balanced,
    Dark,
}

/// Energy level of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Energy {
    Low,
    Medium,
    MediumHigh,
    High,
    Intense,
}

/// Color-generation configuration attached to one sentiment category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionProfile {
    /// Display name of the emotion (e.g. "Euphoria").
    pub name: String,
    /// Base hue candidates in degrees; one is sampled per palette.
    pub candidate_hues: [f64; 4],
    pub saturation_range: Interval,
    pub lightness_range: Interval,
    pub temperature: Temperature,
    pub energy: Energy,
    pub harmony: HarmonyScheme,
    pub mood: String,
}

/// Read-only lookup from [`SentimentCategory`] to [`EmotionProfile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: [EmotionProfile; 7],
}

impl ProfileTable {
    /// Profile configured for `category`.
    pub fn get(&self, category: SentimentCategory) -> &EmotionProfile {
        &self.profiles[category.index()]
    }

    /// Normalize a free-form sentiment label and return the matching profile,
    /// falling back to neutral.
    pub fn lookup(&self, sentiment: &str) -> (SentimentCategory, &EmotionProfile) {
        let category = SentimentCategory::normalize(sentiment);
        (category, self.get(category))
    }

    /// Replace the profile for one category.
    pub fn set(&mut self, category: SentimentCategory, profile: EmotionProfile) {
        self.profiles[category.index()] = profile;
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self {
            profiles: [
                profile(
                    "Euphoria",
                    [45.0, 60.0, 30.0, 120.0],
                    (0.75, 0.95),
                    (0.65, 0.85),
                    Temperature::Warm,
                    Energy::High,
                    HarmonyScheme::Complementary,
                    "energetic",
                ),
                profile(
                    "Joy",
                    [30.0, 50.0, 160.0, 200.0],
                    (0.6, 0.85),
                    (0.55, 0.75),
                    Temperature::Warm,
                    Energy::MediumHigh,
                    HarmonyScheme::Triadic,
                    "optimistic",
                ),
                profile(
                    "Serenity",
                    [180.0, 200.0, 220.0, 160.0],
                    (0.4, 0.7),
                    (0.65, 0.8),
                    Temperature::Cool,
                    Energy::Low,
                    HarmonyScheme::Analogous,
                    "peaceful",
                ),
                profile(
                    "Balance",
                    [210.0, 30.0, 120.0, 270.0],
                    (0.3, 0.6),
                    (0.5, 0.7),
                    Temperature::Balanced,
                    Energy::Medium,
                    HarmonyScheme::Tetradic,
                    "balanced",
                ),
                profile(
                    "Melancholy",
                    [200.0, 220.0, 240.0, 280.0],
                    (0.3, 0.6),
                    (0.4, 0.65),
                    Temperature::Cool,
                    Energy::Low,
                    HarmonyScheme::Analogous,
                    "contemplative",
                ),
                profile(
                    "Sadness",
                    [220.0, 240.0, 260.0, 200.0],
                    (0.4, 0.7),
                    (0.3, 0.55),
                    Temperature::Cool,
                    Energy::Low,
                    HarmonyScheme::Monochromatic,
                    "somber",
                ),
                profile(
                    "Anguish",
                    [0.0, 20.0, 320.0, 280.0],
                    (0.6, 0.9),
                    (0.2, 0.45),
                    Temperature::Dark,
                    Energy::Intense,
                    HarmonyScheme::SplitComplementary,
                    "intense",
                ),
            ],
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn profile(
    name: &str,
    candidate_hues: [f64; 4],
    saturation: (f64, f64),
    lightness: (f64, f64),
    temperature: Temperature,
    energy: Energy,
    harmony: HarmonyScheme,
    mood: &str,
) -> EmotionProfile {
    EmotionProfile {
        name: name.into(),
        candidate_hues,
        saturation_range: Interval::new(saturation.0, saturation.1),
        lightness_range: Interval::new(lightness.0, lightness.1),
        temperature,
        energy,
        harmony,
        mood: mood.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_spaces() {
        assert_eq!(
            SentimentCategory::normalize("Very Positive"),
            SentimentCategory::VeryPositive
        );
        assert_eq!(
            SentimentCategory::normalize("slightly negative"),
            SentimentCategory::SlightlyNegative
        );
        assert_eq!(
            SentimentCategory::normalize("NEGATIVE"),
            SentimentCategory::Negative
        );
    }

    #[test]
    fn unknown_labels_fall_back_to_neutral() {
        assert_eq!(
            SentimentCategory::normalize("totally_unknown_key"),
            SentimentCategory::Neutral
        );
        assert_eq!(SentimentCategory::normalize(""), SentimentCategory::Neutral);
        assert_eq!(
            SentimentCategory::normalize(" positive"),
            SentimentCategory::Neutral
        );
        assert!("ecstatic".parse::<SentimentCategory>().is_err());
    }

    #[test]
    fn label_uses_spaces() {
        assert_eq!(SentimentCategory::VeryNegative.label(), "very negative");
        assert_eq!(SentimentCategory::Neutral.to_string(), "neutral");
    }

    #[test]
    fn table_is_indexed_by_category() {
        let table = ProfileTable::default();
        let very_positive = table.get(SentimentCategory::VeryPositive);
        assert_eq!(very_positive.name, "Euphoria");
        assert_eq!(very_positive.harmony, HarmonyScheme::Complementary);
        assert_eq!(very_positive.temperature, Temperature::Warm);
        assert_eq!(very_positive.energy, Energy::High);

        assert_eq!(
            table.get(SentimentCategory::Negative).harmony,
            HarmonyScheme::Monochromatic
        );
        assert_eq!(
            table.get(SentimentCategory::VeryNegative).harmony,
            HarmonyScheme::SplitComplementary
        );
        assert_eq!(
            table.get(SentimentCategory::Neutral).harmony,
            HarmonyScheme::Tetradic
        );
    }

    #[test]
    fn lookup_misses_resolve_to_neutral_profile() {
        let table = ProfileTable::default();
        let (category, profile) = table.lookup("whatever");
        assert_eq!(category, SentimentCategory::Neutral);
        assert_eq!(profile, table.get(SentimentCategory::Neutral));
    }

    #[test]
    fn builtin_ranges_stay_inside_unit_interval() {
        let table = ProfileTable::default();
        for category in SentimentCategory::ALL {
            let profile = table.get(category);
            for range in [profile.saturation_range, profile.lightness_range] {
                assert!(range.min() >= 0.0 && range.max() <= 1.0);
                assert!(range.min() <= range.max());
            }
            assert!(profile.candidate_hues.iter().all(|h| (0.0..360.0).contains(h)));
        }
    }

    #[test]
    fn energy_serializes_with_hyphen() {
        assert_eq!(
            serde_json::to_string(&Energy::MediumHigh).unwrap(),
            "\"medium-high\""
        );
        assert_eq!(
            serde_json::to_string(&Temperature::Balanced).unwrap(),
            "\"balanced\""
        );
    }

    #[test]
    fn profiles_deserialize_from_config_shape() {
        let json = r#"{
            "name": "Calm",
            "candidate_hues": [180, 190, 200, 210],
            "saturation_range": [0.2, 0.4],
            "lightness_range": [0.6, 0.8],
            "temperature": "cool",
            "energy": "low",
            "harmony": "analogous",
            "mood": "still"
        }"#;
        let profile: EmotionProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.harmony, HarmonyScheme::Analogous);
        assert_eq!(profile.saturation_range, Interval::new(0.2, 0.4));
    }

    #[test]
    fn profiles_with_unknown_harmony_are_rejected() {
        let json = r#"{
            "name": "Calm",
            "candidate_hues": [180, 190, 200, 210],
            "saturation_range": [0.2, 0.4],
            "lightness_range": [0.6, 0.8],
            "temperature": "cool",
            "energy": "low",
            "harmony": "pentadic",
            "mood": "still"
        }"#;
        assert!(serde_json::from_str::<EmotionProfile>(json).is_err());
    }
}
