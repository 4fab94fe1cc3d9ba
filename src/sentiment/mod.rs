//! Turns raw analyzer outputs into the polarity/confidence pair and category
//! consumed by the palette engine.
//!
//! Running the analyzers (and translating the input beforehand) happens
//! upstream; callers hand over the scores they produced.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::palette::SentimentCategory;

/// Weight of the VADER compound score in the hybrid polarity.
const VADER_WEIGHT: f64 = 0.6;
/// Weight of the TextBlob polarity in the hybrid polarity.
const TEXTBLOB_WEIGHT: f64 = 0.4;
/// Floor applied to the hybrid agreement score.
const MIN_HYBRID_CONFIDENCE: f64 = 0.3;

/// Errors raised while combining analyzer outputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SentimentError {
    /// The selected method needs an analyzer output that was not supplied.
    #[error("method `{method}` requires {missing} scores")]
    MissingScores {
        method: &'static str,
        missing: &'static str,
    },
}

/// Which analyzer output(s) drive the polarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    #[serde(rename = "textblob")]
    TextBlob,
    Vader,
    #[default]
    Hybrid,
}

impl AnalysisMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextBlob => "textblob",
            Self::Vader => "vader",
            Self::Hybrid => "hybrid",
        }
    }
}

/// TextBlob-style pattern analyzer output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TextBlobScore {
    /// Polarity in `[-1, 1]`.
    pub polarity: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
}

/// VADER-style lexicon analyzer output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaderScore {
    /// Normalized compound score in `[-1, 1]`.
    pub compound: f64,
}

/// Outputs of whichever analyzers were run upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzerScores {
    #[serde(default)]
    pub textblob: Option<TextBlobScore>,
    #[serde(default)]
    pub vader: Option<VaderScore>,
}

/// Combined sentiment reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SentimentScore {
    pub polarity: f64,
    pub confidence: f64,
    /// How closely the two analyzers agree; only set for hybrid scoring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<f64>,
}

/// Derive polarity and confidence for `method` from the supplied scores.
pub fn score(
    method: AnalysisMethod,
    scores: &AnalyzerScores,
) -> Result<SentimentScore, SentimentError> {
    let missing = |missing| SentimentError::MissingScores {
        method: method.as_str(),
        missing,
    };

    match method {
        AnalysisMethod::TextBlob => {
            let textblob = scores.textblob.ok_or_else(|| missing("textblob"))?;
            Ok(SentimentScore {
                polarity: textblob.polarity,
                confidence: 1.0 - textblob.subjectivity,
                agreement: None,
            })
        }
        AnalysisMethod::Vader => {
            let vader = scores.vader.ok_or_else(|| missing("vader"))?;
            Ok(SentimentScore {
                polarity: vader.compound,
                confidence: vader.compound.abs(),
                agreement: None,
            })
        }
        AnalysisMethod::Hybrid => {
            let (Some(textblob), Some(vader)) = (scores.textblob, scores.vader) else {
                return Err(missing("textblob and vader"));
            };
            Ok(hybrid(textblob.polarity, vader.compound))
        }
    }
}

/// Weighted blend of both analyzers; confidence reflects their agreement.
pub fn hybrid(textblob_polarity: f64, vader_compound: f64) -> SentimentScore {
    let polarity = vader_compound * VADER_WEIGHT + textblob_polarity * TEXTBLOB_WEIGHT;
    let agreement = 1.0 - (textblob_polarity - vader_compound).abs() / 2.0;
    SentimentScore {
        polarity,
        confidence: agreement.max(MIN_HYBRID_CONFIDENCE),
        agreement: Some(agreement),
    }
}

/// Bucket a polarity into one of the seven categories.
pub fn classify(polarity: f64) -> SentimentCategory {
    if polarity > 0.6 {
        SentimentCategory::VeryPositive
    } else if polarity > 0.3 {
        SentimentCategory::Positive
    } else if polarity > 0.05 {
        SentimentCategory::SlightlyPositive
    } else if polarity < -0.6 {
        SentimentCategory::VeryNegative
    } else if polarity < -0.3 {
        SentimentCategory::Negative
    } else if polarity < -0.05 {
        SentimentCategory::SlightlyNegative
    } else {
        SentimentCategory::Neutral
    }
}

/// Strength of the emotional signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl Intensity {
    /// Grade `|polarity| * confidence`.
    pub fn from_score(polarity: f64, confidence: f64) -> Self {
        let factor = polarity.abs() * confidence;
        if factor > 0.7 {
            Self::VeryHigh
        } else if factor > 0.4 {
            Self::High
        } else if factor > 0.2 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryHigh => "very_high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(tb: f64, subjectivity: f64, vader: f64) -> AnalyzerScores {
        AnalyzerScores {
            textblob: Some(TextBlobScore {
                polarity: tb,
                subjectivity,
            }),
            vader: Some(VaderScore { compound: vader }),
        }
    }

    #[test]
    fn classify_thresholds() {
        assert_eq!(classify(0.61), SentimentCategory::VeryPositive);
        assert_eq!(classify(0.6), SentimentCategory::Positive);
        assert_eq!(classify(0.31), SentimentCategory::Positive);
        assert_eq!(classify(0.3), SentimentCategory::SlightlyPositive);
        assert_eq!(classify(0.06), SentimentCategory::SlightlyPositive);
        assert_eq!(classify(0.05), SentimentCategory::Neutral);
        assert_eq!(classify(0.0), SentimentCategory::Neutral);
        assert_eq!(classify(-0.05), SentimentCategory::Neutral);
        assert_eq!(classify(-0.06), SentimentCategory::SlightlyNegative);
        assert_eq!(classify(-0.31), SentimentCategory::Negative);
        assert_eq!(classify(-0.61), SentimentCategory::VeryNegative);
    }

    #[test]
    fn hybrid_weights_vader_more() {
        let score = hybrid(0.5, 1.0);
        assert!((score.polarity - 0.8).abs() < 1e-12);
        assert!((score.agreement.unwrap() - 0.75).abs() < 1e-12);
        assert!((score.confidence - 0.75).abs() < 1e-12);
    }

    #[test]
    fn hybrid_confidence_has_a_floor() {
        let score = hybrid(-1.0, 1.0);
        assert_eq!(score.agreement, Some(0.0));
        assert_eq!(score.confidence, 0.3);
    }

    #[test]
    fn single_analyzer_methods() {
        let scores = both(0.4, 0.25, -0.5);
        let textblob = score(AnalysisMethod::TextBlob, &scores).unwrap();
        assert_eq!(textblob.polarity, 0.4);
        assert_eq!(textblob.confidence, 0.75);

        let vader = score(AnalysisMethod::Vader, &scores).unwrap();
        assert_eq!(vader.polarity, -0.5);
        assert_eq!(vader.confidence, 0.5);
    }

    #[test]
    fn missing_scores_are_reported() {
        let only_vader = AnalyzerScores {
            textblob: None,
            vader: Some(VaderScore { compound: 0.2 }),
        };
        assert!(score(AnalysisMethod::Vader, &only_vader).is_ok());
        assert_eq!(
            score(AnalysisMethod::Hybrid, &only_vader),
            Err(SentimentError::MissingScores {
                method: "hybrid",
                missing: "textblob and vader",
            })
        );
        assert!(score(AnalysisMethod::TextBlob, &AnalyzerScores::default()).is_err());
    }

    #[test]
    fn intensity_grades() {
        assert_eq!(Intensity::from_score(0.9, 0.9), Intensity::VeryHigh);
        assert_eq!(Intensity::from_score(-0.9, 0.5), Intensity::High);
        assert_eq!(Intensity::from_score(0.5, 0.5), Intensity::Medium);
        assert_eq!(Intensity::from_score(0.1, 1.0), Intensity::Low);
    }

    #[test]
    fn method_names_round_trip_through_serde() {
        assert_eq!(
            serde_json::from_str::<AnalysisMethod>("\"textblob\"").unwrap(),
            AnalysisMethod::TextBlob
        );
        assert_eq!(
            serde_json::to_string(&AnalysisMethod::Hybrid).unwrap(),
            "\"hybrid\""
        );
    }
}
