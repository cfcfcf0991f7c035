// src/classify/mod.rs

use serde::Serialize;

use crate::keywords::{contains_any, Keywords};

/// Traffic-light severity band for one physiological reading.
///
/// The four tiers are mutually exclusive and carry no ordering: `Unknown`
/// means "this label matched no physiological group", not "worse than
/// Critical".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Normal,
    Caution,
    Critical,
    Unknown,
}

impl SeverityTier {
    /// Display color used by card borders and map markers.
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "green",
            SeverityTier::Caution => "orange",
            SeverityTier::Critical => "red",
            SeverityTier::Unknown => "gray",
        }
    }

    /// Human-readable status label.
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "Normal",
            SeverityTier::Caution => "Caution",
            SeverityTier::Critical => "Critical",
            SeverityTier::Unknown => "Unknown",
        }
    }
}

/// Tier plus its status label, as consumed by cards and trail points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub tier: SeverityTier,
    pub status: String,
}

impl From<SeverityTier> for Classification {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            status: tier.label().to_string(),
        }
    }
}

/// Classify one numeric reading against the group its category label
/// matches.
///
/// Groups are checked in fixed priority order (temperature, heart,
/// oxygen); the first group whose keyword appears in the label wins and
/// the rest are not consulted. Matching is a case-insensitive substring
/// test. A label matching no group yields `Unknown`.
///
/// Band boundaries are exact float comparisons: 37.5 is still Normal for
/// a temperature, 37.51 is Caution. A NaN value inside a matched group
/// fails every band check and lands in Critical.
pub fn classify(category_label: &str, value: f64, keywords: &Keywords) -> Classification {
    let label = category_label.trim().to_lowercase();

    let tier = if contains_any(&label, &keywords.temperature) {
        if (36.0..=37.5).contains(&value) {
            SeverityTier::Normal
        } else if value > 37.5 && value <= 38.5 {
            SeverityTier::Caution
        } else {
            SeverityTier::Critical
        }
    } else if contains_any(&label, &keywords.heart) {
        if (60.0..=100.0).contains(&value) {
            SeverityTier::Normal
        } else if (value > 100.0 && value <= 120.0) || (50.0..60.0).contains(&value) {
            SeverityTier::Caution
        } else {
            SeverityTier::Critical
        }
    } else if contains_any(&label, &keywords.oxygen) {
        if value >= 95.0 {
            SeverityTier::Normal
        } else if (90.0..95.0).contains(&value) {
            SeverityTier::Caution
        } else {
            SeverityTier::Critical
        }
    } else {
        SeverityTier::Unknown
    };

    tier.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::DEFAULT_KEYWORDS;

    fn tier(label: &str, value: f64) -> SeverityTier {
        classify(label, value, &DEFAULT_KEYWORDS).tier
    }

    #[test]
    fn temperature_bands() {
        assert_eq!(tier("temp", 36.0), SeverityTier::Normal);
        assert_eq!(tier("temp", 37.5), SeverityTier::Normal);
        assert_eq!(tier("temp", 37.51), SeverityTier::Caution);
        assert_eq!(tier("temp", 38.5), SeverityTier::Caution);
        assert_eq!(tier("temp", 38.6), SeverityTier::Critical);
        assert_eq!(tier("temp", 35.9), SeverityTier::Critical);
    }

    #[test]
    fn heart_bands() {
        assert_eq!(tier("heart_rate", 60.0), SeverityTier::Normal);
        assert_eq!(tier("heart_rate", 100.0), SeverityTier::Normal);
        assert_eq!(tier("heart_rate", 100.1), SeverityTier::Caution);
        assert_eq!(tier("heart_rate", 120.0), SeverityTier::Caution);
        assert_eq!(tier("heart_rate", 120.1), SeverityTier::Critical);
        assert_eq!(tier("heart_rate", 59.9), SeverityTier::Caution);
        assert_eq!(tier("heart_rate", 50.0), SeverityTier::Caution);
        assert_eq!(tier("heart_rate", 49.9), SeverityTier::Critical);
    }

    #[test]
    fn oxygen_bands() {
        assert_eq!(tier("spo2", 95.0), SeverityTier::Normal);
        assert_eq!(tier("spo2", 94.9), SeverityTier::Caution);
        assert_eq!(tier("spo2", 90.0), SeverityTier::Caution);
        assert_eq!(tier("spo2", 89.9), SeverityTier::Critical);
        assert_eq!(tier("o2_saturation", 98.0), SeverityTier::Normal);
    }

    #[test]
    fn unmatched_label_is_unknown() {
        let c = classify("humidity", 50.0, &DEFAULT_KEYWORDS);
        assert_eq!(c.tier, SeverityTier::Unknown);
        assert_eq!(c.status, "Unknown");
        assert_eq!(c.tier.color(), "gray");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(tier("Body_Temp", 36.8), SeverityTier::Normal);
        assert_eq!(tier("SpO2", 97.0), SeverityTier::Normal);
    }

    #[test]
    fn group_priority_is_fixed() {
        // "temp" wins over the heart group even when both keywords appear
        assert_eq!(tier("temp_bpm", 36.5), SeverityTier::Normal);
        // 36.5 bpm would have been Critical for a heart reading
        assert_eq!(tier("bpm", 36.5), SeverityTier::Critical);
    }

    #[test]
    fn nan_never_classifies_as_healthy() {
        assert_eq!(tier("temp", f64::NAN), SeverityTier::Critical);
        assert_eq!(tier("heart_rate", f64::NAN), SeverityTier::Critical);
        assert_eq!(tier("spo2", f64::NAN), SeverityTier::Critical);
    }
}
