// src/keywords.rs

use once_cell::sync::Lazy;

/// Every keyword set the pipeline matches column labels against, in one
/// place. Role inference and health classification both read from the same
/// instance, so the two can never disagree about what counts as a
/// physiological column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    /// Substring matches marking a time axis ("time" already covers
    /// "timestamp"; both are kept so either can be dropped independently).
    pub time: Vec<String>,
    /// Exact matches for a latitude column.
    pub latitude: Vec<String>,
    /// Exact matches for a longitude column.
    pub longitude: Vec<String>,
    /// Substring matches for the temperature group.
    pub temperature: Vec<String>,
    /// Substring matches for the heart-rate group.
    pub heart: Vec<String>,
    /// Substring matches for the blood-oxygen group.
    pub oxygen: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            time: strings(&["time", "timestamp"]),
            latitude: strings(&["lat", "latitude"]),
            longitude: strings(&["lon", "long", "longitude", "lng"]),
            temperature: strings(&["temp"]),
            heart: strings(&["heart", "hr", "bpm", "pulse"]),
            oxygen: strings(&["spo2", "oxygen", "o2"]),
        }
    }
}

impl Keywords {
    /// Union of the three physiological groups. This is the set a column
    /// label is sniffed against when deciding whether it gets a summary
    /// card at all.
    pub fn parameter_keywords(&self) -> impl Iterator<Item = &str> {
        self.temperature
            .iter()
            .chain(&self.heart)
            .chain(&self.oxygen)
            .map(String::as_str)
    }

    /// True if `label` names a physiological parameter column.
    pub fn is_parameter(&self, label: &str) -> bool {
        self.parameter_keywords().any(|kw| label.contains(kw))
    }
}

/// True if `label` contains any of `set` as a substring.
pub(crate) fn contains_any(label: &str, set: &[String]) -> bool {
    set.iter().any(|kw| label.contains(kw.as_str()))
}

/// True if `label` equals any of `set` exactly.
pub(crate) fn equals_any(label: &str, set: &[String]) -> bool {
    set.iter().any(|kw| kw == label)
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Shared default set for call sites that don't inject their own.
pub static DEFAULT_KEYWORDS: Lazy<Keywords> = Lazy::new(Keywords::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_the_richer_variant() {
        let kw = Keywords::default();
        let params: Vec<&str> = kw.parameter_keywords().collect();
        for expected in ["temp", "heart", "hr", "spo2", "oxygen", "o2", "bpm", "pulse"] {
            assert!(params.contains(&expected), "missing keyword {expected}");
        }
    }

    #[test]
    fn parameter_sniffing_is_substring_based() {
        let kw = Keywords::default();
        assert!(kw.is_parameter("heartrate"));
        assert!(kw.is_parameter("body_temp_c"));
        // known permissive false positive, kept on purpose
        assert!(kw.is_parameter("temperature_room"));
        assert!(!kw.is_parameter("humidity"));
    }
}
