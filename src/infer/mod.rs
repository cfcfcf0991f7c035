// src/infer/mod.rs

use serde::Serialize;
use tracing::debug;

use crate::keywords::{contains_any, equals_any, Keywords};

/// Semantic purpose guessed for a column from its (already normalized)
/// label text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    Time,
    Latitude,
    Longitude,
    Parameter,
    Unclassified,
}

/// Result of role inference over one table's labels.
///
/// `parameters` keeps original column order; the first entry is the
/// primary parameter, the one that drives map coloring. That first-match
/// tie-break is deliberate policy: changing it would silently change
/// which reading colors the trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnRoles {
    pub time: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub parameters: Vec<String>,
}

impl ColumnRoles {
    /// The column whose per-row values color the geographic trail.
    pub fn primary_parameter(&self) -> Option<&str> {
        self.parameters.first().map(String::as_str)
    }

    /// True when every role needed for the animated trail is present.
    pub fn supports_geo_trail(&self) -> bool {
        self.time.is_some()
            && self.latitude.is_some()
            && self.longitude.is_some()
            && self.primary_parameter().is_some()
    }
}

/// Classify a single normalized label.
///
/// Time and parameter keywords match as substrings — permissive on
/// purpose, so "temperature_room" counts as a temperature column; that
/// inherited false-positive risk is documented rather than fixed.
/// Latitude and longitude require exact label equality.
pub fn role_of(label: &str, keywords: &Keywords) -> ColumnRole {
    if contains_any(label, &keywords.time) {
        ColumnRole::Time
    } else if equals_any(label, &keywords.latitude) {
        ColumnRole::Latitude
    } else if equals_any(label, &keywords.longitude) {
        ColumnRole::Longitude
    } else if keywords.is_parameter(label) {
        ColumnRole::Parameter
    } else {
        ColumnRole::Unclassified
    }
}

/// Infer the role map for a whole label set, first match winning per
/// role.
pub fn infer_roles(labels: &[String], keywords: &Keywords) -> ColumnRoles {
    let mut roles = ColumnRoles::default();

    for label in labels {
        if roles.time.is_none() && contains_any(label, &keywords.time) {
            roles.time = Some(label.clone());
        }
        if roles.latitude.is_none() && equals_any(label, &keywords.latitude) {
            roles.latitude = Some(label.clone());
        }
        if roles.longitude.is_none() && equals_any(label, &keywords.longitude) {
            roles.longitude = Some(label.clone());
        }
        if keywords.is_parameter(label) {
            roles.parameters.push(label.clone());
        }
    }

    debug!(
        time = ?roles.time,
        latitude = ?roles.latitude,
        longitude = ?roles.longitude,
        parameters = roles.parameters.len(),
        "inferred column roles"
    );

    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::DEFAULT_KEYWORDS;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn infers_the_canonical_gps_layout() {
        let roles = infer_roles(
            &labels(&["timestamp", "lat", "lon", "heartrate"]),
            &DEFAULT_KEYWORDS,
        );
        assert_eq!(roles.time.as_deref(), Some("timestamp"));
        assert_eq!(roles.latitude.as_deref(), Some("lat"));
        assert_eq!(roles.longitude.as_deref(), Some("lon"));
        assert_eq!(roles.parameters, vec!["heartrate"]);
        assert_eq!(roles.primary_parameter(), Some("heartrate"));
        assert!(roles.supports_geo_trail());
    }

    #[test]
    fn lat_lon_require_exact_labels() {
        let roles = infer_roles(&labels(&["latitude_deg", "longitudes"]), &DEFAULT_KEYWORDS);
        assert_eq!(roles.latitude, None);
        assert_eq!(roles.longitude, None);
        assert!(!roles.supports_geo_trail());
    }

    #[test]
    fn first_parameter_in_column_order_is_primary() {
        let roles = infer_roles(
            &labels(&["time", "spo2", "body_temp", "pulse"]),
            &DEFAULT_KEYWORDS,
        );
        assert_eq!(roles.parameters, vec!["spo2", "body_temp", "pulse"]);
        assert_eq!(roles.primary_parameter(), Some("spo2"));
    }

    #[test]
    fn substring_matching_stays_permissive() {
        assert_eq!(
            role_of("temperature_room", &DEFAULT_KEYWORDS),
            ColumnRole::Parameter
        );
        assert_eq!(role_of("uptime", &DEFAULT_KEYWORDS), ColumnRole::Time);
        assert_eq!(role_of("humidity", &DEFAULT_KEYWORDS), ColumnRole::Unclassified);
    }

    #[test]
    fn custom_keywords_drive_inference() {
        let mut kw = Keywords::default();
        kw.heart = vec!["cardiac".into()];
        let roles = infer_roles(&labels(&["cardiac_output", "pulse"]), &kw);
        // "pulse" dropped from the heart group, "cardiac" added
        assert_eq!(roles.parameters, vec!["cardiac_output"]);
    }
}
