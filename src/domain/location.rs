//! Location domain models and the trash wrapper.
//!
//! This module defines the core record types of the location lifecycle: the
//! weather snapshot ([`LocationModel`]), the saved-list entry
//! ([`LocationRecord`]), and the soft-deleted wrapper ([`TrashedLocation`])
//! with its 30-day retention rule. Expiry is always evaluated against an
//! explicit `now` instant supplied by the caller, so the rule is testable
//! without waiting on the wall clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of hourly temperature samples carried by every location.
pub const HOURLY_SAMPLES: usize = 8;

/// How long a trashed location is retained before it is eligible for the
/// expiry sweep: 30 days, in seconds.
pub const TRASH_RETENTION_SECS: i64 = 60 * 60 * 24 * 30;

/// A point-in-time weather snapshot for one city.
///
/// This is placeholder data in the same shape the app presents: a current
/// temperature plus a fixed run of [`HOURLY_SAMPLES`] hourly readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationModel {
    /// Display city name.
    pub city: String,

    /// Current temperature in degrees Fahrenheit.
    pub temp: i32,

    /// Human-readable condition text, e.g. `"Partly Cloudy"`.
    pub condition: String,

    /// Icon reference for the condition, e.g. `"cloud.sun.fill"`.
    pub weather_icon_name: String,

    /// Hourly temperature samples, oldest first. Always
    /// [`HOURLY_SAMPLES`] entries long.
    pub hourly_temps: Vec<i32>,
}

impl LocationModel {
    /// Creates a snapshot from its parts.
    pub fn new(
        city: impl Into<String>,
        temp: i32,
        condition: impl Into<String>,
        weather_icon_name: impl Into<String>,
        hourly_temps: Vec<i32>,
    ) -> Self {
        Self {
            city: city.into(),
            temp,
            condition: condition.into(),
            weather_icon_name: weather_icon_name.into(),
            hourly_temps,
        }
    }

    /// Returns the prominent advisory line shown on a location card.
    ///
    /// The derivation is a fixed priority chain over the snapshot: severe
    /// conditions first, then temperature extremes, then a humidity fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use skygraph::domain::LocationModel;
    ///
    /// let model = LocationModel::new("Orlando", 91, "Thunderstorm", "cloud.bolt.rain.fill",
    ///     vec![91, 88, 85, 83, 87, 90, 92, 89]);
    /// assert_eq!(model.headline(), "Severe Thunderstorm Risk: High");
    /// ```
    #[must_use]
    pub fn headline(&self) -> String {
        let condition = self.condition.to_lowercase();
        if condition.contains("thunderstorm") {
            "Severe Thunderstorm Risk: High".to_string()
        } else if condition.contains("fog") {
            "Visibility: Low".to_string()
        } else if self.temp > 100 {
            "Heat Advisory: Stay Hydrated".to_string()
        } else if condition.contains("rain") {
            "Rain Chance: 80%".to_string()
        } else if self.temp < 32 {
            "Freezing Risk: Take Care".to_string()
        } else {
            "Humidity: 78%".to_string()
        }
    }
}

/// Card presentation style for a saved location.
///
/// Serialized as the lowercase strings `"glass"`, `"neon"`, `"minimal"` in
/// the persisted blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    /// Translucent material card (default).
    #[default]
    Glass,
    /// High-contrast glow card.
    Neon,
    /// Flat, chrome-free card.
    Minimal,
}

/// One entry of the active saved-locations list.
///
/// Records are identified by a stable [`Uuid`] across edits, reorders, and
/// round trips through the trash. The single-home invariant (at most one
/// record with `is_user_location` set) is enforced by the store, not here:
/// the flag swap has to be atomic across the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Stable identity of the record.
    pub id: Uuid,

    /// Current weather snapshot for the city.
    pub model: LocationModel,

    /// Whether this is the user's home location.
    pub is_user_location: bool,

    /// Active weather alert banner, if any.
    pub alert_title: Option<String>,

    /// Card presentation style chosen in edit mode.
    #[serde(default)]
    pub card_style: CardStyle,
}

impl LocationRecord {
    /// Creates a record with a fresh id, no alert, and the default card style.
    #[must_use]
    pub fn new(model: LocationModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            model,
            is_user_location: false,
            alert_title: None,
            card_style: CardStyle::default(),
        }
    }
}

/// A soft-deleted location retained in the trash.
///
/// Wraps the removed [`LocationRecord`] together with the instant it was
/// moved to trash. Restoring converts back to the plain record, discarding
/// the timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashedLocation {
    /// Stable identity of the trash entry (matches the wrapped record's id).
    pub id: Uuid,

    /// The removed record, unchanged.
    pub location: LocationRecord,

    /// Instant the record was moved to trash.
    pub deleted_at: DateTime<Utc>,
}

impl TrashedLocation {
    /// Wraps a record removed from the active list, stamped at `deleted_at`.
    #[must_use]
    pub fn new(location: LocationRecord, deleted_at: DateTime<Utc>) -> Self {
        Self {
            id: location.id,
            location,
            deleted_at,
        }
    }

    /// Unwraps back into an active record, discarding the deletion stamp.
    #[must_use]
    pub fn into_location(self) -> LocationRecord {
        self.location
    }

    /// Whether the entry has been in the trash for more than 30 days as of
    /// `now`, making it eligible for the expiry sweep.
    ///
    /// The comparison is strict: an entry deleted exactly 30 days ago is not
    /// yet expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.deleted_at > Duration::seconds(TRASH_RETENTION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(city: &str, temp: i32, condition: &str) -> LocationModel {
        LocationModel::new(city, temp, condition, "sun.max.fill", vec![temp; HOURLY_SAMPLES])
    }

    #[test]
    fn headline_prefers_severe_conditions() {
        assert_eq!(
            model("Orlando", 91, "Thunderstorm").headline(),
            "Severe Thunderstorm Risk: High"
        );
        assert_eq!(model("SF", 55, "Dense Fog").headline(), "Visibility: Low");
        // Thunderstorm wins over the heat rule even above 100 degrees.
        assert_eq!(
            model("Phoenix", 104, "Thunderstorm").headline(),
            "Severe Thunderstorm Risk: High"
        );
    }

    #[test]
    fn headline_temperature_extremes_and_fallback() {
        assert_eq!(model("Phoenix", 104, "Sunny").headline(), "Heat Advisory: Stay Hydrated");
        assert_eq!(model("Fargo", 20, "Clear").headline(), "Freezing Risk: Take Care");
        assert_eq!(model("Seattle", 58, "Light Rain").headline(), "Rain Chance: 80%");
        assert_eq!(model("Cupertino", 68, "Partly Cloudy").headline(), "Humidity: 78%");
    }

    #[test]
    fn card_style_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CardStyle::Glass).unwrap(), "\"glass\"");
        assert_eq!(serde_json::to_string(&CardStyle::Neon).unwrap(), "\"neon\"");
        let style: CardStyle = serde_json::from_str("\"minimal\"").unwrap();
        assert_eq!(style, CardStyle::Minimal);
    }

    #[test]
    fn record_missing_card_style_defaults_to_glass() {
        // Blobs written before the style picker existed have no card_style field.
        let json = r#"{
            "id": "6f7cda81-8a3f-4e5f-9d35-8c2f4a9be111",
            "model": {
                "city": "Cupertino", "temp": 68, "condition": "Partly Cloudy",
                "weather_icon_name": "cloud.sun.fill",
                "hourly_temps": [68, 67, 66, 65, 66, 69, 72, 75]
            },
            "is_user_location": true,
            "alert_title": null
        }"#;
        let record: LocationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.card_style, CardStyle::Glass);
    }

    #[test]
    fn expiry_boundary() {
        let now = Utc::now();
        let record = LocationRecord::new(model("Cupertino", 68, "Clear"));

        let over = TrashedLocation::new(
            record.clone(),
            now - Duration::seconds(TRASH_RETENTION_SECS + 1),
        );
        assert!(over.is_expired(now));

        let under = TrashedLocation::new(record.clone(), now - Duration::days(29));
        assert!(!under.is_expired(now));

        // Exactly 30 days is still retained.
        let exact = TrashedLocation::new(record, now - Duration::seconds(TRASH_RETENTION_SECS));
        assert!(!exact.is_expired(now));
    }

    #[test]
    fn trash_round_trip_preserves_record() {
        let record = LocationRecord::new(model("Detroit", 84, "Sunny"));
        let original = record.clone();
        let trashed = TrashedLocation::new(record, Utc::now());
        assert_eq!(trashed.id, original.id);
        assert_eq!(trashed.into_location(), original);
    }
}
