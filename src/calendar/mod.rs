//! Calendar collaborator contract.
//!
//! The app can export a forecast day as a calendar event. The event store
//! itself is a platform concern; this module defines only the payload shape
//! and the port the runtime implements. The core builds the payload, emits
//! it as an action, and never retries. A denied permission or a failed save
//! surfaces solely through the port's return value.

use crate::domain::error::Result;
use crate::domain::ForecastDay;
use chrono::{DateTime, Duration, Utc};

/// A calendar event payload built from one forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherEvent {
    /// Event title, `Weather: {summary}`.
    pub title: String,

    /// Event start, the forecast day's instant.
    pub starts_at: DateTime<Utc>,

    /// Event end, one hour after the start.
    pub ends_at: DateTime<Utc>,

    /// Notes line with the high, low, and precipitation chance.
    pub notes: String,
}

impl WeatherEvent {
    /// Builds the event payload for `day`.
    ///
    /// Temperatures and the precipitation percentage are truncated to whole
    /// numbers for the notes line.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use skygraph::calendar::WeatherEvent;
    /// use skygraph::domain::ForecastDay;
    ///
    /// let day = ForecastDay {
    ///     summary: "Scattered Showers".to_string(),
    ///     date: Utc::now(),
    ///     high: 72.6,
    ///     low: 58.2,
    ///     precip_chance: 0.45,
    /// };
    /// let event = WeatherEvent::from_day(&day);
    /// assert_eq!(event.title, "Weather: Scattered Showers");
    /// assert_eq!(event.notes, "High: 72°, Low: 58°, Chance of Rain: 45%");
    /// ```
    #[must_use]
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            title: format!("Weather: {}", day.summary),
            starts_at: day.date,
            ends_at: day.date + Duration::hours(1),
            notes: format!(
                "High: {}°, Low: {}°, Chance of Rain: {}%",
                day.high as i64,
                day.low as i64,
                (day.precip_chance * 100.0) as i64
            ),
        }
    }
}

/// Port to the platform calendar.
///
/// Implementations are expected to request write access on demand and report
/// the outcome of the save; the core takes no corrective action beyond not
/// creating the event.
pub trait CalendarPort {
    /// Requests write access to the event store.
    ///
    /// Returns `true` when access is granted.
    fn request_access(&mut self) -> bool;

    /// Creates one event in the user's default calendar.
    ///
    /// # Errors
    ///
    /// Returns an error when access is denied or the event store rejects the
    /// save.
    fn add_weather_event(&mut self, event: &WeatherEvent) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_spans_one_hour() {
        let day = ForecastDay {
            summary: "Sunny".to_string(),
            date: Utc::now(),
            high: 91.0,
            low: 74.0,
            precip_chance: 0.0,
        };
        let event = WeatherEvent::from_day(&day);
        assert_eq!(event.ends_at - event.starts_at, Duration::hours(1));
        assert_eq!(event.notes, "High: 91°, Low: 74°, Chance of Rain: 0%");
    }

    #[test]
    fn notes_truncate_fractional_values() {
        let day = ForecastDay {
            summary: "Rain".to_string(),
            date: Utc::now(),
            high: 60.9,
            low: 50.9,
            precip_chance: 0.879,
        };
        let event = WeatherEvent::from_day(&day);
        assert_eq!(event.notes, "High: 60°, Low: 50°, Chance of Rain: 87%");
    }
}
