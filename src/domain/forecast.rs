//! Daily forecast summary consumed by the calendar collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One day's forecast summary.
///
/// This is the contract shape handed to the calendar collaborator when the
/// user exports a forecast day as a calendar event. Temperatures are degrees
/// Fahrenheit; `precip_chance` is a fraction in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short condition summary, e.g. `"Scattered Showers"`.
    pub summary: String,

    /// Start of the forecast day.
    pub date: DateTime<Utc>,

    /// Daily high temperature.
    pub high: f64,

    /// Daily low temperature.
    pub low: f64,

    /// Chance of precipitation as a fraction.
    pub precip_chance: f64,
}
