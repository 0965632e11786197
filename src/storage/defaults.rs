//! First-run seed data.
//!
//! When the saved-locations slot is missing, malformed, or empty, the store
//! substitutes this fixed three-city seed so the app never starts blank.

use crate::domain::{LocationModel, LocationRecord};

/// Returns the default saved-locations list.
///
/// Three cities with placeholder weather: the first is flagged as the user's
/// home location, the other two carry active severe-weather alerts.
#[must_use]
pub fn default_locations() -> Vec<LocationRecord> {
    let mut cupertino = LocationRecord::new(LocationModel::new(
        "Cupertino",
        68,
        "Partly Cloudy",
        "cloud.sun.fill",
        vec![68, 67, 66, 65, 66, 69, 72, 75],
    ));
    cupertino.is_user_location = true;

    let mut detroit = LocationRecord::new(LocationModel::new(
        "Detroit",
        84,
        "Sunny",
        "sun.max.fill",
        vec![84, 87, 90, 92, 88, 83, 81, 79],
    ));
    detroit.alert_title = Some("Severe Thunderstorm Warning".to_string());

    let mut orlando = LocationRecord::new(LocationModel::new(
        "Orlando",
        91,
        "Thunderstorm",
        "cloud.bolt.rain.fill",
        vec![91, 88, 85, 83, 87, 90, 92, 89],
    ));
    orlando.alert_title = Some("Tornado Warning".to_string());

    vec![cupertino, detroit, orlando]
}
