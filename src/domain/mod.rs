//! Domain layer for the SkyGraph location core.
//!
//! This module contains the core domain types of the location lifecycle,
//! independent of storage or presentation concerns. It follows domain-driven
//! design principles by keeping the record shapes and the retention rule
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`location`]: Location records, the trash wrapper, and the expiry rule
//! - [`forecast`]: Daily forecast summary used by the calendar contract

pub mod error;
pub mod forecast;
pub mod location;

pub use error::{Result, SkygraphError};
pub use forecast::ForecastDay;
pub use location::{
    CardStyle, LocationModel, LocationRecord, TrashedLocation, HOURLY_SAMPLES,
    TRASH_RETENTION_SECS,
};
