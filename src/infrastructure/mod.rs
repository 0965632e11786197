//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides the platform seams the core depends on: where the
//! persisted blobs live on disk, and where "now" comes from.

pub mod clock;
pub mod paths;

pub use clock::{Clock, ManualClock, SystemClock};
pub use paths::get_data_dir;
