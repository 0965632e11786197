//! Presentation adapter layer.
//!
//! Read-only projections of application state for the platform view layer.
//! All mutation routes back through the event handler; nothing here touches
//! the store.

pub mod viewmodel;

pub use viewmodel::{
    LocationItem, LocationsViewModel, TrashItem, TrashViewModel, UndoBannerInfo,
};
