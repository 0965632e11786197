//! Observability support.
//!
//! The core instruments every lifecycle operation with `tracing` spans.
//! This module provides the optional subscriber setup for embedders that
//! want those spans rendered.

pub mod init;

pub use init::init_tracing;
