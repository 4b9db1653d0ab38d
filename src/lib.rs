//! cgt-timeline: property ownership timeline engine.
//!
//! This crate provides the pure coordinate, zoom, marker, and
//! status-derivation logic behind a zoomable property-history timeline,
//! plus the owned application state a host UI drives. Rendering, form
//! handling, and pointer plumbing live in the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
