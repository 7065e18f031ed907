//! Library gateway for the AquaSense dashboard backend.
//!
//! Follows the Explicit Module Boundary Pattern (EMBP): sibling modules
//! import shared types from `crate::` via the re-exports below instead of
//! reaching into each other, so individual modules can be refactored without
//! the rest of the tree knowing their internals. The integration tests mount
//! the same router through this gateway.

pub mod config;
pub mod controller;
pub mod error;
pub mod generator;
pub mod models;
pub mod refresh;
pub mod registry;
pub mod routes;
pub mod seed;

pub use config::Config;
pub use controller::{Controller, StateSnapshot};
pub use error::StateError;
pub use generator::{health_score, MockReadingSource, ReadingSource, SourceArchetype};
pub use models::{Alert, DeviceConfig, Profile, Severity, SourceInfo, SourceStatus, WaterData};
pub use refresh::RefreshTask;
pub use registry::{AlertRegistry, SourceRegistry};
