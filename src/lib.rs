//! # orrery
//!
//! Deterministic orbital simulation engine for an interactive solar-system
//! model: a sun, eight planets on stylized elliptical orbits, and a variable
//! set of asteroid bodies ingested from an external data feed, advancing in
//! simulated time under play/pause control.
//!
//! The crate is headless by design. Scene construction, meshes, labels, and
//! the network client that fetches the raw asteroid dataset are external
//! collaborators: the engine consumes the feed's resolved payload and
//! produces read-only per-tick frames for the renderer.
//!
//! ## Example
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let config = OrreryConfig::builder().fast_forward_steps(10).build();
//! let mut engine = OrreryEngine::new(config).expect("planet table is valid");
//!
//! // One render frame: advance every body by its orbital speed.
//! engine.tick();
//!
//! for body in engine.frame() {
//!     println!("{} at ({:.2}, {:.2})", body.display_name, body.position.x, body.position.z);
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod bodies;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod registry;
pub mod render;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bodies::orbit::{position_at, OrbitPoint, OrbitalParameters};
    pub use crate::bodies::{BodyKind, CelestialBody, Color};
    pub use crate::config::{OrreryConfig, OrreryConfigBuilder};
    pub use crate::engine::clock::{PlaybackClock, PlaybackState};
    pub use crate::engine::OrreryEngine;
    pub use crate::error::{OrreryError, OrreryResult};
    pub use crate::ingest::FeedSink;
    pub use crate::registry::BodyRegistry;
    pub use crate::render::BodySnapshot;
}

/// Re-export for public API
pub use error::{OrreryError, OrreryResult};
