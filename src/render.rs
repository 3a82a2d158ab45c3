//! Rendering boundary.
//!
//! The graphics collaborator consumes one [`BodySnapshot`] per body per
//! tick and is solely responsible for meshes, orbit-path curves, labels,
//! and the camera. Nothing flows back: snapshots are plain data detached
//! from the registry.

use serde::{Deserialize, Serialize};

use crate::bodies::orbit::OrbitPoint;
use crate::bodies::{BodyKind, CelestialBody, Color};

/// Read-only view of one body for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    /// Stable body identifier.
    pub id: String,
    /// Planet or asteroid.
    pub kind: BodyKind,
    /// Label text.
    pub display_name: String,
    /// Hazard classification, drives warning styling.
    pub is_hazardous: bool,
    /// Presentation color.
    pub color: Color,
    /// Presentation radius.
    pub radius: f64,
    /// Current position in the orbital plane.
    pub position: OrbitPoint,
    /// Informational heliocentric distance.
    pub distance_from_sun: f64,
}

impl From<&CelestialBody> for BodySnapshot {
    fn from(body: &CelestialBody) -> Self {
        Self {
            id: body.id.clone(),
            kind: body.kind,
            display_name: body.display_name.clone(),
            is_hazardous: body.is_hazardous,
            color: body.color,
            radius: body.radius,
            position: body.position(),
            distance_from_sun: body.distance_from_sun(),
        }
    }
}
