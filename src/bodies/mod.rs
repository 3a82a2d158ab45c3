//! Celestial body data model.
//!
//! A [`CelestialBody`] is the mutable simulation entity: immutable orbital
//! descriptors plus a phase accumulator and its derived position. The only
//! mutation path is [`CelestialBody::advance_phase`], which keeps position
//! and phase consistent at every observable instant.

pub mod orbit;
pub mod planets;

use serde::{Deserialize, Serialize};

use crate::error::OrreryResult;
use orbit::{position_at, OrbitPoint, OrbitalParameters};

/// RGBA color, a presentation attribute with no simulation meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Neon warning red for potentially hazardous asteroids.
    pub const HAZARD: Self = Self::from_hex(0x00FF_073A);
    /// Neutral default for non-hazardous asteroids.
    pub const ASTEROID_NEUTRAL: Self = Self::WHITE;
}

/// Variant of a simulated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// One of the eight fixed planets.
    Planet,
    /// An ingested asteroid record.
    Asteroid,
}

/// One simulated body orbiting the sun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Stable identifier: name for planets, source record id for asteroids.
    pub id: String,
    /// Planet or asteroid.
    pub kind: BodyKind,
    /// Human-readable name for labels.
    pub display_name: String,
    /// Close-approach risk classification. Always false for planets.
    pub is_hazardous: bool,
    /// Presentation color.
    pub color: Color,
    /// Presentation radius.
    pub radius: f64,
    /// Immutable orbital descriptors.
    orbital: OrbitalParameters,
    /// Accumulated phase angle (radians). Monotonically increasing while
    /// the clock runs; frozen, never reset, while paused.
    phase: f64,
    /// Derived position, always `position_at(orbital, phase)`.
    position: OrbitPoint,
    /// Informational heliocentric distance, fixed at creation.
    distance_from_sun: f64,
}

impl CelestialBody {
    /// Construct a planet from validated raw parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::OrreryError::InvalidOrbit`] when the
    /// parameters do not describe a closed ellipse.
    pub fn planet(
        name: &str,
        color: Color,
        radius: f64,
        semi_major_axis: f64,
        eccentricity: f64,
        orbital_speed: f64,
    ) -> OrreryResult<Self> {
        let orbital = OrbitalParameters::new(semi_major_axis, eccentricity, orbital_speed)?;
        Ok(Self::with_orbital(
            name.to_string(),
            BodyKind::Planet,
            name.to_string(),
            false,
            color,
            radius,
            orbital,
        ))
    }

    /// Construct an asteroid from already-normalized parameters.
    #[must_use]
    pub fn asteroid(
        id: String,
        display_name: String,
        is_hazardous: bool,
        orbital: OrbitalParameters,
    ) -> Self {
        let color = if is_hazardous {
            Color::HAZARD
        } else {
            Color::ASTEROID_NEUTRAL
        };
        Self::with_orbital(
            id,
            BodyKind::Asteroid,
            display_name,
            is_hazardous,
            color,
            planets::ASTEROID_RADIUS,
            orbital,
        )
    }

    fn with_orbital(
        id: String,
        kind: BodyKind,
        display_name: String,
        is_hazardous: bool,
        color: Color,
        radius: f64,
        orbital: OrbitalParameters,
    ) -> Self {
        let position = position_at(&orbital, 0.0);
        let distance_from_sun = orbital.distance_from_sun();
        Self {
            id,
            kind,
            display_name,
            is_hazardous,
            color,
            radius,
            orbital,
            phase: 0.0,
            position,
            distance_from_sun,
        }
    }

    /// Orbital descriptors (immutable).
    #[must_use]
    pub const fn orbital(&self) -> &OrbitalParameters {
        &self.orbital
    }

    /// Current phase angle in radians.
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Current position in the orbital plane.
    #[must_use]
    pub const fn position(&self) -> OrbitPoint {
        self.position
    }

    /// Informational heliocentric distance.
    #[must_use]
    pub const fn distance_from_sun(&self) -> f64 {
        self.distance_from_sun
    }

    /// Advance phase by one orbital-speed increment and recompute position.
    pub fn advance_phase(&mut self) {
        self.phase += self.orbital.orbital_speed();
        self.position = position_at(&self.orbital, self.phase);
    }
}
