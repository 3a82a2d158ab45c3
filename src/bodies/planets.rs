//! Fixed planet table and sun presentation constants.
//!
//! Parameters are stylized for a readable scene, not astronomically exact:
//! semi-major axes compress the outer system and orbital speeds are phase
//! increments per tick rather than mean motions. Eccentricities are the
//! real ones.

use crate::bodies::{CelestialBody, Color};
use crate::error::OrreryResult;

/// Number of planets in the fixed table.
pub const PLANET_COUNT: usize = 8;

/// Sun presentation radius. The sun sits at the model origin and is not a
/// registry body.
pub const SUN_RADIUS: f64 = 5.0;
/// Sun presentation color.
pub const SUN_COLOR: Color = Color::from_hex(0x00FF_FF00);

/// Presentation radius shared by all ingested asteroids.
pub const ASTEROID_RADIUS: f64 = 0.5;

/// Static descriptor for one planet.
#[derive(Debug, Clone, Copy)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub color: Color,
    pub radius: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub orbital_speed: f64,
}

/// The eight planets, in heliocentric order.
pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec {
        name: "Mercury",
        color: Color::from_hex(0x0080_8080), // Grey
        radius: 0.5,
        semi_major_axis: 6.0,
        eccentricity: 0.205,
        orbital_speed: 0.04,
    },
    PlanetSpec {
        name: "Venus",
        color: Color::from_hex(0x00FF_D700), // Golden yellow
        radius: 0.8,
        semi_major_axis: 10.0,
        eccentricity: 0.007,
        orbital_speed: 0.03,
    },
    PlanetSpec {
        name: "Earth",
        color: Color::from_hex(0x0000_FF00), // Green
        radius: 1.0,
        semi_major_axis: 15.0,
        eccentricity: 0.017,
        orbital_speed: 0.02,
    },
    PlanetSpec {
        name: "Mars",
        color: Color::from_hex(0x00FF_0000), // Red
        radius: 0.6,
        semi_major_axis: 20.0,
        eccentricity: 0.093,
        orbital_speed: 0.015,
    },
    PlanetSpec {
        name: "Jupiter",
        color: Color::from_hex(0x00FF_A500), // Orange
        radius: 2.0,
        semi_major_axis: 30.0,
        eccentricity: 0.049,
        orbital_speed: 0.008,
    },
    PlanetSpec {
        name: "Saturn",
        color: Color::from_hex(0x00FF_FF00), // Yellow
        radius: 1.7,
        semi_major_axis: 40.0,
        eccentricity: 0.056,
        orbital_speed: 0.006,
    },
    PlanetSpec {
        name: "Uranus",
        color: Color::from_hex(0x0000_FFFF), // Cyan
        radius: 1.5,
        semi_major_axis: 55.0,
        eccentricity: 0.046,
        orbital_speed: 0.004,
    },
    PlanetSpec {
        name: "Neptune",
        color: Color::from_hex(0x0000_00FF), // Blue
        radius: 1.4,
        semi_major_axis: 70.0,
        eccentricity: 0.010,
        orbital_speed: 0.003,
    },
];

impl PlanetSpec {
    /// Build the simulation entity for this planet.
    ///
    /// # Errors
    ///
    /// Returns an error if the table entry does not describe a closed
    /// ellipse. The fixed table always validates; the `Result` keeps the
    /// construction path uniform with direct callers.
    pub fn build(&self) -> OrreryResult<CelestialBody> {
        CelestialBody::planet(
            self.name,
            self.color,
            self.radius,
            self.semi_major_axis,
            self.eccentricity,
            self.orbital_speed,
        )
    }
}
