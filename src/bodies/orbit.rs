//! Keplerian orbit parametrization and the position update algorithm.
//!
//! Orbits are stylized 2D ellipses in a single plane with the sun at one
//! focus. Phase advances at a constant rate per tick; no angular-velocity
//! correction for true Keplerian motion is applied. That simplification is
//! load-bearing: renderers and replay checks rely on positions being an
//! exact closed-form function of phase.

use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, OrreryResult};

/// Scale factor from semi-major-axis units to the informational
/// distance-from-sun figure (1 unit ≈ 149.6 Gm).
pub const DISTANCE_SCALE: f64 = 149.6;

/// A point in the orbital plane.
///
/// The plane is spanned by x and z; y is identically zero and omitted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrbitPoint {
    /// X coordinate (along the ellipse's major axis).
    pub x: f64,
    /// Z coordinate.
    pub z: f64,
}

impl OrbitPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Origin of the model (the sun's position).
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, z: 0.0 }
    }

    /// Distance from the model origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

/// Immutable Keplerian descriptors for one body.
///
/// Assigned at body creation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Semi-major axis, in scaled distance units. Strictly positive.
    semi_major_axis: f64,
    /// Eccentricity in `[0, 1)`: 0 is a circle, approaching 1 elongates.
    eccentricity: f64,
    /// Phase increment per simulation tick (radians/tick). Strictly positive.
    orbital_speed: f64,
}

impl OrbitalParameters {
    /// Create validated orbital parameters.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidOrbit`] if `semi_major_axis` or
    /// `orbital_speed` is not strictly positive, if `eccentricity` lies
    /// outside `[0, 1)`, or if any value is non-finite. Degenerate
    /// geometry is rejected here rather than surfacing at render time.
    pub fn new(semi_major_axis: f64, eccentricity: f64, orbital_speed: f64) -> OrreryResult<Self> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrreryError::InvalidOrbit {
                field: "semi_major_axis",
                value: semi_major_axis,
            });
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(OrreryError::InvalidOrbit {
                field: "eccentricity",
                value: eccentricity,
            });
        }
        if !orbital_speed.is_finite() || orbital_speed <= 0.0 {
            return Err(OrreryError::InvalidOrbit {
                field: "orbital_speed",
                value: orbital_speed,
            });
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            orbital_speed,
        })
    }

    /// Construct without validation. Only for callers that have already
    /// sanitized every field into the valid domain.
    pub(crate) const fn new_unchecked(
        semi_major_axis: f64,
        eccentricity: f64,
        orbital_speed: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            orbital_speed,
        }
    }

    /// Semi-major axis in scaled distance units.
    #[must_use]
    pub const fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Eccentricity in `[0, 1)`.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Phase increment per tick (radians/tick).
    #[must_use]
    pub const fn orbital_speed(&self) -> f64 {
        self.orbital_speed
    }

    /// Informational heliocentric distance, `semi_major_axis * DISTANCE_SCALE`.
    #[must_use]
    pub fn distance_from_sun(&self) -> f64 {
        self.semi_major_axis * DISTANCE_SCALE
    }

    /// Semi-minor axis, `a * sqrt(1 - e^2)`.
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }
}

/// Position of a body at the given phase angle.
///
/// Shifted-center parametrization of an ellipse with the sun at one focus:
/// the ellipse's geometric center is offset by `-a * e` along x, so
/// `x = a * (cos(phase) - e)` and `z = a * sin(phase)`.
///
/// Deterministic and side-effect free: identical input yields identical
/// output, independent of any render loop.
#[must_use]
pub fn position_at(params: &OrbitalParameters, phase: f64) -> OrbitPoint {
    let a = params.semi_major_axis();
    let e = params.eccentricity();
    OrbitPoint {
        x: a * (phase.cos() - e),
        z: a * phase.sin(),
    }
}

/// Sample the full orbit ellipse as a closed polyline for the renderer.
///
/// Returns `segments + 1` points; the first and last coincide so the
/// path closes. Every point satisfies the same parametrization as
/// [`position_at`].
#[must_use]
pub fn orbit_path(params: &OrbitalParameters, segments: usize) -> Vec<OrbitPoint> {
    let segments = segments.max(3);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let phase = std::f64::consts::TAU * (i as f64) / (segments as f64);
        points.push(position_at(params, phase));
    }
    points
}
