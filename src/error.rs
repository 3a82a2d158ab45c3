//! Error types for orrery.
//!
//! Data-quality defects in external feed records are never errors: the
//! normalizer resolves them with documented defaults. Only programming
//! contract violations (duplicate body ids, invalid parameters passed
//! directly) propagate as `Result`s, and nothing here terminates the
//! process.

use thiserror::Error;

/// Result type alias for orrery operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Unified error type for all orrery operations.
#[derive(Debug, Error)]
pub enum OrreryError {
    // ===== Registration Contract Violations =====
    /// A body with this id is already registered.
    #[error("duplicate body id '{id}': already registered")]
    DuplicateId {
        /// The colliding identifier.
        id: String,
    },

    /// Orbital parameters outside the closed-ellipse domain.
    #[error("invalid orbital parameters: {field} = {value}")]
    InvalidOrbit {
        /// Name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    // ===== Feed Errors =====
    /// The asteroid feed was unreachable or returned an error.
    ///
    /// Non-fatal: the simulation continues with zero asteroids.
    #[error("asteroid feed failure: {message}")]
    Feed {
        /// Transport-level failure description.
        message: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrreryError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a feed failure error.
    #[must_use]
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed {
            message: message.into(),
        }
    }

    /// Create a duplicate-id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Check if this error is fatal to a registration call.
    ///
    /// Registration errors leave the registry untouched; callers may
    /// report them and continue running the simulation.
    #[must_use]
    pub const fn is_registration_error(&self) -> bool {
        matches!(self, Self::DuplicateId { .. } | Self::InvalidOrbit { .. })
    }

    /// Check if this error is recoverable without operator action.
    ///
    /// A feed failure only costs the asteroid set; planets still simulate.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Feed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = OrreryError::duplicate_id("Earth");
        let msg = err.to_string();
        assert!(msg.contains("duplicate body id"));
        assert!(msg.contains("Earth"));
    }

    #[test]
    fn test_duplicate_id_is_registration_error() {
        let err = OrreryError::duplicate_id("Mars");
        assert!(err.is_registration_error());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_invalid_orbit_display() {
        let err = OrreryError::InvalidOrbit {
            field: "eccentricity",
            value: 1.2,
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid orbital parameters"));
        assert!(msg.contains("eccentricity"));
        assert!(msg.contains("1.2"));
        assert!(err.is_registration_error());
    }

    #[test]
    fn test_feed_is_recoverable() {
        let err = OrreryError::feed("connection refused");
        assert!(err.is_recoverable());
        assert!(!err.is_registration_error());
        let msg = err.to_string();
        assert!(msg.contains("asteroid feed failure"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_config_error() {
        let err = OrreryError::config("fast_forward_steps must be at least 1");
        assert!(!err.is_registration_error());
        assert!(!err.is_recoverable());
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OrreryError = io.into();
        assert!(matches!(err, OrreryError::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = OrreryError::duplicate_id("Venus");
        let debug = format!("{err:?}");
        assert!(debug.contains("DuplicateId"));
    }
}
