//! Celestial body registry.
//!
//! An insertion-ordered mapping from body id to [`CelestialBody`]. Planets
//! are registered exactly once at startup; asteroid batches append later,
//! whenever normalized feed records arrive. Bodies are never removed or
//! reordered, so iteration order is stable for the simulation's lifetime.

use indexmap::IndexMap;

use crate::bodies::CelestialBody;
use crate::error::{OrreryError, OrreryResult};

/// The mutable collection of all simulated bodies.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: IndexMap<String, CelestialBody>,
}

impl BodyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a planet.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::DuplicateId`] if a body with the same id is
    /// already registered. The registry is unchanged on error.
    pub fn add_planet(&mut self, body: CelestialBody) -> OrreryResult<()> {
        if self.bodies.contains_key(&body.id) {
            return Err(OrreryError::duplicate_id(&body.id));
        }
        self.bodies.insert(body.id.clone(), body);
        Ok(())
    }

    /// Append a batch of normalized asteroids.
    ///
    /// The whole batch is checked before anything is inserted: a collision
    /// against the registry or within the batch fails the call and leaves
    /// the registry unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::DuplicateId`] naming the first colliding id.
    pub fn add_asteroids(&mut self, batch: Vec<CelestialBody>) -> OrreryResult<usize> {
        {
            let mut incoming = std::collections::HashSet::new();
            for body in &batch {
                if self.bodies.contains_key(&body.id) || !incoming.insert(body.id.as_str()) {
                    return Err(OrreryError::duplicate_id(&body.id));
                }
            }
        }

        let appended = batch.len();
        for body in batch {
            self.bodies.insert(body.id.clone(), body);
        }
        Ok(appended)
    }

    /// Number of registered bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry holds no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a body by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }

    /// Whether a body with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.bodies.contains_key(id)
    }

    /// Iterate bodies in insertion order. Lazy and restartable; read-only
    /// for the rendering collaborator.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.values()
    }

    /// Iterate bodies mutably, in insertion order. Membership cannot change
    /// through this iterator, only per-body mutable fields.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.values_mut()
    }
}

impl<'a> IntoIterator for &'a BodyRegistry {
    type Item = &'a CelestialBody;
    type IntoIter = indexmap::map::Values<'a, String, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.values()
    }
}
