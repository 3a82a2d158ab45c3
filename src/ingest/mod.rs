//! Asteroid feed ingestion.
//!
//! The network client that fetches the raw dataset lives outside this
//! crate; what arrives here is its resolved payload, a collection of
//! loosely-typed JSON mappings, or its failure. Normalization is total:
//! a record missing every usable field still becomes an asteroid with the
//! documented defaults, so partial or malformed external data can never
//! block simulation startup.
//!
//! Feeds disagree on field names. One convention spells out
//! `semi_major_axis` / `eccentricity` and a boolean
//! `is_potentially_hazardous_asteroid`; another abbreviates to `a` / `e`
//! with a `pha` flag of `"Y"` / `"N"`. Both are accepted, and numeric
//! fields may arrive as JSON numbers or numeric strings.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Display;
use std::rc::Weak;

use log::{debug, info, warn};
use serde_json::Value;

use crate::bodies::orbit::OrbitalParameters;
use crate::bodies::CelestialBody;

/// Default semi-major axis when a record carries none.
pub const FALLBACK_SEMI_MAJOR_AXIS: f64 = 50.0;
/// Default eccentricity when a record carries none.
pub const FALLBACK_ECCENTRICITY: f64 = 0.5;
/// Phase increment per tick shared by all asteroids; never read from the
/// record.
pub const ASTEROID_ORBITAL_SPEED: f64 = 0.002;

const SEMI_MAJOR_AXIS_KEYS: [&str; 2] = ["semi_major_axis", "a"];
const ECCENTRICITY_KEYS: [&str; 2] = ["eccentricity", "e"];
const ID_KEYS: [&str; 6] = [
    "id",
    "neo_reference_id",
    "spkid",
    "des",
    "designation",
    "name",
];

/// Parse a JSON value as f64, accepting numbers and numeric strings.
fn parse_numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First parseable numeric among the candidate keys.
fn numeric_field(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find_map(parse_numeric)
}

/// Interpret a hazard indicator: JSON bool, `"true"`/`"false"`, or the
/// single-character `"Y"`/`"N"` flag (case-insensitive).
fn parse_hazard(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" => Some(true),
            "n" | "no" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Extract the source identifier, stringifying numeric ids.
fn source_id(record: &Value) -> Option<String> {
    ID_KEYS.iter().filter_map(|key| record.get(key)).find_map(|v| match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Normalize one raw feed record into an asteroid body.
///
/// Total function: malformed fields degrade to documented defaults and a
/// record with no identifier gets a synthetic `asteroid-<ordinal>` id from
/// its position in the batch.
#[must_use]
pub fn normalize_record(record: &Value, ordinal: usize) -> CelestialBody {
    let semi_major_axis = numeric_field(record, &SEMI_MAJOR_AXIS_KEYS)
        .filter(|a| a.is_finite() && *a > 0.0)
        .unwrap_or(FALLBACK_SEMI_MAJOR_AXIS);

    let eccentricity = numeric_field(record, &ECCENTRICITY_KEYS)
        .filter(|e| e.is_finite() && (0.0..1.0).contains(e))
        .unwrap_or(FALLBACK_ECCENTRICITY);

    let is_hazardous = record
        .get("is_potentially_hazardous_asteroid")
        .or_else(|| record.get("pha"))
        .and_then(parse_hazard)
        .unwrap_or(false);

    let id = source_id(record).unwrap_or_else(|| format!("asteroid-{ordinal}"));
    let display_name = format!("Asteroid ({id})");

    // Sanitized above, so validation cannot fail
    let orbital = OrbitalParameters::new(semi_major_axis, eccentricity, ASTEROID_ORBITAL_SPEED)
        .unwrap_or_else(|_| {
            OrbitalParameters::new_unchecked(
                FALLBACK_SEMI_MAJOR_AXIS,
                FALLBACK_ECCENTRICITY,
                ASTEROID_ORBITAL_SPEED,
            )
        });

    CelestialBody::asteroid(id, display_name, is_hazardous, orbital)
}

/// Normalize a whole payload, assigning batch ordinals for id fallback.
#[must_use]
pub fn normalize_batch(records: &[Value]) -> Vec<CelestialBody> {
    records
        .iter()
        .enumerate()
        .map(|(ordinal, record)| normalize_record(record, ordinal))
        .collect()
}

/// Pending asteroid batches, drained at tick boundaries.
///
/// The queue is the only rendezvous between the asynchronous fetch
/// completion and the strictly sequential tick loop: a batch enqueued
/// during tick N is appended before tick N+1 advances any body.
#[derive(Debug, Default)]
pub(crate) struct IngestQueue {
    batches: VecDeque<Vec<CelestialBody>>,
    batches_received: u64,
    failures: u64,
}

impl IngestQueue {
    pub(crate) fn push_batch(&mut self, batch: Vec<CelestialBody>) {
        self.batches_received += 1;
        self.batches.push_back(batch);
    }

    pub(crate) fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub(crate) fn drain(&mut self) -> Vec<Vec<CelestialBody>> {
        self.batches.drain(..).collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub(crate) const fn batches_received(&self) -> u64 {
        self.batches_received
    }

    pub(crate) const fn failures(&self) -> u64 {
        self.failures
    }
}

/// Hand-off point for the external fetch collaborator.
///
/// Holds only a weak reference to the engine's pending queue: completing a
/// fetch after the simulation has been torn down is a logged no-op, never
/// a fault.
#[derive(Debug, Clone)]
pub struct FeedSink {
    queue: Weak<RefCell<IngestQueue>>,
}

impl FeedSink {
    pub(crate) const fn new(queue: Weak<RefCell<IngestQueue>>) -> Self {
        Self { queue }
    }

    /// Deliver a resolved payload. Normalized immediately; appended to the
    /// registry at the next tick boundary.
    pub fn deliver(&self, records: &[Value]) {
        match self.queue.upgrade() {
            Some(queue) => {
                let batch = normalize_batch(records);
                info!("asteroid feed delivered {} records", batch.len());
                queue.borrow_mut().push_batch(batch);
            }
            None => {
                debug!(
                    "asteroid feed resolved after engine teardown; dropping {} records",
                    records.len()
                );
            }
        }
    }

    /// Report that the fetch failed. The simulation continues with
    /// whatever bodies it already has.
    pub fn fail(&self, reason: impl Display) {
        warn!("asteroid feed failure: {reason}; planets continue without asteroids");
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().record_failure();
        }
    }

    /// Whether the engine behind this sink is still alive.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.queue.strong_count() > 0
    }
}
