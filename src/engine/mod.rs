//! Step controller.
//!
//! [`OrreryEngine`] owns the only shared mutable state, the body registry,
//! together with the playback clock and the pending-ingest queue. All
//! mutation flows through `tick`, the `advance*` methods, and the
//! registration calls; the rendering collaborator only ever reads frames.
//!
//! Ticks are strictly sequential on one logical timeline: each tick first
//! applies every asteroid batch delivered since the previous tick, then, if
//! playing, advances every body by its own orbital speed.

pub mod clock;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::bodies::planets::PLANETS;
use crate::config::OrreryConfig;
use crate::error::OrreryResult;
use crate::ingest::{normalize_batch, FeedSink, IngestQueue};
use crate::registry::BodyRegistry;
use crate::render::BodySnapshot;
use clock::{PlaybackClock, PlaybackState};

/// The orbital simulation engine.
pub struct OrreryEngine {
    /// Static configuration.
    config: OrreryConfig,
    /// All simulated bodies, planets first.
    registry: BodyRegistry,
    /// Play/pause gate and tick counter.
    clock: PlaybackClock,
    /// Asteroid batches awaiting the next tick boundary.
    pending: Rc<RefCell<IngestQueue>>,
}

impl OrreryEngine {
    /// Create an engine with the eight planets registered.
    ///
    /// Planet registration happens exactly once, here; later feed arrivals
    /// append asteroids without rebuilding the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the planet table produces a duplicate id or an
    /// invalid orbit. That is a programming defect, not a runtime condition.
    pub fn new(config: OrreryConfig) -> OrreryResult<Self> {
        let mut registry = BodyRegistry::new();
        for spec in &PLANETS {
            registry.add_planet(spec.build()?)?;
        }

        let initial = if config.playback.start_paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };

        Ok(Self {
            config,
            registry,
            clock: PlaybackClock::new(initial),
            pending: Rc::new(RefCell::new(IngestQueue::default())),
        })
    }

    /// Engine configuration.
    #[must_use]
    pub const fn config(&self) -> &OrreryConfig {
        &self.config
    }

    /// Read-only view of the registry.
    #[must_use]
    pub const fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Playback clock state.
    #[must_use]
    pub const fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Handle for the external fetch collaborator. Cheap to clone; safe to
    /// outlive the engine.
    #[must_use]
    pub fn feed_sink(&self) -> FeedSink {
        FeedSink::new(Rc::downgrade(&self.pending))
    }

    /// Enqueue a resolved feed payload directly. Like
    /// [`FeedSink::deliver`], the batch becomes visible at the next tick.
    pub fn ingest_feed(&mut self, records: &[Value]) {
        let batch = normalize_batch(records);
        log::info!("asteroid feed delivered {} records", batch.len());
        self.pending.borrow_mut().push_batch(batch);
    }

    /// Apply all pending asteroid batches to the registry.
    ///
    /// A batch that fails the duplicate-id check is reported and dropped;
    /// the registry is never partially modified and playback continues.
    fn apply_pending(&mut self) {
        if self.pending.borrow().is_empty() {
            return;
        }
        let batches = self.pending.borrow_mut().drain();
        for batch in batches {
            match self.registry.add_asteroids(batch) {
                Ok(appended) => {
                    log::debug!("appended {appended} asteroids to the registry");
                }
                Err(err) => {
                    log::error!("dropping asteroid batch: {err}");
                }
            }
        }
    }

    /// Run one simulation tick.
    ///
    /// Invoked once per render frame, or per timer tick in a headless
    /// setting. Pending appends become visible first; bodies advance only
    /// while playing.
    pub fn tick(&mut self) {
        self.apply_pending();
        if self.clock.tick() {
            for body in self.registry.iter_mut() {
                body.advance_phase();
            }
        }
    }

    /// Perform exactly one extra phase step for every body, regardless of
    /// the play/pause state and without changing it.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Perform `steps` extra phase steps for every body.
    pub fn advance_by(&mut self, steps: u32) {
        for _ in 0..steps {
            for body in self.registry.iter_mut() {
                body.advance_phase();
            }
        }
    }

    /// Playback command: resume. Fire-and-forget; never fails.
    pub fn on_play(&mut self) {
        self.clock.play();
    }

    /// Playback command: pause. Fire-and-forget; never fails.
    pub fn on_pause(&mut self) {
        self.clock.pause();
    }

    /// Playback command: fast-forward by the configured number of steps.
    /// Fire-and-forget; never fails and never changes the play/pause state.
    pub fn on_forward(&mut self) {
        self.advance_by(self.config.playback.fast_forward_steps);
    }

    /// Read-only per-tick frame for the rendering collaborator, in
    /// insertion order.
    #[must_use]
    pub fn frame(&self) -> Vec<BodySnapshot> {
        self.registry.iter().map(BodySnapshot::from).collect()
    }
}

impl std::fmt::Debug for OrreryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrreryEngine")
            .field("bodies", &self.registry.len())
            .field("clock", &self.clock)
            .field("pending_batches", &self.pending.borrow().batches_received())
            .finish()
    }
}
