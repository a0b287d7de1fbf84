//! Bounded field resources.
//!
//! The three resources are clamped integers: mutation goes through the
//! `add_*` methods, so a value is never observable outside its range.

use serde::Serialize;

/// Lower bound shared by all three resources.
pub const RESOURCE_MIN: i32 = 0;

/// Upper bound for energy.
pub const ENERGY_MAX: i32 = 200;

/// Upper bound for stability.
pub const STABILITY_MAX: i32 = 100;

/// Upper bound for coherence.
pub const COHERENCE_MAX: i32 = 100;

/// Energy at session start.
pub const INITIAL_ENERGY: i32 = 100;

/// Stability at session start.
pub const INITIAL_STABILITY: i32 = 75;

/// Coherence at session start.
pub const INITIAL_COHERENCE: i32 = 50;

/// The three bounded quantities driving field classification.
///
/// Fields are private so the clamping invariant cannot be bypassed; the
/// snapshot serializes with plain `energy`/`stability`/`coherence` keys for
/// the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resources {
    energy: i32,
    stability: i32,
    coherence: i32,
}

impl Resources {
    /// The resource triple at session start.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            energy: INITIAL_ENERGY,
            stability: INITIAL_STABILITY,
            coherence: INITIAL_COHERENCE,
        }
    }

    /// Current energy, always in `[0, 200]`.
    #[must_use]
    pub const fn energy(&self) -> i32 {
        self.energy
    }

    /// Current stability, always in `[0, 100]`.
    #[must_use]
    pub const fn stability(&self) -> i32 {
        self.stability
    }

    /// Current coherence, always in `[0, 100]`.
    #[must_use]
    pub const fn coherence(&self) -> i32 {
        self.coherence
    }

    /// Shift energy by `delta`, clamping into `[0, 200]`.
    pub fn add_energy(&mut self, delta: i32) {
        self.energy = (self.energy + delta).clamp(RESOURCE_MIN, ENERGY_MAX);
    }

    /// Shift stability by `delta`, clamping into `[0, 100]`.
    pub fn add_stability(&mut self, delta: i32) {
        self.stability = (self.stability + delta).clamp(RESOURCE_MIN, STABILITY_MAX);
    }

    /// Shift coherence by `delta`, clamping into `[0, 100]`.
    pub fn add_coherence(&mut self, delta: i32) {
        self.coherence = (self.coherence + delta).clamp(RESOURCE_MIN, COHERENCE_MAX);
    }

    /// True once any resource has reached its floor.
    #[must_use]
    pub const fn depleted(&self) -> bool {
        self.energy <= 0 || self.stability <= 0 || self.coherence <= 0
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::initial()
    }
}
