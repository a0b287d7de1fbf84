//! Field classification and the full simulation state.
//!
//! Classification is a pure function of the clamped resource triple,
//! evaluated in fixed priority order. `SimulationState` owns the resources,
//! the score counter, and the terminal latch; it is mutated only through
//! [`SimulationState::apply`] and [`SimulationState::reset`].

use std::fmt;

use serde::Serialize;

use crate::action::Action;
use crate::resource::Resources;

/// Stability below this classifies the field as critical.
pub const CRITICAL_STABILITY: i32 = 25;

/// Coherence below this classifies the field as unstable.
pub const UNSTABLE_COHERENCE: i32 = 30;

/// Energy above this classifies the field as superposition.
pub const SUPERPOSITION_ENERGY: i32 = 150;

/// Dialog title shown by the presentation layer when the field collapses.
pub const COLLAPSE_TITLE: &str = "Game Over";

/// Dialog description shown by the presentation layer when the field collapses.
pub const COLLAPSE_DESCRIPTION: &str =
    "Critical system failure! Your quantum field has collapsed.";

/// The derived categorical state of the quantum field.
///
/// Serializes as the lowercase string union the original front end renders
/// (`"stable"`, `"unstable"`, `"critical"`, `"superposition"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    /// All resources in their comfortable bands.
    Stable,

    /// Coherence has dropped below the unstable threshold.
    Unstable,

    /// Stability has dropped below the critical threshold.
    Critical,

    /// Energy has climbed above the superposition threshold.
    Superposition,
}

impl FieldState {
    /// Classify the field from the clamped resource triple.
    ///
    /// The branches are priority-ordered; the first match wins. Criticality
    /// outranks instability, which outranks superposition.
    #[must_use]
    pub const fn classify(resources: &Resources) -> Self {
        if resources.stability() < CRITICAL_STABILITY {
            Self::Critical
        } else if resources.coherence() < UNSTABLE_COHERENCE {
            Self::Unstable
        } else if resources.energy() > SUPERPOSITION_ENERGY {
            Self::Superposition
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "stable"),
            Self::Unstable => write!(f, "unstable"),
            Self::Critical => write!(f, "critical"),
            Self::Superposition => write!(f, "superposition"),
        }
    }
}

/// Full snapshot of one simulation session.
///
/// Fields are private so the invariants hold by construction: resources are
/// always clamped, `field_state` is always the classification of the current
/// triple, `score` only grows, and `terminal` stays latched until reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    resources: Resources,
    score: u32,
    field_state: FieldState,
    terminal: bool,
}

impl SimulationState {
    /// The state at session start: (100, 75, 50), score 0, stable, live.
    #[must_use]
    pub fn initial() -> Self {
        let resources = Resources::initial();
        Self {
            field_state: FieldState::classify(&resources),
            resources,
            score: 0,
            terminal: false,
        }
    }

    /// Current resource triple.
    #[must_use]
    pub const fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Current field classification.
    #[must_use]
    pub const fn field_state(&self) -> FieldState {
        self.field_state
    }

    /// True once any resource has depleted; cleared only by [`Self::reset`].
    #[must_use]
    pub const fn terminal(&self) -> bool {
        self.terminal
    }

    /// Apply an action's fixed deltas.
    ///
    /// Returns `true` when the deltas were applied. A terminal session or an
    /// unmet energy precondition yields `false` with the state unchanged;
    /// classification is recomputed either way (a no-op cannot change it).
    pub fn apply(&mut self, action: Action) -> bool {
        if self.terminal || self.resources.energy() < action.energy_cost() {
            self.reclassify();
            return false;
        }

        match action {
            Action::StabilizeField => {
                self.resources.add_energy(-10);
                self.resources.add_stability(15);
                self.resources.add_coherence(5);
            }
            Action::InduceEntanglement => {
                self.resources.add_energy(-20);
                self.resources.add_coherence(20);
                self.resources.add_stability(-10);
            }
            Action::ChargeCore => {
                self.resources.add_energy(30);
                self.resources.add_stability(-5);
                self.resources.add_coherence(-5);
            }
        }
        self.score += action.score_reward();

        if self.resources.depleted() {
            self.terminal = true;
            log::info!("field collapsed after {action}: {:?}", self.resources);
        }
        self.reclassify();
        true
    }

    /// Restore the initial state unconditionally.
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    fn reclassify(&mut self) {
        self.field_state = FieldState::classify(&self.resources);
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial()
    }
}
