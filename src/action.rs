//! The fixed action catalogue.
//!
//! Each action carries a fixed energy cost, a fixed score reward, and a fixed
//! event description submitted to the advisory service. The descriptions are
//! the exact strings the original front end sent; the scripted advisor keys
//! on them, so they must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field operation the player can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Spend energy to push stability (and a little coherence) up.
    StabilizeField,

    /// Spend more energy to push coherence up at the cost of stability.
    InduceEntanglement,

    /// Recharge the core; erodes stability and coherence slightly.
    ChargeCore,
}

impl Action {
    /// All actions, in display order.
    pub const ALL: [Self; 3] = [Self::StabilizeField, Self::InduceEntanglement, Self::ChargeCore];

    /// Energy required before the action applies; below this it is a no-op.
    #[must_use]
    pub const fn energy_cost(self) -> i32 {
        match self {
            Self::StabilizeField => 10,
            Self::InduceEntanglement => 20,
            Self::ChargeCore => 0,
        }
    }

    /// Score granted when the action applies.
    #[must_use]
    pub const fn score_reward(self) -> u32 {
        match self {
            Self::StabilizeField => 10,
            Self::InduceEntanglement => 25,
            Self::ChargeCore => 15,
        }
    }

    /// The event description submitted to the advisory service.
    #[must_use]
    pub const fn event_description(self) -> &'static str {
        match self {
            Self::StabilizeField => "Quantum field stabilization attempt performed",
            Self::InduceEntanglement => "Quantum entanglement experiment performed",
            Self::ChargeCore => "Quantum core charging initiated",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StabilizeField => write!(f, "stabilize_field"),
            Self::InduceEntanglement => write!(f, "induce_entanglement"),
            Self::ChargeCore => write!(f, "charge_core"),
        }
    }
}
