//! # Quantex - Quantum Explorer Simulation Core
//!
//! Quantex is the deterministic resource-management core of the Quantum
//! Explorer mini-game. The player manipulates a quantum field through three
//! fixed actions; each action shifts three bounded resources (energy,
//! stability, coherence), the field is reclassified from resource thresholds
//! after every mutation, and the session ends when any resource depletes.
//!
//! ## Core Concepts
//!
//! - **Resources**: the three clamped integer quantities driving the field
//! - **FieldState**: the derived classification (stable, unstable, critical,
//!   superposition), recomputed after every mutation and never set directly
//! - **Action**: one of the three fixed field operations with fixed deltas
//! - **Session**: the single-slot action loop; every applied action requests
//!   a short advisory text from a pluggable [`AdvisoryService`] and rejects
//!   further actions until that request resolves
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quantex::{Action, ActionOutcome, Session};
//!
//! let mut session = Session::default();
//!
//! let outcome = session.apply(Action::InduceEntanglement);
//! assert_eq!(outcome, ActionOutcome::Applied);
//!
//! // Collect the advisory text; the session is busy until it resolves.
//! let advice = session.wait_advisory()?;
//! println!("{advice}");
//! println!("field is {}", session.state().field_state());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod advisor;
pub mod error;
pub mod resource;
pub mod session;
pub mod state;

// Re-export primary types at crate root for convenience
pub use action::Action;
pub use advisor::{AdvisoryService, ScriptedAdvisor};
pub use error::{SessionError, SessionResult};
pub use resource::Resources;
pub use session::{ActionOutcome, Session};
pub use state::{FieldState, SimulationState, COLLAPSE_DESCRIPTION, COLLAPSE_TITLE};
