//! Error types for the session's advisory plumbing.
//!
//! The simulation itself has no failure modes: gated and precondition-failed
//! actions are silent no-ops. Errors only arise around the advisory request
//! channel, and they are strongly typed with thiserror so callers can match
//! on the specific condition.

use thiserror::Error;

/// Errors surfaced while collecting an advisory text.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The advisory worker is gone and the pending request can never resolve.
    #[error("advisory worker disconnected")]
    Disconnected,

    /// The pending advisory request did not resolve within the given window.
    /// The request stays pending; the session remains busy.
    #[error("advisory request timed out after {duration_ms}ms")]
    Timeout {
        /// The elapsed wait, in milliseconds.
        duration_ms: u64,
    },

    /// No advisory request is in flight.
    #[error("no advisory request in flight")]
    Idle,
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
