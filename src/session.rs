//! The interactive session loop.
//!
//! A [`Session`] couples the pure [`SimulationState`] with an advisory
//! worker: every applied action submits its event description to the worker
//! and parks the reply receiver in a single pending slot. While that slot is
//! occupied the session is busy and every further action is ignored, which is
//! the only mutual exclusion the simulation needs. The worker is one
//! dedicated thread behind a bounded(1) job channel; each job carries its own
//! bounded(1) reply channel.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};

use crate::action::Action;
use crate::advisor::{AdvisoryService, ScriptedAdvisor};
use crate::error::{SessionError, SessionResult};
use crate::state::SimulationState;

/// What happened to an action submitted through [`Session::apply`].
///
/// `Ignored` deliberately does not say why: an in-flight advisory request, a
/// terminal session, and an unmet energy precondition are indistinguishable,
/// matching the original front end's silent no-op behavior. Callers that need
/// to predict gating can consult [`Session::is_busy`] and the snapshot first.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action's deltas were applied and an advisory was requested.
    Applied,

    /// The action was a no-op; the state tuple is unchanged.
    Ignored,
}

struct AdvisoryJob {
    event: String,
    reply: Sender<String>,
}

/// Single advisory worker thread behind a bounded(1) job channel.
struct AdvisoryWorker {
    tx: Option<Sender<AdvisoryJob>>,
    handle: Option<JoinHandle<()>>,
}

impl AdvisoryWorker {
    fn start(advisor: Arc<dyn AdvisoryService>) -> Self {
        let (tx, rx) = bounded::<AdvisoryJob>(1);
        let handle = thread::Builder::new()
            .name("quantex-advisor".to_string())
            .spawn(move || {
                while let Ok(job) = rx.recv() {
                    let text = advisor.advise(&job.event);
                    // The receiver may be gone after a reset; that is fine.
                    let _ = job.reply.send(text);
                }
            })
            .expect("failed to spawn quantex advisor worker");
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Submit an event description; returns the reply receiver, or `None`
    /// when the job cannot be queued (worker gone, or slot still occupied by
    /// an orphaned request).
    fn submit(&self, event: String) -> Option<Receiver<String>> {
        let tx = self.tx.as_ref()?;
        let (reply_tx, reply_rx) = bounded::<String>(1);
        let job = AdvisoryJob {
            event,
            reply: reply_tx,
        };
        match tx.try_send(job) {
            Ok(()) => Some(reply_rx),
            Err(_) => None,
        }
    }
}

impl Drop for AdvisoryWorker {
    fn drop(&mut self) {
        // Close the channel: the worker drains any queued job then exits.
        drop(self.tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// One interactive simulation session.
pub struct Session {
    state: SimulationState,
    worker: AdvisoryWorker,
    pending: Option<Receiver<String>>,
    last_advisory: Option<String>,
}

impl Session {
    /// Create a session backed by the given advisory service.
    #[must_use]
    pub fn new(advisor: Arc<dyn AdvisoryService>) -> Self {
        log::debug!("session started with advisor '{}'", advisor.name());
        Self {
            state: SimulationState::initial(),
            worker: AdvisoryWorker::start(advisor),
            pending: None,
            last_advisory: None,
        }
    }

    /// Current simulation snapshot.
    #[must_use]
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// True while an advisory request is in flight.
    ///
    /// A busy session ignores every action until the pending request is
    /// collected via one of the `*_advisory` methods or cleared by
    /// [`Self::reset`]. If the advisor never replies, the session stays busy
    /// indefinitely.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// The most recently collected advisory text.
    #[must_use]
    pub fn last_advisory(&self) -> Option<&str> {
        self.last_advisory.as_deref()
    }

    /// Apply an action.
    ///
    /// Returns [`ActionOutcome::Ignored`] while busy or terminal, and for an
    /// unmet energy precondition (a silent no-op, not a failure). On
    /// [`ActionOutcome::Applied`] the state has mutated and an advisory
    /// request for the action's event description is in flight.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        if self.pending.is_some() {
            log::debug!("{action} ignored: advisory request in flight");
            return ActionOutcome::Ignored;
        }
        if !self.state.apply(action) {
            log::debug!("{action} ignored: terminal or precondition unmet");
            return ActionOutcome::Ignored;
        }

        log::debug!("applied {action}, score {}", self.state.score());
        match self.worker.submit(action.event_description().to_string()) {
            Some(rx) => self.pending = Some(rx),
            // The state mutation stands; only the advisory text is lost.
            None => log::warn!("advisory request for {action} could not be queued"),
        }
        ActionOutcome::Applied
    }

    /// Collect the pending advisory text without blocking.
    ///
    /// `Ok(None)` means either nothing is in flight or the reply has not
    /// arrived yet; the busy flag disambiguates.
    pub fn poll_advisory(&mut self) -> SessionResult<Option<String>> {
        let Some(rx) = self.pending.as_ref() else {
            return Ok(None);
        };
        match rx.try_recv() {
            Ok(text) => {
                self.pending = None;
                self.last_advisory = Some(text.clone());
                Ok(Some(text))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SessionError::Disconnected),
        }
    }

    /// Block until the pending advisory text arrives.
    ///
    /// Errors with [`SessionError::Idle`] when nothing is in flight.
    pub fn wait_advisory(&mut self) -> SessionResult<String> {
        let Some(rx) = self.pending.as_ref() else {
            return Err(SessionError::Idle);
        };
        match rx.recv() {
            Ok(text) => {
                self.pending = None;
                self.last_advisory = Some(text.clone());
                Ok(text)
            }
            Err(_) => Err(SessionError::Disconnected),
        }
    }

    /// Block for at most `timeout` waiting for the pending advisory text.
    ///
    /// On [`SessionError::Timeout`] the request stays pending and the session
    /// remains busy; there are no cancellation semantics.
    pub fn wait_advisory_timeout(&mut self, timeout: Duration) -> SessionResult<String> {
        let Some(rx) = self.pending.as_ref() else {
            return Err(SessionError::Idle);
        };
        match rx.recv_timeout(timeout) {
            Ok(text) => {
                self.pending = None;
                self.last_advisory = Some(text.clone());
                Ok(text)
            }
            Err(RecvTimeoutError::Timeout) => Err(SessionError::Timeout {
                duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }),
            Err(RecvTimeoutError::Disconnected) => Err(SessionError::Disconnected),
        }
    }

    /// Restore the initial state unconditionally.
    ///
    /// Clears the terminal latch, any pending advisory request, and the last
    /// advisory text. Idempotent.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        self.state.reset();
        self.pending = None;
        self.last_advisory = None;
    }
}

impl Default for Session {
    /// A session backed by the canned [`ScriptedAdvisor`].
    fn default() -> Self {
        Self::new(Arc::new(ScriptedAdvisor::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::state::FieldState;

    /// Advisor that replies instantly with a fixed string.
    struct EchoAdvisor;

    impl AdvisoryService for EchoAdvisor {
        fn advise(&self, event: &str) -> String {
            format!("ack: {event}")
        }
    }

    #[test]
    fn applied_action_requests_matching_advisory() {
        let mut session = Session::new(Arc::new(EchoAdvisor));

        assert_eq!(session.apply(Action::ChargeCore), ActionOutcome::Applied);
        assert!(session.is_busy());

        let text = session.wait_advisory().unwrap();
        assert_eq!(text, "ack: Quantum core charging initiated");
        assert!(!session.is_busy());
        assert_eq!(session.last_advisory(), Some(text.as_str()));
    }

    #[test]
    fn busy_session_ignores_actions_and_state_is_untouched() {
        // Gate the advisor on a channel so the request stays in flight.
        let (gate_tx, gate_rx) = bounded::<()>(1);
        let advisor = move |_event: &str| {
            let _ = gate_rx.recv();
            "done".to_string()
        };
        let mut session = Session::new(Arc::new(advisor));

        assert_eq!(session.apply(Action::StabilizeField), ActionOutcome::Applied);
        let snapshot = session.state().clone();

        assert_eq!(session.apply(Action::ChargeCore), ActionOutcome::Ignored);
        assert_eq!(session.apply(Action::InduceEntanglement), ActionOutcome::Ignored);
        assert_eq!(session.state(), &snapshot);

        gate_tx.send(()).unwrap();
        assert_eq!(session.wait_advisory().unwrap(), "done");

        // Resolved: actions apply again. The gate sender is dropped first so
        // the advisor no longer blocks.
        drop(gate_tx);
        assert_eq!(session.apply(Action::ChargeCore), ActionOutcome::Applied);
        assert_eq!(session.wait_advisory().unwrap(), "done");
    }

    #[test]
    fn wait_without_pending_request_is_idle() {
        let mut session = Session::new(Arc::new(EchoAdvisor));
        let err = session.wait_advisory().unwrap_err();
        assert!(matches!(err, SessionError::Idle));

        let err = session
            .wait_advisory_timeout(Duration::from_millis(1))
            .unwrap_err();
        assert!(matches!(err, SessionError::Idle));
    }

    #[test]
    fn poll_reports_not_ready_then_collects() {
        let (gate_tx, gate_rx) = bounded::<()>(1);
        let advisor = move |_event: &str| {
            let _ = gate_rx.recv();
            "late".to_string()
        };
        let mut session = Session::new(Arc::new(advisor));

        let _ = session.apply(Action::ChargeCore);
        assert_eq!(session.poll_advisory().unwrap(), None);
        assert!(session.is_busy());

        gate_tx.send(()).unwrap();
        // The reply lands asynchronously; wait_advisory collects it.
        assert_eq!(session.wait_advisory().unwrap(), "late");
        assert_eq!(session.poll_advisory().unwrap(), None);
    }

    #[test]
    fn reset_clears_pending_request_and_last_advisory() {
        let (gate_tx, gate_rx) = bounded::<()>(1);
        let advisor = move |_event: &str| {
            let _ = gate_rx.recv();
            "orphaned".to_string()
        };
        let mut session = Session::new(Arc::new(advisor));

        let _ = session.apply(Action::InduceEntanglement);
        assert!(session.is_busy());

        session.reset();
        assert!(!session.is_busy());
        assert_eq!(session.last_advisory(), None);
        assert_eq!(session.state(), &SimulationState::initial());
        assert_eq!(session.state().field_state(), FieldState::Stable);

        // Release the worker so drop can join it.
        gate_tx.send(()).unwrap();
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let mut session = Session::new(Arc::new(EchoAdvisor));
        let _ = session.apply(Action::ChargeCore);
        let _ = session.wait_advisory().unwrap();

        session.reset();
        let once = session.state().clone();
        session.reset();
        assert_eq!(session.state(), &once);
    }
}
