//! Advisory text generation.
//!
//! The session only needs one thing from its advisor: given the last action's
//! event description, produce a short human-readable string. The trait keeps
//! that seam narrow so a real text-generation backend can be substituted
//! without touching the simulation core.

/// Produces a short advisory text for an action's event description.
pub trait AdvisoryService: Send + Sync {
    /// Name of the advisor (for logging/debugging).
    fn name(&self) -> &str {
        "advisor"
    }

    /// Produce an advisory text for the given event description.
    fn advise(&self, event: &str) -> String;
}

impl<F> AdvisoryService for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn advise(&self, event: &str) -> String {
        (self)(event)
    }
}

/// The canned keyword-matching advisor.
///
/// Behavior is ported verbatim from the original simulated client, including
/// its case-sensitive matching: every canned event description starts with
/// capital-Q "Quantum", so the lowercase `"quantum"` branch never fires for
/// them and only the entanglement event reaches the `"experiment"` branch.
/// The quirk is kept for compatibility with the original advisory output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedAdvisor;

impl ScriptedAdvisor {
    /// Create a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AdvisoryService for ScriptedAdvisor {
    fn name(&self) -> &str {
        "scripted"
    }

    fn advise(&self, event: &str) -> String {
        if event.contains("quantum") {
            return "The quantum state you have created shows interesting properties. \
                    Consider how particle entanglement might affect your next move."
                .to_string();
        }
        if event.contains("experiment") {
            return "Your experiment results indicate a coherent quantum field. \
                    You might want to stabilize it using the containment matrix."
                .to_string();
        }
        "Interesting approach. What quantum principles are you applying here?".to_string()
    }
}
