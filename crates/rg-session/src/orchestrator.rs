//! Reply orchestrator: (Settings, inbound email) -> generated reply.

use crate::GenerateError;

use rg_core::{RequestOutcome, Settings};
use rg_gen::GenerationService;
use rg_gen::prompt::build_prompt;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use log::debug;

/// Issues exactly one generation request per call and tracks the single
/// current outcome.
///
/// Single-flight semantics: each call takes a ticket from an atomic
/// sequence, and the shared outcome is only written while the ticket is
/// still the newest. A superseded call's late result is returned to its own
/// caller but never overwrites a newer call's state.
pub struct ReplyOrchestrator {
    service: Arc<dyn GenerationService>,
    seq: AtomicU64,
    outcome: StdMutex<RequestOutcome>,
}

impl ReplyOrchestrator {
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self {
            service,
            seq: AtomicU64::new(0),
            outcome: StdMutex::new(RequestOutcome::Idle),
        }
    }

    /// Draft a reply to `inbound_email` on behalf of `settings`.
    ///
    /// An empty inbound email fails validation before any network call.
    /// The previous reply is cleared (outcome goes Pending) only once a
    /// real attempt starts.
    pub async fn generate(
        &self,
        inbound_email: &str,
        settings: &Settings,
    ) -> Result<String, GenerateError> {
        if inbound_email.trim().is_empty() {
            return Err(GenerateError::validation());
        }

        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.commit(ticket, RequestOutcome::Pending);

        let prompt = build_prompt(settings, inbound_email);
        debug!("Generating reply: ticket={ticket} inbound={}B", inbound_email.len());

        match self.service.generate(&prompt).await {
            Ok(text) => {
                self.commit(ticket, RequestOutcome::Success(text.clone()));
                Ok(text)
            }
            Err(e) => {
                self.commit(ticket, RequestOutcome::Failure(e.to_string()));
                Err(GenerateError::Service(e))
            }
        }
    }

    /// Outcome of the current (newest) generation request.
    pub fn outcome(&self) -> RequestOutcome {
        self.outcome.lock().unwrap().clone()
    }

    /// Write the shared outcome unless a newer call has taken over.
    fn commit(&self, ticket: u64, outcome: RequestOutcome) {
        let mut current = self.outcome.lock().unwrap();
        if ticket == self.seq.load(Ordering::SeqCst) {
            *current = outcome;
        } else {
            debug!("Discarding stale outcome for ticket {ticket}");
        }
    }
}
