mod controller;
mod error;
mod orchestrator;
mod state;

pub use controller::SessionController;
pub use error::{GenerateError, SessionError};
pub use orchestrator::ReplyOrchestrator;
pub use state::{SessionPhase, SessionStatus, SyncPhase};
