//! Errors surfaced at the driver boundary.

use thiserror::Error;

/// A rejected call into the engine. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `resolve` was called with nothing pending (the match is over).
    #[error("no event is pending")]
    NoPendingEvent,

    /// The response is not in the pending event's response set.
    #[error("response {response} is not legal for {event}")]
    IllegalResponse {
        event: &'static str,
        response: String,
    },
}
