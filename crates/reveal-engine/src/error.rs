//! Error type shared by the controller and the browser bridge.

use thiserror::Error;

/// Everything that can go wrong while polling, restarting or wiring the page.
///
/// `Transport` and `Decode` are transport failures; `Logic` covers a
/// well-formed payload the controller does not understand. The controller
/// treats all three the same way: show a message, log, wait for the operator.
#[derive(Error, Debug)]
pub enum RevealError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not valid JSON or did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON with a missing or unexpected `status`.
    #[error("unexpected response: {0}")]
    Logic(String),

    /// The restart endpoint answered with a non-2xx status.
    #[error("restart rejected with HTTP {status}")]
    RestartRejected { status: u16 },

    /// A required page element is missing or has the wrong type.
    #[error("page error: {0}")]
    Dom(String),
}

impl RevealError {
    /// True for failures that originate below the application protocol.
    pub fn is_transport(&self) -> bool {
        matches!(self, RevealError::Transport(_) | RevealError::Decode(_))
    }
}
