use crate::api::types::Top10Response;
use crate::error::RevealError;

/// Everything the host can tell the controller.
/// The host owns the clock and the network; the controller only reacts.
#[derive(Debug)]
pub enum RevealEvent {
    /// Page loaded (or restart succeeded): begin counting down.
    Start,
    /// One countdown period elapsed.
    Tick,
    /// The results request finished, successfully or not.
    ResultsArrived(Result<Top10Response, RevealError>),
    /// The operator pressed the restart button.
    RestartRequested,
    /// The restart request finished. `Ok` only for an HTTP 2xx answer.
    RestartFinished(Result<(), RevealError>),
}

impl RevealEvent {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            RevealEvent::Start => "start",
            RevealEvent::Tick => "tick",
            RevealEvent::ResultsArrived(_) => "results-arrived",
            RevealEvent::RestartRequested => "restart-requested",
            RevealEvent::RestartFinished(_) => "restart-finished",
        }
    }
}
