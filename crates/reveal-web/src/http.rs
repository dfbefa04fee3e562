//! The two backend calls. One request each, no retries.

use gloo::net::http::{Request, RequestBuilder};
use reveal_engine::{RevealError, Top10Response};

/// Ask every cache on the way for a fresh answer.
fn no_cache(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Cache-Control", "no-cache")
        .header("Pragma", "no-cache")
}

fn transport(err: gloo::net::Error) -> RevealError {
    RevealError::Transport(err.to_string())
}

/// `GET` the results endpoint and decode the body.
///
/// The HTTP status is not inspected: a body that is not a valid results
/// document fails decoding whatever the status was.
pub async fn fetch_results(url: &str) -> Result<Top10Response, RevealError> {
    let response = no_cache(Request::get(url)).send().await.map_err(transport)?;
    log::debug!("results: HTTP {}", response.status());
    let body = response.text().await.map_err(transport)?;
    Top10Response::from_json(&body)
}

/// `POST` the restart endpoint. Only a 2xx answer counts as success.
pub async fn post_restart(url: &str) -> Result<(), RevealError> {
    let response = no_cache(Request::post(url)).send().await.map_err(transport)?;
    if response.ok() {
        Ok(())
    } else {
        Err(RevealError::RestartRejected { status: response.status() })
    }
}
