//! Browser bridge for the reveal page.
//!
//! JS calls `reveal_init` once after the page markup is in place. Everything
//! after that (ticks, fetches, clicks, frames) is driven from Rust.

mod dom;
mod entrance;
mod frame;
mod http;
mod runner;
mod typewriter;
#[cfg(feature = "confetti")]
mod confetti;

use std::cell::RefCell;

use reveal_engine::{RevealConfig, RevealError, RevealEvent};
use wasm_bindgen::prelude::*;

pub use runner::RevealRunner;

thread_local! {
    static RUNNER: RefCell<Option<RevealRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the page runner. `None` before `reveal_init`, or when
/// called re-entrantly from inside a dispatch.
fn with_runner<R>(f: impl FnOnce(&mut RevealRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

fn dispatch(event: RevealEvent) {
    let name = event.name();
    if with_runner(|r| r.dispatch(event)).is_none() {
        log::warn!("reveal: {name} dropped, runner not available");
    }
}

fn to_js(err: RevealError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Mount the reveal page and start the countdown.
///
/// `config_json` is an optional `RevealConfig` object; missing fields take
/// their defaults. Calling again replaces the running page state.
#[wasm_bindgen]
pub fn reveal_init(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = RevealConfig::from_json(config_json.as_deref().unwrap_or("")).map_err(to_js)?;
    let _ = console_log::init_with_level(config.log_level());

    let variant = config.variant;
    let seconds = config.countdown_seconds;
    let runner = RevealRunner::mount(config, dispatch).map_err(to_js)?;
    RUNNER.with(|cell| {
        let mut slot = cell
            .try_borrow_mut()
            .map_err(|_| to_js(RevealError::Logic("reveal_init called during a dispatch".into())))?;
        *slot = Some(runner);
        Ok::<_, JsValue>(())
    })?;

    dispatch(RevealEvent::Start);
    log::info!("reveal: initialized ({variant:?} page, {seconds}s countdown)");
    Ok(())
}

/// Ask the backend to restart the investigation. Same as clicking `#restartBtn`.
#[wasm_bindgen]
pub fn reveal_restart() {
    dispatch(RevealEvent::RestartRequested);
}

/// Current phase: `"countdown"`, `"loading"` or `"revealed"`.
/// Empty before `reveal_init`.
#[wasm_bindgen]
pub fn reveal_phase() -> String {
    with_runner(|r| r.phase().as_str().to_string()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn reveal_seconds_remaining() -> u32 {
    with_runner(|r| r.seconds_remaining()).unwrap_or(0)
}
