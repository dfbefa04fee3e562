//! Types the page title back in after load.

use reveal_engine::{RevealConfig, Typewriter};
use web_sys::Document;

use crate::frame::{Elapsed, FrameLoop};

pub const TYPING_SELECTOR: &str = ".typing-text";

/// Clear the `.typing-text` element and re-type its text. Pages without one
/// get no loop.
pub fn play(document: &Document, config: &RevealConfig) -> Option<FrameLoop> {
    let el = document.query_selector(TYPING_SELECTOR).ok().flatten()?;
    let text = el.text_content().unwrap_or_default();
    if text.is_empty() {
        return None;
    }
    let writer = Typewriter::new(
        text,
        config.typewriter_start_delay_ms as f32,
        config.typewriter_char_interval_ms as f32,
    );
    el.set_text_content(Some(""));

    let mut clock = Elapsed::default();
    let mut shown = 0usize;
    Some(FrameLoop::start(move |timestamp| {
        let elapsed = clock.since_first(timestamp);
        let visible = writer.visible_chars(elapsed);
        if visible != shown {
            shown = visible;
            el.set_text_content(Some(writer.visible_text(elapsed)));
        }
        !writer.is_complete(elapsed)
    }))
}
