//! Staggered slide-in for freshly rendered result cards.

use reveal_engine::{Easing, EntranceFrame, EntrancePlan, RevealConfig};
use web_sys::HtmlElement;

use crate::dom::set_style;
use crate::frame::{Elapsed, FrameLoop};

pub fn plan_from(config: &RevealConfig) -> EntrancePlan {
    EntrancePlan::new(
        config.card_stagger_ms as f32,
        config.card_transition_ms as f32,
        EntrancePlan::DEFAULT_OFFSET_X,
        Easing::CubicOut,
    )
}

fn apply(card: &HtmlElement, frame: EntranceFrame) {
    set_style(card, "opacity", &frame.opacity.to_string());
    set_style(card, "transform", &format!("translateX({}px)", frame.offset_x));
}

/// Animate `cards` in display order. An empty list starts nothing.
pub fn play(plan: EntrancePlan, cards: Vec<HtmlElement>) -> Option<FrameLoop> {
    if cards.is_empty() {
        return None;
    }
    let mut clock = Elapsed::default();
    Some(FrameLoop::start(move |timestamp| {
        let elapsed = clock.since_first(timestamp);
        for (index, card) in cards.iter().enumerate() {
            apply(card, plan.sample(index, elapsed));
        }
        !plan.is_complete(cards.len(), elapsed)
    }))
}
