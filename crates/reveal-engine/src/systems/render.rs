use std::fmt::Write as _;

use crate::renderer::traits::PageRenderer;
#[cfg(feature = "confetti")]
use crate::renderer::traits::{ConfettiRenderer, ConfettiSprite};
#[cfg(feature = "confetti")]
use crate::systems::confetti::ConfettiState;
use crate::systems::view::{CardView, ViewModel};

/// Push a view model to a renderer.
/// With `previous` set, only the parts that differ are pushed, so the
/// results list is rebuilt once per reveal and not on every tick.
pub fn render_view<R: PageRenderer>(view: &ViewModel, previous: Option<&ViewModel>, target: &mut R) {
    let changed = |same: fn(&ViewModel, &ViewModel) -> bool| match previous {
        Some(prev) => !same(prev, view),
        None => true,
    };

    if changed(|a, b| a.section == b.section && a.countdown_visible == b.countdown_visible) {
        target.show_section(view.section, view.countdown_visible);
    }
    if changed(|a, b| a.timer == b.timer) {
        target.set_timer(&view.timer.text, view.timer.urgent);
    }
    if changed(|a, b| a.status == b.status) {
        target.set_status(&view.status.text, view.status.tone);
    }
    if changed(|a, b| a.cards == b.cards) {
        target.set_cards(&view.cards);
    }
    if changed(|a, b| a.restart_enabled == b.restart_enabled) {
        target.set_restart_enabled(view.restart_enabled);
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of one results card. Every piece of received text is escaped.
pub fn card_html(card: &CardView) -> String {
    let mut html = String::with_capacity(256);
    let _ = write!(html, r#"<div class="case-rank">#{}</div>"#, card.rank);
    let _ = write!(html, r#"<div class="team-name">{}</div>"#, escape_html(&card.team));
    if let Some(nickname) = card.nickname {
        let _ = write!(html, r#"<div class="project-name">{}</div>"#, escape_html(nickname));
    }
    if let Some(score) = &card.score {
        let _ = write!(html, r#"<div class="team-score">{}</div>"#, escape_html(score));
    }
    let _ = write!(
        html,
        r#"<div class="problem-statement"><strong>Problem:</strong> {}</div>"#,
        escape_html(&card.problem)
    );
    html.push_str(r#"<div class="tech-stack"><div class="tech-label">Tech Stack:</div><div class="tech-tags">"#);
    for tag in &card.tech {
        let _ = write!(html, r#"<span class="tech-tag">{}</span>"#, escape_html(tag));
    }
    html.push_str("</div></div>");
    html
}

/// Snapshot the live confetti as drawable sprites.
#[cfg(feature = "confetti")]
pub fn build_confetti_sprites(state: &ConfettiState, out: &mut Vec<ConfettiSprite>) {
    out.clear();
    out.extend(state.particles.iter().map(|p| ConfettiSprite {
        x: p.position.x,
        y: p.position.y,
        size: p.size,
        rotation: p.rotation_radians(),
        alpha: p.alpha(),
        color: p.color.css(),
    }));
}

/// Advance confetti one frame and draw it.
/// Returns false once the confetti is gone and the surface hidden; the
/// caller stops requesting frames at that point.
#[cfg(feature = "confetti")]
pub fn step_and_draw_confetti<R: ConfettiRenderer>(
    state: &mut ConfettiState,
    scratch: &mut Vec<ConfettiSprite>,
    target: &mut R,
) -> bool {
    let (w, h) = target.size();
    state.set_viewport(w, h);
    state.step();
    build_confetti_sprites(state, scratch);
    target.draw(scratch);
    if state.is_idle() {
        target.set_visible(false);
        return false;
    }
    true
}
