//! Renderer traits implemented by the host.
//!
//! The browser bridge implements them over the DOM and a 2D canvas.
//! Tests implement them with recorders. Nothing in the engine knows
//! which one it is talking to.

use crate::core::controller::StatusTone;
use crate::systems::view::{CardView, Section};

/// One confetti piece, ready to draw. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub alpha: f32,
    pub color: &'static str,
}

/// Page-level presentation: sections, timer, status, cards.
///
/// Each setter is called only when the corresponding part of the view model
/// changed (see `systems::render::render_view`).
pub trait PageRenderer {
    /// Make `section` the visible one. With `countdown_visible` the countdown
    /// section (which holds the status line) is shown next to it, so an error
    /// raised while results are up stays readable.
    fn show_section(&mut self, section: Section, countdown_visible: bool);

    /// Timer text (`MM:SS`) and low-time styling.
    fn set_timer(&mut self, text: &str, urgent: bool);

    fn set_status(&mut self, text: &str, tone: StatusTone);

    /// Replace the whole results list. `cards` is in display order.
    fn set_cards(&mut self, cards: &[CardView]);

    fn set_restart_enabled(&mut self, enabled: bool);
}

/// Confetti surface.
pub trait ConfettiRenderer {
    /// Clear the surface and draw `sprites` in order.
    fn draw(&mut self, sprites: &[ConfettiSprite]);

    /// Show or hide the drawing surface.
    fn set_visible(&mut self, visible: bool);

    /// Current surface size in CSS pixels.
    fn size(&self) -> (f32, f32);
}
