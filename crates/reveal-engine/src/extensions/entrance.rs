// extensions/entrance.rs
//
// Staggered card entrance: card i waits i × stagger, then fades in while
// sliding from a horizontal offset to its resting place.
//
// Usage:
//   let plan = EntrancePlan::new(150.0, 600.0, -20.0, Easing::CubicOut);
//   let frame = plan.sample(index, elapsed_ms);
//   // frame.opacity, frame.offset_x

use super::easing::{ease, Easing};

/// Visual state of one card at a moment in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    /// Horizontal offset in pixels, 0 at rest.
    pub offset_x: f32,
}

impl EntranceFrame {
    pub const HIDDEN_OPACITY: f32 = 0.0;
    /// Fully visible, in place.
    pub const RESTING: EntranceFrame = EntranceFrame { opacity: 1.0, offset_x: 0.0 };
}

/// Timing shared by every card of one reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrancePlan {
    pub stagger_ms: f32,
    pub duration_ms: f32,
    /// Starting horizontal offset (negative slides in from the left).
    pub from_offset_x: f32,
    pub easing: Easing,
}

impl EntrancePlan {
    pub const DEFAULT_OFFSET_X: f32 = -20.0;

    pub fn new(stagger_ms: f32, duration_ms: f32, from_offset_x: f32, easing: Easing) -> Self {
        Self { stagger_ms, duration_ms, from_offset_x, easing }
    }

    /// Delay before card `index` (0-based) starts moving.
    pub fn delay_ms(&self, index: usize) -> f32 {
        index as f32 * self.stagger_ms
    }

    /// Normalized progress [0, 1] of card `index` at `elapsed_ms`.
    pub fn progress(&self, index: usize, elapsed_ms: f32) -> f32 {
        let local = elapsed_ms - self.delay_ms(index);
        if local <= 0.0 {
            0.0
        } else if self.duration_ms <= 0.0 {
            1.0
        } else {
            (local / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn sample(&self, index: usize, elapsed_ms: f32) -> EntranceFrame {
        let t = self.progress(index, elapsed_ms);
        if t >= 1.0 {
            return EntranceFrame::RESTING;
        }
        EntranceFrame {
            opacity: ease(EntranceFrame::HIDDEN_OPACITY, 1.0, t, self.easing),
            offset_x: ease(self.from_offset_x, 0.0, t, self.easing),
        }
    }

    /// Time after which all `count` cards are at rest.
    pub fn total_ms(&self, count: usize) -> f32 {
        match count {
            0 => 0.0,
            n => self.delay_ms(n - 1) + self.duration_ms,
        }
    }

    pub fn is_complete(&self, count: usize, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.total_ms(count)
    }
}
