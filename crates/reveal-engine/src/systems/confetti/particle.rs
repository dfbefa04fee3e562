//! A single confetti piece.

use glam::Vec2;

use super::palette::ConfettiColor;

/// One piece of confetti. Units are CSS pixels and frames.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: ConfettiColor,
    /// Edge length of the square piece.
    pub size: f32,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per frame.
    pub rotation_speed: f32,
    /// Added to `velocity.y` every frame.
    pub gravity: f32,
    /// 1.0 at birth, dead at or below 0.
    pub life: f32,
    /// Subtracted from `life` every frame.
    pub decay: f32,
}

impl Particle {
    /// Advance one frame. Returns false once the particle should be removed:
    /// life used up, or fallen below `floor_y`.
    pub fn step(&mut self, floor_y: f32) -> bool {
        self.position += self.velocity;
        self.velocity.y += self.gravity;
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(360.0);
        self.life -= self.decay;
        self.life > 0.0 && self.position.y <= floor_y
    }

    /// Draw opacity, follows remaining life.
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    pub fn rotation_radians(&self) -> f32 {
        self.rotation.to_radians()
    }
}
