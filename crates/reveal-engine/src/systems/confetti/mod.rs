//! Decorative confetti: two corner bursts and a per-frame physics step.
//!
//! Nothing else reads this state. A headless host can skip it entirely.

mod palette;
mod particle;
mod rng;

pub use palette::ConfettiColor;
pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;

// ---- Burst ranges (left corner; the right corner mirrors vx) ----

pub const VX_RANGE: (f32, f32) = (2.0, 10.0);
pub const VY_RANGE: (f32, f32) = (-18.0, -8.0);
pub const SIZE_RANGE: (f32, f32) = (6.0, 12.0);
pub const ROTATION_SPEED_RANGE: (f32, f32) = (-10.0, 10.0);
pub const GRAVITY_RANGE: (f32, f32) = (0.25, 0.45);
pub const DECAY_RANGE: (f32, f32) = (0.005, 0.015);

/// Particles may fall this far below the viewport before removal.
pub const FLOOR_SLACK: f32 = 50.0;

/// Upper bound on frames a burst can survive, from the slowest decay.
pub fn max_lifetime_steps() -> u32 {
    (1.0 / DECAY_RANGE.0).ceil() as u32
}

/// Which bottom corner a burst starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// All live confetti plus the viewport it is drawn into.
pub struct ConfettiState {
    pub particles: Vec<Particle>,
    pub rng: Rng,
    viewport: Vec2,
}

impl ConfettiState {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        ConfettiState {
            particles: Vec::new(),
            rng: Rng::new(seed),
            viewport: Vec2::new(width, height),
        }
    }

    /// Track a resized viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Two mirrored bursts of `count` particles, one per bottom corner.
    pub fn spawn_burst(&mut self, count: usize) {
        self.particles.reserve(count * 2);
        self.spawn_corner(Corner::BottomLeft, count);
        self.spawn_corner(Corner::BottomRight, count);
    }

    fn spawn_corner(&mut self, corner: Corner, count: usize) {
        let (origin, dir) = match corner {
            Corner::BottomLeft => (Vec2::new(0.0, self.viewport.y), 1.0),
            Corner::BottomRight => (Vec2::new(self.viewport.x, self.viewport.y), -1.0),
        };
        for _ in 0..count {
            let rng = &mut self.rng;
            let vx = rng.range(VX_RANGE.0, VX_RANGE.1) * dir;
            let vy = rng.range(VY_RANGE.0, VY_RANGE.1);
            self.particles.push(Particle {
                position: origin,
                velocity: Vec2::new(vx, vy),
                color: ConfettiColor::random(rng),
                size: rng.range(SIZE_RANGE.0, SIZE_RANGE.1),
                rotation: rng.range(0.0, 360.0),
                rotation_speed: rng.range(ROTATION_SPEED_RANGE.0, ROTATION_SPEED_RANGE.1),
                gravity: rng.range(GRAVITY_RANGE.0, GRAVITY_RANGE.1),
                life: 1.0,
                decay: rng.range(DECAY_RANGE.0, DECAY_RANGE.1),
            });
        }
    }

    /// Advance every particle one frame and drop the dead ones.
    pub fn step(&mut self) {
        let floor = self.viewport.y + FLOOR_SLACK;
        self.particles.retain_mut(|p| p.step(floor));
    }

    /// True when there is nothing left to animate.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_both_corners() {
        let mut c = ConfettiState::new(42, 800.0, 600.0);
        c.spawn_burst(50);
        assert_eq!(c.len(), 100);
        let left = c.particles.iter().filter(|p| p.position.x == 0.0).count();
        let right = c.particles.iter().filter(|p| p.position.x == 800.0).count();
        assert_eq!((left, right), (50, 50));
        assert!(c.particles.iter().all(|p| p.position.y == 600.0 && p.life == 1.0));
    }

    #[test]
    fn bursts_are_mirrored() {
        let mut c = ConfettiState::new(3, 800.0, 600.0);
        c.spawn_burst(20);
        for p in &c.particles {
            let from_left = p.position.x == 0.0;
            assert_eq!(p.velocity.x > 0.0, from_left);
            assert!(p.velocity.y < 0.0, "bursts shoot upwards");
        }
    }

    #[test]
    fn spawned_values_within_ranges() {
        let mut c = ConfettiState::new(9, 1024.0, 768.0);
        c.spawn_burst(200);
        for p in &c.particles {
            assert!(p.velocity.x.abs() >= VX_RANGE.0 && p.velocity.x.abs() < VX_RANGE.1);
            assert!(p.size >= SIZE_RANGE.0 && p.size < SIZE_RANGE.1);
            assert!(p.gravity >= GRAVITY_RANGE.0 && p.gravity < GRAVITY_RANGE.1);
            assert!(p.decay >= DECAY_RANGE.0 && p.decay < DECAY_RANGE.1);
        }
    }

    #[test]
    fn burst_of_fifty_converges_to_empty() {
        let mut c = ConfettiState::new(42, 800.0, 600.0);
        c.spawn_burst(50);
        let bound = max_lifetime_steps() + 1;
        let mut steps = 0;
        while !c.is_idle() {
            c.step();
            steps += 1;
            assert!(steps <= bound, "confetti still alive after {steps} steps");
        }
    }

    #[test]
    fn clear_drops_everything() {
        let mut c = ConfettiState::new(1, 100.0, 100.0);
        c.spawn_burst(5);
        c.clear();
        assert!(c.is_empty());
    }
}
