// extensions/mod.rs
//
// Decorative timing helpers. Pure functions of elapsed time, so the browser
// bridge only has to sample them from its frame loop.

pub mod easing;
pub mod entrance;
pub mod typewriter;

pub use easing::{Easing, lerp, ease};
pub use entrance::{EntranceFrame, EntrancePlan};
pub use typewriter::Typewriter;
