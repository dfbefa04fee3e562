pub mod traits;

pub use traits::{PageRenderer, ConfettiRenderer, ConfettiSprite};
