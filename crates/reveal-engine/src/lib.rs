pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::{RevealConfig, PageVariant};
pub use api::types::{TeamRecord, Top10Response};
pub use bridge::command::{Command, CommandQueue};
pub use core::controller::{RevealController, Phase, StatusLine, StatusTone};
pub use core::countdown::CountdownState;
pub use core::ranking::{TeamCard, Showcase, rank_teams, nickname_for, display_score};
pub use error::RevealError;
pub use input::event::RevealEvent;
pub use renderer::{PageRenderer, ConfettiRenderer, ConfettiSprite};
pub use systems::view::{ViewModel, Section, TimerView, CardView};
pub use systems::render::{render_view, card_html, escape_html};

#[cfg(feature = "confetti")]
pub use systems::confetti::{ConfettiState, ConfettiColor, Particle};
#[cfg(feature = "confetti")]
pub use systems::render::step_and_draw_confetti;

// Extensions: decorative timing, sampled by the host frame loop
pub use extensions::{Easing, EntrancePlan, EntranceFrame, Typewriter};
