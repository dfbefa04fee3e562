pub mod render;
pub mod view;
#[cfg(feature = "confetti")]
pub mod confetti;
