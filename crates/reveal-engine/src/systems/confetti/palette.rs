use super::rng::Rng;

/// Confetti colors, matched to the page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConfettiColor {
    Gold = 0,
    Coral,
    Teal,
    Sky,
    Sage,
    Amber,
}

impl ConfettiColor {
    pub const ALL: [ConfettiColor; 6] = [
        Self::Gold, Self::Coral, Self::Teal,
        Self::Sky, Self::Sage, Self::Amber,
    ];

    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(Self::ALL.len() as u32) as usize]
    }

    /// CSS color string for canvas fill styles.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Gold => "#d4af37",
            Self::Coral => "#ff6b6b",
            Self::Teal => "#4ecdc4",
            Self::Sky => "#45b7d1",
            Self::Sage => "#96ceb4",
            Self::Amber => "#feca57",
        }
    }
}
