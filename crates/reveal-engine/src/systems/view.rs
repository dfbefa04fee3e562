//! View model: everything the page shows, as plain data.
//!
//! Built from the controller after every event and handed to
//! `systems::render::render_view`. Holds no references to page elements.

use crate::core::controller::{Phase, RevealController, StatusLine};
use crate::core::ranking::TeamCard;

/// The page section that is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Countdown,
    Loading,
    Results,
}

impl From<Phase> for Section {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Countdown => Section::Countdown,
            Phase::Loading => Section::Loading,
            Phase::Revealed => Section::Results,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub text: String,
    pub urgent: bool,
}

/// One results card, display-ready.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub rank: usize,
    pub team: String,
    pub problem: String,
    pub tech: Vec<String>,
    /// Full variant only, one decimal.
    pub score: Option<String>,
    /// Full variant only.
    pub nickname: Option<&'static str>,
}

impl From<&TeamCard> for CardView {
    fn from(card: &TeamCard) -> Self {
        CardView {
            rank: card.rank,
            team: card.record.team.clone(),
            problem: card.record.problem.clone(),
            tech: card.record.tech.clone(),
            score: card.showcase.as_ref().map(|s| format!("{:.1}", s.score)),
            nickname: card.showcase.as_ref().map(|s| s.nickname),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub section: Section,
    /// True in the countdown section, and alongside any other section while
    /// the status line carries an error.
    pub countdown_visible: bool,
    pub timer: TimerView,
    pub status: StatusLine,
    pub cards: Vec<CardView>,
    /// False while a restart request is in flight.
    pub restart_enabled: bool,
}

impl ViewModel {
    pub fn from_controller(ctl: &RevealController) -> Self {
        let countdown = ctl.countdown();
        let section = Section::from(ctl.phase());
        ViewModel {
            section,
            countdown_visible: section == Section::Countdown || ctl.status().is_error(),
            timer: TimerView {
                text: countdown.display(),
                urgent: countdown.is_urgent(ctl.config().urgency_threshold_secs),
            },
            status: ctl.status().clone(),
            cards: ctl.teams().iter().map(CardView::from).collect(),
            restart_enabled: !ctl.is_restart_pending(),
        }
    }
}
