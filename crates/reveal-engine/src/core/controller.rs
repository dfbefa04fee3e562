//! Reveal controller: countdown, poll-on-expiry and restart.
//!
//! ```text
//! COUNTDOWN --tick to 0--> LOADING --LOCKED/error--> COUNTDOWN (stopped)
//!                                  \--OPEN--> REVEALED --restart ok--> COUNTDOWN (fresh)
//! ```
//!
//! The controller is sans-IO: events come in through [`RevealController::handle`],
//! side effects go out as [`Command`]s that the host drains and performs.
//! Only an `OPEN` answer from the backend reveals; expiry alone never does.

use crate::api::config::RevealConfig;
use crate::api::types::Top10Response;
use crate::bridge::command::{Command, CommandQueue};
use crate::core::countdown::CountdownState;
use crate::core::ranking::{rank_teams, TeamCard};
use crate::error::RevealError;
use crate::input::event::RevealEvent;

pub const STATUS_SEALED: &str = "THE CASE FILES ARE SEALED";
pub const STATUS_RUNNING: &str = "INVESTIGATION IN PROGRESS...";
pub const STATUS_ACCESSING: &str = "ACCESSING CASE FILES...";
pub const STATUS_LOCKED_DEFAULT: &str = "CASE FILES REMAIN SEALED";
pub const STATUS_FETCH_FAILED: &str = "❌ Failed to access case files. Evidence database unreachable.";
pub const STATUS_RESTART_FAILED: &str = "❌ Failed to restart investigation";

/// Which section of the page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Timer visible. Covers running, stopped-after-LOCKED and error displays.
    Countdown,
    /// Waiting for the results request.
    Loading,
    /// Results list visible. Left only through a successful restart.
    Revealed,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Countdown => "countdown",
            Phase::Loading => "loading",
            Phase::Revealed => "revealed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Error,
}

/// The line of text under the timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusLine {
    pub fn normal(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Normal }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: StatusTone::Error }
    }

    pub fn is_error(&self) -> bool {
        self.tone == StatusTone::Error
    }
}

/// Single owner of all reveal state for one page.
pub struct RevealController {
    config: RevealConfig,
    countdown: CountdownState,
    phase: Phase,
    status: StatusLine,
    teams: Vec<TeamCard>,
    restart_pending: bool,
    commands: CommandQueue,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        let countdown = CountdownState::new(config.countdown_seconds);
        Self {
            config,
            countdown,
            phase: Phase::Countdown,
            status: StatusLine::normal(STATUS_SEALED),
            teams: Vec::new(),
            restart_pending: false,
            commands: CommandQueue::new(),
        }
    }

    /// Feed one event. Resulting commands accumulate until drained.
    pub fn handle(&mut self, event: RevealEvent) {
        log::debug!("reveal: {} in {:?}", event.name(), self.phase);
        match event {
            RevealEvent::Start => self.start(),
            RevealEvent::Tick => self.tick(),
            RevealEvent::ResultsArrived(outcome) => self.results_arrived(outcome),
            RevealEvent::RestartRequested => self.request_restart(),
            RevealEvent::RestartFinished(outcome) => self.restart_finished(outcome),
        }
    }

    /// Take the commands produced since the last drain.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        self.commands.drain()
    }

    pub fn start(&mut self) {
        if self.phase != Phase::Countdown {
            log::warn!("reveal: start ignored in {:?}", self.phase);
            return;
        }
        if !self.countdown.start() {
            return;
        }
        self.status = StatusLine::normal(STATUS_RUNNING);
        self.commands.push(Command::StartTicker);
        log::info!("reveal: countdown started at {}s", self.countdown.seconds_remaining());
    }

    pub fn tick(&mut self) {
        if self.phase != Phase::Countdown {
            return;
        }
        if !self.countdown.tick() {
            return;
        }
        // Leave COUNTDOWN before asking for results so no later tick can poll again.
        self.phase = Phase::Loading;
        self.status = StatusLine::normal(STATUS_ACCESSING);
        self.commands.push(Command::StopTicker);
        self.commands.push(Command::FetchResults);
        log::info!("reveal: countdown expired, polling backend");
    }

    pub fn results_arrived(&mut self, outcome: Result<Top10Response, RevealError>) {
        if self.phase != Phase::Loading {
            log::warn!("reveal: stale results ignored in {:?}", self.phase);
            return;
        }
        match outcome {
            Ok(Top10Response::Locked { message }) => {
                self.phase = Phase::Countdown;
                self.countdown.stop();
                let text = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| STATUS_LOCKED_DEFAULT.to_string());
                log::info!("reveal: backend still locked: {text}");
                self.status = StatusLine::normal(text);
            }
            Ok(Top10Response::Open { data, .. }) => {
                self.countdown.reveal();
                self.phase = Phase::Revealed;
                self.teams = rank_teams(data, self.config.variant);
                self.commands.push(Command::LaunchConfetti);
                self.commands.push(Command::Flash);
                log::info!("reveal: results open, {} teams", self.teams.len());
            }
            Err(err) => {
                self.phase = Phase::Countdown;
                self.countdown.stop();
                self.status = StatusLine::error(STATUS_FETCH_FAILED);
                log::error!("reveal: failed to fetch results: {err}");
            }
        }
    }

    pub fn request_restart(&mut self) {
        if self.restart_pending {
            log::warn!("reveal: restart already in flight");
            return;
        }
        self.restart_pending = true;
        self.commands.push(Command::PostRestart);
    }

    pub fn restart_finished(&mut self, outcome: Result<(), RevealError>) {
        if !self.restart_pending {
            log::warn!("reveal: unexpected restart result ignored");
            return;
        }
        self.restart_pending = false;
        match outcome {
            Ok(()) => {
                self.commands.push(Command::StopTicker);
                self.commands.push(Command::ClearEffects);
                self.countdown.reset(self.config.countdown_seconds);
                self.teams.clear();
                self.phase = Phase::Countdown;
                self.status = StatusLine::normal(STATUS_SEALED);
                log::info!("reveal: investigation restarted");
                self.start();
            }
            Err(err) => {
                // Nothing but the status line changes on failure.
                self.status = StatusLine::error(STATUS_RESTART_FAILED);
                log::error!("reveal: restart failed: {err}");
            }
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn countdown(&self) -> &CountdownState {
        &self.countdown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn teams(&self) -> &[TeamCard] {
        &self.teams
    }

    pub fn is_restart_pending(&self) -> bool {
        self.restart_pending
    }
}
