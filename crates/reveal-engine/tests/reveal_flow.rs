// End-to-end reveal flows driven the way the browser host drives them:
// feed events, drain commands, answer FETCH/RESTART with canned bodies.

use reveal_engine::{
    render_view, CardView, Command, PageRenderer, Phase, RevealConfig, RevealController,
    RevealError, RevealEvent, Section, StatusTone, Top10Response,
};

const LOCKED_BODY: &str =
    r#"{"status":"LOCKED","message":"Case files are sealed. Investigation in progress..."}"#;

const OPEN_BODY: &str = r#"{
    "status": "OPEN",
    "message": "TOP 10 CASE FILES REVEALED",
    "data": [
        {"team": "Debug Detectives", "problem": "Campus waste management system", "tech": ["Gemini AI", "Firebase", "React"]},
        {"team": "Code Sleuths", "problem": "Smart attendance tracking", "tech": ["GCP", "AI Studio", "Flutter"]},
        {"team": "Cyber Investigators", "problem": "Student mental health platform", "tech": ["OpenAI", "MongoDB", "Node.js"]}
    ]
}"#;

/// Minimal DOM stand-in.
#[derive(Default)]
struct FakePage {
    section: Option<Section>,
    countdown_visible: bool,
    timer: String,
    urgent: bool,
    status: String,
    status_tone: Option<StatusTone>,
    cards: Vec<CardView>,
}

impl PageRenderer for FakePage {
    fn show_section(&mut self, section: Section, countdown_visible: bool) {
        self.section = Some(section);
        self.countdown_visible = countdown_visible;
    }
    fn set_timer(&mut self, text: &str, urgent: bool) {
        self.timer = text.to_string();
        self.urgent = urgent;
    }
    fn set_status(&mut self, text: &str, tone: StatusTone) {
        self.status = text.to_string();
        self.status_tone = Some(tone);
    }
    fn set_cards(&mut self, cards: &[CardView]) {
        self.cards = cards.to_vec();
    }
    fn set_restart_enabled(&mut self, _enabled: bool) {}
}

/// Drives a controller with a scripted backend and records every command.
struct Harness {
    ctl: RevealController,
    page: FakePage,
    previous: Option<reveal_engine::ViewModel>,
    results_body: &'static str,
    restart_status: u16,
    log: Vec<Command>,
    ticker_running: bool,
}

impl Harness {
    fn new(results_body: &'static str) -> Self {
        Self {
            ctl: RevealController::new(RevealConfig::default()),
            page: FakePage::default(),
            previous: None,
            results_body,
            restart_status: 200,
            log: Vec::new(),
            ticker_running: false,
        }
    }

    fn send(&mut self, event: RevealEvent) {
        self.ctl.handle(event);
        let view = reveal_engine::ViewModel::from_controller(&self.ctl);
        render_view(&view, self.previous.as_ref(), &mut self.page);
        self.previous = Some(view);

        for cmd in self.ctl.drain_commands() {
            self.log.push(cmd);
            match cmd {
                Command::StartTicker => {
                    assert!(!self.ticker_running, "ticker started twice without a stop");
                    self.ticker_running = true;
                }
                Command::StopTicker => self.ticker_running = false,
                Command::FetchResults => {
                    let outcome = Top10Response::from_json(self.results_body);
                    self.send(RevealEvent::ResultsArrived(outcome));
                }
                Command::PostRestart => {
                    let outcome = match self.restart_status {
                        200..=299 => Ok(()),
                        status => Err(RevealError::RestartRejected { status }),
                    };
                    self.send(RevealEvent::RestartFinished(outcome));
                }
                Command::LaunchConfetti | Command::ClearEffects | Command::Flash => {}
            }
        }
    }

    fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            if self.ticker_running {
                self.send(RevealEvent::Tick);
            }
        }
    }

    fn count(&self, cmd: Command) -> usize {
        self.log.iter().filter(|&&c| c == cmd).count()
    }
}

#[test]
fn locked_after_thirty_ticks_shows_backend_message() {
    let mut h = Harness::new(LOCKED_BODY);
    h.send(RevealEvent::Start);
    h.tick_n(30);

    assert_eq!(h.ctl.phase(), Phase::Countdown);
    assert_eq!(h.page.section, Some(Section::Countdown));
    assert_eq!(h.page.status, "Case files are sealed. Investigation in progress...");
    assert_eq!(h.page.timer, "00:00");
    assert_eq!(h.count(Command::FetchResults), 1);
    assert!(!h.ticker_running, "countdown does not resume after LOCKED");
}

#[test]
fn open_after_thirty_ticks_renders_three_cards_in_order() {
    let mut h = Harness::new(OPEN_BODY);
    h.send(RevealEvent::Start);
    h.tick_n(30);

    assert_eq!(h.ctl.phase(), Phase::Revealed);
    assert_eq!(h.page.section, Some(Section::Results));
    let names: Vec<_> = h.page.cards.iter().map(|c| c.team.as_str()).collect();
    assert_eq!(names, ["Debug Detectives", "Code Sleuths", "Cyber Investigators"]);
    let ranks: Vec<_> = h.page.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);
    assert_eq!(h.count(Command::LaunchConfetti), 1);
}

#[test]
fn extra_ticks_at_zero_never_poll_again() {
    let mut h = Harness::new(LOCKED_BODY);
    h.send(RevealEvent::Start);
    h.tick_n(30);
    // a late interval callback after teardown
    for _ in 0..5 {
        h.send(RevealEvent::Tick);
    }
    assert_eq!(h.count(Command::FetchResults), 1);
}

#[test]
fn malformed_body_surfaces_error_on_countdown() {
    let mut h = Harness::new("<!doctype html><title>502</title>");
    h.send(RevealEvent::Start);
    h.tick_n(30);

    assert_eq!(h.page.section, Some(Section::Countdown));
    assert_eq!(h.page.status_tone, Some(StatusTone::Error));
    assert!(h.page.cards.is_empty());
}

#[test]
fn restart_after_reveal_starts_a_fresh_countdown() {
    let mut h = Harness::new(OPEN_BODY);
    h.send(RevealEvent::Start);
    h.tick_n(30);
    h.send(RevealEvent::RestartRequested);

    assert_eq!(h.page.section, Some(Section::Countdown));
    assert_eq!(h.page.timer, "00:30");
    assert!(!h.page.urgent, "a fresh countdown starts calm");
    assert!(h.page.cards.is_empty());
    assert!(h.ticker_running);
    assert_eq!(h.count(Command::ClearEffects), 1);

    // and the whole cycle works again
    h.tick_n(30);
    assert_eq!(h.ctl.phase(), Phase::Revealed);
    assert_eq!(h.count(Command::FetchResults), 2);
}

#[test]
fn rejected_restart_keeps_results_on_screen() {
    let mut h = Harness::new(OPEN_BODY);
    h.restart_status = 503;
    h.send(RevealEvent::Start);
    h.tick_n(30);
    h.send(RevealEvent::RestartRequested);

    assert_eq!(h.ctl.phase(), Phase::Revealed);
    assert_eq!(h.page.section, Some(Section::Results));
    assert_eq!(h.page.cards.len(), 3);
    assert_eq!(h.page.status, "❌ Failed to restart investigation");
    assert_eq!(h.page.status_tone, Some(StatusTone::Error));
    assert!(h.page.countdown_visible, "the failure message must be on screen");
    assert!(!h.ticker_running);
}
