use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use reveal_engine::{render_view, Command, Phase, RevealConfig, RevealController, RevealError, RevealEvent, ViewModel};
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "confetti")]
use crate::confetti::{CanvasSurface, ConfettiLayer};
use crate::dom::{self, DomPage};
use crate::frame::FrameLoop;
use crate::{entrance, http, typewriter};

/// Routes an event back into the page's runner from a timer, a listener or
/// a finished request.
pub type Dispatch = fn(RevealEvent);

/// Owns the controller and every browser resource acting on its behalf.
///
/// wasm-bindgen cannot hand a `&mut` across callbacks, so `lib.rs` keeps the
/// runner in a `thread_local!` and callbacks re-enter through [`Dispatch`].
/// Dropping the runner stops its ticker, loops, timeout and listener.
pub struct RevealRunner {
    controller: RevealController,
    page: DomPage,
    /// The view last pushed to the page.
    shown: Option<ViewModel>,
    dispatch: Dispatch,
    ticker: Option<Interval>,
    #[cfg(feature = "confetti")]
    confetti: Option<ConfettiLayer>,
    entrance: Option<FrameLoop>,
    _title: Option<FrameLoop>,
    flash: Option<Timeout>,
    _restart_click: Option<EventListener>,
}

impl RevealRunner {
    /// Locate the page elements and draw the sealed countdown.
    pub fn mount(config: RevealConfig, dispatch: Dispatch) -> Result<Self, RevealError> {
        let window = web_sys::window().ok_or_else(|| RevealError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| RevealError::Dom("no document".into()))?;
        dom::install_flash_keyframes(&document)?;
        let page = DomPage::locate(document.clone())?;

        #[cfg(feature = "confetti")]
        let confetti = match CanvasSurface::attach(window, &document) {
            Ok(surface) => Some(ConfettiLayer::new(config.seed, surface)),
            Err(err) => {
                log::warn!("confetti disabled: {err}");
                None
            }
        };

        let title = typewriter::play(&document, &config);
        let restart_click = match page.restart_button() {
            Some(button) => Some(EventListener::new(button, "click", move |_| {
                dispatch(RevealEvent::RestartRequested)
            })),
            None => {
                log::warn!("no #{} on the page, restart only via reveal_restart()", dom::RESTART_BUTTON_ID);
                None
            }
        };

        let mut runner = Self {
            controller: RevealController::new(config),
            page,
            shown: None,
            dispatch,
            ticker: None,
            #[cfg(feature = "confetti")]
            confetti,
            entrance: None,
            _title: title,
            flash: None,
            _restart_click: restart_click,
        };
        runner.render();
        Ok(runner)
    }

    /// Feed one event, update the page, then carry out the resulting commands.
    pub fn dispatch(&mut self, event: RevealEvent) {
        self.controller.handle(event);
        self.render();
        for command in self.controller.drain_commands() {
            self.execute(command);
        }
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.controller.countdown().seconds_remaining()
    }

    fn render(&mut self) {
        let view = ViewModel::from_controller(&self.controller);
        render_view(&view, self.shown.as_ref(), &mut self.page);
        self.shown = Some(view);

        let fresh = self.page.take_fresh_cards();
        if !fresh.is_empty() {
            let plan = entrance::plan_from(self.controller.config());
            self.entrance = entrance::play(plan, fresh);
        }
    }

    fn execute(&mut self, command: Command) {
        log::debug!("runner: {command:?}");
        let dispatch = self.dispatch;
        let config = self.controller.config();
        match command {
            Command::StartTicker => {
                // At most one interval: the old one is cancelled first.
                self.ticker = None;
                self.ticker = Some(Interval::new(config.tick_interval_ms, move || {
                    dispatch(RevealEvent::Tick)
                }));
            }
            Command::StopTicker => {
                self.ticker = None;
            }
            Command::FetchResults => {
                let url = config.results_url.clone();
                spawn_local(async move {
                    let outcome = http::fetch_results(&url).await;
                    dispatch(RevealEvent::ResultsArrived(outcome));
                });
            }
            Command::PostRestart => {
                let url = config.restart_url.clone();
                spawn_local(async move {
                    let outcome = http::post_restart(&url).await;
                    dispatch(RevealEvent::RestartFinished(outcome));
                });
            }
            Command::LaunchConfetti => {
                #[cfg(feature = "confetti")]
                {
                    let count = config.burst_size;
                    if let Some(layer) = self.confetti.as_mut() {
                        layer.launch(count);
                    }
                }
            }
            Command::Flash => {
                self.flash = self.page.flash(config.flash_duration_ms);
            }
            Command::ClearEffects => {
                #[cfg(feature = "confetti")]
                {
                    if let Some(layer) = self.confetti.as_mut() {
                        layer.clear();
                    }
                }
                self.entrance = None;
                self.flash = None;
                self.page.clear_flash();
            }
        }
    }
}
