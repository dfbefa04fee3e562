//! DOM-backed page renderer.

use gloo::timers::callback::Timeout;
use reveal_engine::{card_html, CardView, PageRenderer, RevealError, Section, StatusTone};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

// ---- Element ids expected in the page markup ----

pub const TIMER_ID: &str = "timer";
pub const STATUS_ID: &str = "statusText";
pub const COUNTDOWN_SECTION_ID: &str = "countdownSection";
pub const LOADING_SECTION_ID: &str = "loadingSection";
pub const RESULTS_SECTION_ID: &str = "resultsSection";
pub const CASE_FILES_ID: &str = "caseFiles";
pub const RESTART_BUTTON_ID: &str = "restartBtn";

const GOLD: &str = "#d4af37";
const ALERT_RED: &str = "#ff6b6b";

const FLASH_STYLE_ID: &str = "revealFlashKeyframes";
const FLASH_KEYFRAMES: &str = "@keyframes flash {
    0% { background-color: rgba(212, 175, 55, 0.1); }
    50% { background-color: rgba(212, 175, 55, 0.3); }
    100% { background-color: transparent; }
}";

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, RevealError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| RevealError::Dom(format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| RevealError::Dom(format!("#{id} has the wrong element type")))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("dom: failed to set {property}: {err:?}");
    }
}

/// Inject the `flash` keyframes used by the reveal effect. Once per page.
pub fn install_flash_keyframes(document: &Document) -> Result<(), RevealError> {
    if document.get_element_by_id(FLASH_STYLE_ID).is_some() {
        return Ok(());
    }
    let dom_err = |e: wasm_bindgen::JsValue| RevealError::Dom(format!("{e:?}"));
    let style = document.create_element("style").map_err(dom_err)?;
    style.set_id(FLASH_STYLE_ID);
    style.set_text_content(Some(FLASH_KEYFRAMES));
    let head = document
        .head()
        .ok_or_else(|| RevealError::Dom("document has no <head>".into()))?;
    head.append_child(&style).map_err(dom_err)?;
    Ok(())
}

/// Handles to every element the reveal page writes to.
pub struct DomPage {
    document: Document,
    timer: HtmlElement,
    status: HtmlElement,
    countdown_section: HtmlElement,
    loading_section: HtmlElement,
    results_section: HtmlElement,
    case_files: Element,
    restart_button: Option<HtmlElement>,
    /// Cards created by the last `set_cards`, waiting for their entrance.
    fresh_cards: Vec<HtmlElement>,
}

impl DomPage {
    pub fn locate(document: Document) -> Result<Self, RevealError> {
        Ok(Self {
            timer: element_by_id(&document, TIMER_ID)?,
            status: element_by_id(&document, STATUS_ID)?,
            countdown_section: element_by_id(&document, COUNTDOWN_SECTION_ID)?,
            loading_section: element_by_id(&document, LOADING_SECTION_ID)?,
            results_section: element_by_id(&document, RESULTS_SECTION_ID)?,
            case_files: element_by_id(&document, CASE_FILES_ID)?,
            restart_button: element_by_id(&document, RESTART_BUTTON_ID).ok(),
            fresh_cards: Vec::new(),
            document,
        })
    }

    pub fn restart_button(&self) -> Option<&HtmlElement> {
        self.restart_button.as_ref()
    }

    /// Cards that still need their entrance animation.
    pub fn take_fresh_cards(&mut self) -> Vec<HtmlElement> {
        std::mem::take(&mut self.fresh_cards)
    }

    /// Play the body flash; the returned timeout clears it again.
    pub fn flash(&self, duration_ms: u32) -> Option<Timeout> {
        let body = self.document.body()?;
        let secs = duration_ms as f32 / 1000.0;
        set_style(&body, "animation", &format!("flash {secs}s ease-out"));
        Some(Timeout::new(duration_ms, move || set_style(&body, "animation", "")))
    }

    pub fn clear_flash(&self) {
        if let Some(body) = self.document.body() {
            set_style(&body, "animation", "");
        }
    }

    fn build_card(&self, card: &CardView) -> Option<HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        el.set_class_name("case-file");
        el.set_inner_html(&card_html(card));
        set_style(&el, "opacity", "0");
        set_style(&el, "transform", "translateX(-20px)");
        Some(el)
    }
}

impl PageRenderer for DomPage {
    fn show_section(&mut self, section: Section, countdown_visible: bool) {
        let display = |on: bool| if on { "block" } else { "none" };
        set_style(&self.countdown_section, "display", display(countdown_visible));
        set_style(&self.loading_section, "display", display(section == Section::Loading));
        set_style(&self.results_section, "display", display(section == Section::Results));
    }

    fn set_timer(&mut self, text: &str, urgent: bool) {
        self.timer.set_text_content(Some(text));
        if urgent {
            set_style(&self.timer, "color", ALERT_RED);
            set_style(&self.timer, "animation", "pulse 1s infinite");
        } else {
            set_style(&self.timer, "color", GOLD);
            set_style(&self.timer, "animation", "");
        }
    }

    fn set_status(&mut self, text: &str, tone: StatusTone) {
        let color = match tone {
            StatusTone::Normal => GOLD,
            StatusTone::Error => ALERT_RED,
        };
        self.status.set_text_content(Some(text));
        set_style(&self.status, "color", color);
    }

    fn set_cards(&mut self, cards: &[CardView]) {
        self.case_files.set_inner_html("");
        self.fresh_cards.clear();
        for card in cards {
            let Some(el) = self.build_card(card) else {
                log::warn!("dom: could not build card #{}", card.rank);
                continue;
            };
            if let Err(err) = self.case_files.append_child(&el) {
                log::warn!("dom: could not append card #{}: {err:?}", card.rank);
                continue;
            }
            self.fresh_cards.push(el);
        }
    }

    fn set_restart_enabled(&mut self, enabled: bool) {
        if let Some(button) = self
            .restart_button
            .as_ref()
            .and_then(|b| b.dyn_ref::<HtmlButtonElement>())
        {
            button.set_disabled(!enabled);
        }
    }
}
