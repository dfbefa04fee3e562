//! Confetti on a fixed full-window 2D canvas.

use std::cell::RefCell;
use std::rc::Rc;

use reveal_engine::{step_and_draw_confetti, ConfettiRenderer, ConfettiSprite, ConfettiState, RevealError};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::dom::set_style;
use crate::frame::FrameLoop;

pub const CANVAS_ID: &str = "confettiCanvas";

pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Reuse `#confettiCanvas` if the page has one, otherwise create it.
    pub fn attach(window: Window, document: &Document) -> Result<Self, RevealError> {
        let dom_err = |e: wasm_bindgen::JsValue| RevealError::Dom(format!("{e:?}"));
        let canvas = match document.get_element_by_id(CANVAS_ID) {
            Some(el) => el
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| RevealError::Dom(format!("#{CANVAS_ID} is not a canvas")))?,
            None => {
                let canvas = document
                    .create_element("canvas")
                    .map_err(dom_err)?
                    .dyn_into::<HtmlCanvasElement>()
                    .map_err(|_| RevealError::Dom("created element is not a canvas".into()))?;
                canvas.set_id(CANVAS_ID);
                let body = document
                    .body()
                    .ok_or_else(|| RevealError::Dom("document has no <body>".into()))?;
                body.append_child(&canvas).map_err(dom_err)?;
                canvas
            }
        };
        for (property, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "1000"),
            ("display", "none"),
        ] {
            set_style(&canvas, property, value);
        }
        let ctx = canvas
            .get_context("2d")
            .map_err(dom_err)?
            .ok_or_else(|| RevealError::Dom("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RevealError::Dom("unexpected context type".into()))?;
        Ok(Self { window, canvas, ctx })
    }

    fn window_dimension(&self, value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }

    fn fit_to_window(&self) {
        let (w, h) = self.size();
        let (w, h) = (w as u32, h as u32);
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }
}

impl ConfettiRenderer for CanvasSurface {
    fn draw(&mut self, sprites: &[ConfettiSprite]) {
        self.fit_to_window();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        for s in sprites {
            let half = s.size as f64 / 2.0;
            ctx.save();
            // Only fails on non-finite input, which the particle step never produces.
            let _ = ctx.translate(s.x as f64, s.y as f64);
            let _ = ctx.rotate(s.rotation as f64);
            ctx.set_global_alpha(s.alpha as f64);
            ctx.set_fill_style_str(s.color);
            ctx.fill_rect(-half, -half, s.size as f64, s.size as f64);
            ctx.restore();
        }
    }

    fn set_visible(&mut self, visible: bool) {
        set_style(&self.canvas, "display", if visible { "block" } else { "none" });
    }

    fn size(&self) -> (f32, f32) {
        (
            self.window_dimension(self.window.inner_width()),
            self.window_dimension(self.window.inner_height()),
        )
    }
}

/// Particle state, its surface, and the frame loop driving both.
pub struct ConfettiLayer {
    state: Rc<RefCell<ConfettiState>>,
    surface: Rc<RefCell<CanvasSurface>>,
    frames: Option<FrameLoop>,
}

impl ConfettiLayer {
    pub fn new(seed: u64, surface: CanvasSurface) -> Self {
        let (w, h) = surface.size();
        Self {
            state: Rc::new(RefCell::new(ConfettiState::new(seed, w, h))),
            surface: Rc::new(RefCell::new(surface)),
            frames: None,
        }
    }

    /// Fire both corner bursts. Joins a burst that is still falling.
    pub fn launch(&mut self, count: usize) {
        {
            let (w, h) = self.surface.borrow().size();
            let mut state = self.state.borrow_mut();
            state.set_viewport(w, h);
            state.spawn_burst(count);
            log::debug!("confetti: {} particles live", state.len());
        }
        self.surface.borrow_mut().set_visible(true);

        if self.frames.as_ref().is_some_and(FrameLoop::is_running) {
            return;
        }
        let state = Rc::clone(&self.state);
        let surface = Rc::clone(&self.surface);
        let mut scratch = Vec::new();
        self.frames = Some(FrameLoop::start(move |_| {
            let (Ok(mut state), Ok(mut surface)) = (state.try_borrow_mut(), surface.try_borrow_mut()) else {
                return true;
            };
            step_and_draw_confetti(&mut state, &mut scratch, &mut *surface)
        }));
    }

    /// Drop every particle and hide the canvas.
    pub fn clear(&mut self) {
        self.frames = None;
        self.state.borrow_mut().clear();
        let mut surface = self.surface.borrow_mut();
        surface.draw(&[]);
        surface.set_visible(false);
    }
}
