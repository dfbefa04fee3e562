use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::render::{request_animation_frame, AnimationFrame};

type Slot = Rc<RefCell<Option<AnimationFrame>>>;

/// A `requestAnimationFrame` loop.
///
/// The step closure receives the frame timestamp in milliseconds and returns
/// whether it wants another frame. Dropping the handle cancels the pending
/// frame and frees the closure.
pub struct FrameLoop {
    slot: Slot,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let slot: Slot = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&slot), Rc::new(RefCell::new(step)));
        Self { slot }
    }

    /// False once the step closure asked to stop.
    pub fn is_running(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

fn schedule<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, step: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let next = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let keep_going = {
            let mut f = step.borrow_mut();
            (&mut *f)(timestamp)
        };
        if keep_going {
            schedule(next, step);
        } else if let Some(slot) = next.upgrade() {
            slot.borrow_mut().take();
        }
    });
    *strong.borrow_mut() = Some(frame);
}

/// Converts absolute frame timestamps into time since the first frame.
#[derive(Debug, Default)]
pub struct Elapsed {
    origin: Option<f64>,
}

impl Elapsed {
    pub fn since_first(&mut self, timestamp: f64) -> f32 {
        let origin = *self.origin.get_or_insert(timestamp);
        (timestamp - origin) as f32
    }
}
