use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

/// requestAnimationFrame loop owned by a mounted component.
///
/// The tick receives the time since the previous frame and returns whether
/// the loop should continue. Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    name: &'static str,
    slot: FrameSlot,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start<F>(name: &'static str, tick: F) -> Self
    where
        F: FnMut(Duration) -> bool + 'static,
    {
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        schedule(
            slot.clone(),
            running.clone(),
            Rc::new(RefCell::new(tick)),
            Instant::now(),
        );
        log::info!("[frame] {} loop started", name);
        Self {
            name,
            slot,
            running,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        if self.running.replace(false) {
            self.slot.borrow_mut().take();
            log::info!("[frame] {} loop stopped", self.name);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<F>(slot: FrameSlot, running: Rc<Cell<bool>>, tick: Rc<RefCell<F>>, last: Instant)
where
    F: FnMut(Duration) -> bool + 'static,
{
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |_timestamp| {
        // handle of the frame being run; released once this callback is done
        let current = next_slot.borrow_mut().take();
        if !running.get() {
            return;
        }
        let now = Instant::now();
        let keep_going = {
            let mut on_frame = tick.borrow_mut();
            (*on_frame)(now - last)
        };
        if keep_going && running.get() {
            schedule(next_slot, running, tick, now);
        } else {
            running.set(false);
        }
        drop(current);
    });
    *slot.borrow_mut() = Some(frame);
}
