use crate::core::SpotlightEffect;
use crate::dom;
use glam::Vec2;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer listeners on a spotlight host. Dropping removes them.
pub struct PointerListeners {
    _enter: EventListener,
    _move: EventListener,
    _leave: EventListener,
}

pub fn wire_pointer_handlers(
    host: &web::HtmlElement,
    effect: Rc<RefCell<SpotlightEffect>>,
) -> PointerListeners {
    PointerListeners {
        _enter: wire_pointerenter(host, effect.clone()),
        _move: wire_pointermove(host, effect.clone()),
        _leave: wire_pointerleave(host, effect),
    }
}

fn wire_pointerenter(
    host: &web::HtmlElement,
    effect: Rc<RefCell<SpotlightEffect>>,
) -> EventListener {
    EventListener::new(host, "pointerenter", move |_ev: &web::Event| {
        effect.borrow_mut().pointer_enter();
    })
}

fn wire_pointermove(
    host: &web::HtmlElement,
    effect: Rc<RefCell<SpotlightEffect>>,
) -> EventListener {
    let target = host.clone();
    EventListener::new(host, "pointermove", move |ev: &web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let rect = dom::layout_rect(&target);
        effect.borrow_mut().pointer_move(client, rect);
    })
}

fn wire_pointerleave(
    host: &web::HtmlElement,
    effect: Rc<RefCell<SpotlightEffect>>,
) -> EventListener {
    EventListener::new(host, "pointerleave", move |_ev: &web::Event| {
        let mut effect = effect.borrow_mut();
        log::debug!(
            "[spotlight] leave at {:?}, target {:?}",
            effect.smoothed_offset(),
            effect.target_offset()
        );
        effect.pointer_leave();
    })
}
