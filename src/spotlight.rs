use crate::core::{SpotlightConfig, SpotlightEffect};
use crate::events::{self, PointerListeners};
use crate::frame::FrameLoop;
use crate::render::SpotlightLayers;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted spotlight text. Everything it acquired is released on drop.
pub struct SpotlightMount {
    effect: Rc<RefCell<SpotlightEffect>>,
    layers: Rc<SpotlightLayers>,
    frame: FrameLoop,
    _pointer: PointerListeners,
}

impl SpotlightMount {
    pub fn mount(
        document: &web::Document,
        host: web::HtmlElement,
        text: &str,
        config: SpotlightConfig,
    ) -> anyhow::Result<Self> {
        let layers = Rc::new(SpotlightLayers::build(document, host, text, &config)?);
        let effect = Rc::new(RefCell::new(SpotlightEffect::new(
            config,
            &mut rand::thread_rng(),
        )));
        let pointer = events::wire_pointer_handlers(&layers.host, effect.clone());

        let tick_effect = effect.clone();
        let tick_layers = layers.clone();
        let frame = FrameLoop::start("spotlight", move |dt| {
            let mut fx = tick_effect.borrow_mut();
            match fx.tick(dt) {
                Some(out) => {
                    tick_layers.apply(&out, &fx.config);
                    true
                }
                None => false,
            }
        });
        log::info!("[spotlight] mounted {:?}", text);
        Ok(Self {
            effect,
            layers,
            frame,
            _pointer: pointer,
        })
    }

    pub fn is_active(&self) -> bool {
        self.frame.is_running() && self.effect.borrow().is_mounted()
    }

    pub fn is_hovering(&self) -> bool {
        self.effect.borrow().hover() > 0.0
    }
}

impl Drop for SpotlightMount {
    fn drop(&mut self) {
        self.effect.borrow_mut().unmount();
        self.frame.stop();
        self.layers.clear();
        log::info!("[spotlight] unmounted");
    }
}
