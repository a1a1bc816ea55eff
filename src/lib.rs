#![cfg(target_arch = "wasm32")]
use crate::core::SpotlightConfig;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;
mod spotlight;

use spotlight::SpotlightMount;

thread_local! {
    // Page-lifetime mounts created at start; released on page unload only.
    static PAGE: RefCell<Option<page::PageMount>> = const { RefCell::new(None) };
    static DECLARED: RefCell<Vec<SpotlightMount>> = const { RefCell::new(Vec::new()) };
}

/// Spotlight tilt text mounted into a host element.
///
/// Props are `text` and an optional `spotlightColor`; a missing or blank
/// colour falls back to a semi-transparent white.
#[wasm_bindgen]
pub struct SpotlightText {
    inner: Option<SpotlightMount>,
}

#[wasm_bindgen]
impl SpotlightText {
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: web::HtmlElement,
        text: String,
        spotlight_color: Option<String>,
    ) -> Result<SpotlightText, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let config = SpotlightConfig::with_color(spotlight_color.as_deref());
        let mount = SpotlightMount::mount(&document, host, &text, config)
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        Ok(SpotlightText { inner: Some(mount) })
    }

    /// Stop the frame loop, remove listeners and generated layers.
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.as_ref().map(|m| m.is_active()).unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn hovering(&self) -> bool {
        self.inner.as_ref().map(|m| m.is_hovering()).unwrap_or(false)
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("spotlight-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = page::mount(&window, &document)?;
    PAGE.with(|p| *p.borrow_mut() = Some(page));

    let mounts = mount_declared(&document)?;
    log::info!("[spotlight] {} declared instance(s)", mounts.len());
    DECLARED.with(|d| d.borrow_mut().extend(mounts));
    Ok(())
}

/// Mount every `[data-spotlight-text]` element in the document.
fn mount_declared(document: &web::Document) -> anyhow::Result<Vec<SpotlightMount>> {
    let nodes = document
        .query_selector_all("[data-spotlight-text]")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut mounts = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(host) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let text = host.get_attribute("data-spotlight-text").unwrap_or_default();
        let color = host.get_attribute("data-spotlight-color");
        let config = SpotlightConfig::with_color(color.as_deref());
        match SpotlightMount::mount(document, host, &text, config) {
            Ok(m) => mounts.push(m),
            Err(e) => log::warn!("[spotlight] mount failed: {:?}", e),
        }
    }
    Ok(mounts)
}
