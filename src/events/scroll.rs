use crate::core::{css_number, scroll_progress, HeroTransform};
use crate::dom;
use gloo::events::EventListener;
use web_sys as web;

pub fn apply_hero_transform(content: &web::HtmlElement, t: HeroTransform) {
    let transform = format!(
        "translateY({}px) scale({})",
        css_number(t.translate_y_px),
        css_number(t.scale)
    );
    let opacity = css_number(t.opacity);
    dom::set_styles(
        content,
        &[("transform", transform.as_str()), ("opacity", opacity.as_str())],
    );
}

/// Fade, shrink and lower the hero content as the hero scrolls out of view.
pub fn wire_hero_scroll(
    window: &web::Window,
    hero: web::HtmlElement,
    content: web::HtmlElement,
) -> EventListener {
    let update = move || {
        let rect = dom::layout_rect(&hero);
        apply_hero_transform(&content, HeroTransform::at(scroll_progress(rect.top, rect.height)));
    };
    update();
    EventListener::new(window, "scroll", move |_ev: &web::Event| update())
}
