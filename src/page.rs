use crate::core::{
    counters_done, css_number, AmbientStyle, LoopClock, AMBIENT_LOOPS, FEATURES, STATS, STEPS,
};
use crate::dom;
use crate::events;
use crate::frame::FrameLoop;
use gloo::events::EventListener;
use std::time::Duration;
use web_sys as web;

/// Landing page wiring that lives as long as the page.
pub struct PageMount {
    _hero_scroll: Option<EventListener>,
    _ambient: Option<FrameLoop>,
}

pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<PageMount> {
    let counters = fill_stats(document)?;
    fill_steps(document)?;
    fill_features(document)?;

    let hero_scroll = match (
        dom::html_element_by_id(document, "hero"),
        dom::html_element_by_id(document, "hero-content"),
    ) {
        (Some(hero), Some(content)) => Some(events::wire_hero_scroll(window, hero, content)),
        _ => {
            log::warn!("[page] #hero or #hero-content missing; parallax disabled");
            None
        }
    };

    Ok(PageMount {
        _hero_scroll: hero_scroll,
        _ambient: start_ambient_loops(document, counters),
    })
}

/// Returns the value elements, which start at zero and count up.
fn fill_stats(document: &web::Document) -> anyhow::Result<Vec<web::HtmlElement>> {
    let Some(list) = dom::html_element_by_id(document, "stats") else {
        log::warn!("[page] #stats missing");
        return Ok(Vec::new());
    };
    list.set_inner_html("");
    let mut values = Vec::with_capacity(STATS.len());
    for stat in STATS.iter() {
        let item = dom::create_html(document, "div", Some("stat"))?;
        let value = dom::create_html(document, "div", Some("stat-value"))?;
        value.set_text_content(Some(&stat.display_value(0)));
        _ = value.set_attribute("aria-label", &stat.display());
        let label = dom::create_html(document, "div", Some("stat-label"))?;
        label.set_text_content(Some(stat.label));
        dom::append(&item, &value)?;
        dom::append(&item, &label)?;
        dom::append(&list, &item)?;
        values.push(value);
    }
    Ok(values)
}

fn fill_steps(document: &web::Document) -> anyhow::Result<()> {
    let Some(list) = dom::html_element_by_id(document, "steps") else {
        log::warn!("[page] #steps missing");
        return Ok(());
    };
    list.set_inner_html("");
    for (i, step) in STEPS.iter().enumerate() {
        let item = dom::create_html(document, "div", Some("step"))?;
        _ = item.set_attribute("data-step", &(i + 1).to_string());
        let title = dom::create_html(document, "h3", Some("step-title"))?;
        title.set_text_content(Some(step.title));
        let body = dom::create_html(document, "p", Some("step-description"))?;
        body.set_text_content(Some(step.description));
        dom::append(&item, &title)?;
        dom::append(&item, &body)?;
        dom::append(&list, &item)?;
    }
    Ok(())
}

fn fill_features(document: &web::Document) -> anyhow::Result<()> {
    let Some(list) = dom::html_element_by_id(document, "features") else {
        log::warn!("[page] #features missing");
        return Ok(());
    };
    list.set_inner_html("");
    for feature in FEATURES.iter() {
        let item = dom::create_html(document, "li", Some("feature"))?;
        item.set_text_content(Some(feature));
        dom::append(&list, &item)?;
    }
    Ok(())
}

struct AmbientTarget {
    element: web::HtmlElement,
    loops: Vec<(usize, LoopClock)>,
}

fn start_ambient_loops(
    document: &web::Document,
    mut counters: Vec<web::HtmlElement>,
) -> Option<FrameLoop> {
    let mut targets: Vec<AmbientTarget> = Vec::new();
    for (i, def) in AMBIENT_LOOPS.iter().enumerate() {
        if let Some(t) = targets
            .iter_mut()
            .find(|t| t.element.id() == def.element_id)
        {
            t.loops.push((i, def.clock()));
            continue;
        }
        match dom::html_element_by_id(document, def.element_id) {
            Some(element) => targets.push(AmbientTarget {
                element,
                loops: vec![(i, def.clock())],
            }),
            None => log::warn!("[page] #{} missing; ambient loop skipped", def.element_id),
        }
    }
    if targets.is_empty() && counters.is_empty() {
        return None;
    }
    let mut elapsed = Duration::ZERO;
    Some(FrameLoop::start("ambient", move |dt| {
        elapsed += dt;
        for (i, (el, stat)) in counters.iter().zip(STATS.iter()).enumerate() {
            el.set_text_content(Some(&stat.display_at(i, elapsed)));
        }
        if !counters.is_empty() && counters_done(elapsed) {
            counters.clear();
        }
        for t in targets.iter_mut() {
            let mut style = AmbientStyle::default();
            for (i, clock) in t.loops.iter_mut() {
                clock.advance(dt);
                let def = &AMBIENT_LOOPS[*i];
                style.apply(def.property, def.sample(clock));
            }
            let transform = format!(
                "translateY({}px) scale({})",
                css_number(style.translate_y_px),
                css_number(style.scale)
            );
            _ = t.element.style().set_property("transform", &transform);
            if let Some(o) = style.opacity {
                _ = t.element.style().set_property("opacity", &css_number(o));
            }
        }
        !(targets.is_empty() && counters.is_empty())
    }))
}
