use crate::constants::PERSPECTIVE_PX;
use crate::core::{css_number, FrameOutput, SpotlightConfig};
use crate::dom;
use web_sys as web;

const BASE_TEXT_GRADIENT: &str = "linear-gradient(to bottom, white, rgba(255,255,255,0.5))";

/// DOM layers of one spotlight text: tilting heading, base text, glow
/// overlay and firefly particles.
pub struct SpotlightLayers {
    pub host: web::HtmlElement,
    heading: web::HtmlElement,
    glow: web::HtmlElement,
    particles: Vec<web::HtmlElement>,
}

impl SpotlightLayers {
    /// Build the layer tree inside `host`, replacing its current children.
    pub fn build(
        document: &web::Document,
        host: web::HtmlElement,
        text: &str,
        config: &SpotlightConfig,
    ) -> anyhow::Result<Self> {
        host.set_inner_html("");
        host.class_list()
            .add_1("spotlight-text")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let perspective = format!("{}px", css_number(PERSPECTIVE_PX));
        dom::set_styles(
            &host,
            &[
                ("position", "relative"),
                ("display", "inline-block"),
                ("perspective", perspective.as_str()),
                ("cursor", "default"),
                ("user-select", "none"),
            ],
        );

        let heading = dom::create_html(document, "h1", Some("spotlight-heading"))?;
        dom::set_styles(
            &heading,
            &[
                ("position", "relative"),
                ("transform-style", "preserve-3d"),
                ("color", "transparent"),
                ("background-image", BASE_TEXT_GRADIENT),
                ("-webkit-background-clip", "text"),
                ("background-clip", "text"),
            ],
        );

        let base = dom::create_html(document, "span", Some("spotlight-base"))?;
        base.set_text_content(Some(text));
        dom::set_styles(
            &base,
            &[("display", "block"), ("position", "relative"), ("z-index", "10")],
        );

        let glow = dom::create_html(document, "span", Some("spotlight-glow"))?;
        glow.set_text_content(Some(text));
        _ = glow.set_attribute("aria-hidden", "true");
        dom::set_styles(
            &glow,
            &[
                ("position", "absolute"),
                ("inset", "0"),
                ("display", "block"),
                ("color", "transparent"),
                ("-webkit-background-clip", "text"),
                ("background-clip", "text"),
                ("mix-blend-mode", "overlay"),
                ("pointer-events", "none"),
                ("z-index", "20"),
            ],
        );

        dom::append(&heading, &base)?;
        dom::append(&heading, &glow)?;

        let mut particles = Vec::with_capacity(config.particle_count);
        for _ in 0..config.particle_count {
            let p = dom::create_html(document, "div", Some("spotlight-firefly"))?;
            dom::set_styles(
                &p,
                &[
                    ("position", "absolute"),
                    ("top", "50%"),
                    ("left", "50%"),
                    ("width", "0.5rem"),
                    ("height", "0.5rem"),
                    ("border-radius", "9999px"),
                    ("background", "white"),
                    ("filter", "blur(1px)"),
                    ("pointer-events", "none"),
                    ("z-index", "30"),
                    ("opacity", "0"),
                ],
            );
            dom::append(&heading, &p)?;
            particles.push(p);
        }
        dom::append(&host, &heading)?;

        Ok(Self {
            host,
            heading,
            glow,
            particles,
        })
    }

    pub fn apply(&self, out: &FrameOutput, config: &SpotlightConfig) {
        let params = &out.params;
        _ = self
            .heading
            .style()
            .set_property("transform", &params.transform_css());
        _ = self.glow.style().set_property(
            "background-image",
            &params.spotlight_gradient_css(&config.spotlight_color, config.glow_radius_px),
        );
        for (el, p) in self.particles.iter().zip(out.particles.iter()) {
            let transform = format!(
                "translate(-50%, -50%) translate({}px, {}px) scale({})",
                css_number(p.offset.x),
                css_number(p.offset.y),
                css_number(p.scale)
            );
            let opacity = css_number(p.opacity * params.particle_layer_opacity);
            dom::set_styles(
                el,
                &[("transform", transform.as_str()), ("opacity", opacity.as_str())],
            );
        }
    }

    /// Remove the generated layers, leaving the host element in place.
    pub fn clear(&self) {
        self.heading.remove();
        _ = self.host.class_list().remove_1("spotlight-text");
    }
}
