//! SVG export backend.
//!
//! [`SvgBuilder`] resolves rendering options from [`StyleConfig`] into an
//! [`Svg`] exporter. Drawing order, bottom to top:
//! background, layer guide rings, edges, nodes.

mod edge;
mod node;

use log::{debug, info};
use svg::{self, node::element as svg_element};

use newsgraph_core::{apply_stroke, color::Color, geometry::Bounds, theme::Theme};

use super::{Error, Exporter};
use crate::{
    config::StyleConfig,
    layout::GraphLayout,
    style,
};

/// Extra space around the content so labels below outer nodes stay visible.
const MARGIN: f32 = 40.0;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background colour is not a
    /// valid CSS colour.
    pub fn build(self) -> Result<Svg, Error> {
        let style = self.style.cloned().unwrap_or_default();
        let background_override = style.background_color().map_err(Error::Render)?;

        Ok(Svg {
            background_override,
            show_layer_rings: style.show_layer_rings(),
            show_mention_badges: style.show_mention_badges(),
        })
    }
}

/// SVG exporter for [`GraphLayout`]s.
#[derive(Debug, Clone)]
pub struct Svg {
    background_override: Option<Color>,
    show_layer_rings: bool,
    show_mention_badges: bool,
}

impl Svg {
    /// Renders the complete layout to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if an edge references a node missing from the
    /// layout.
    pub fn render_layout(&self, layout: &GraphLayout) -> Result<svg::Document, Error> {
        let theme = layout.theme();
        let view = layout.bounds().inflate(MARGIN);
        debug!(
            min_x = view.min_x(),
            min_y = view.min_y(),
            width = view.width(),
            height = view.height();
            "SVG view box"
        );

        let doc = svg::Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width())
            .set("height", view.height());

        let mut doc = doc.add(self.render_background(view, theme));

        if self.show_layer_rings {
            doc = doc.add(self.render_layer_rings(layout));
        }

        let mut edges = svg_element::Group::new().set("class", "edges");
        for edge in layout.edges() {
            edges = edges.add(self.render_edge(edge, layout)?);
        }

        let mut nodes = svg_element::Group::new().set("class", "nodes");
        for node in layout.nodes() {
            nodes = nodes.add(self.render_node(node, theme));
        }

        Ok(doc.add(edges).add(nodes))
    }

    fn render_background(&self, view: Bounds, theme: Theme) -> svg_element::Rectangle {
        let fill = self
            .background_override
            .unwrap_or_else(|| style::background_color(theme));

        svg_element::Rectangle::new()
            .set("x", view.min_x())
            .set("y", view.min_y())
            .set("width", view.width())
            .set("height", view.height())
            .set("fill", fill)
    }

    /// One dashed circle per populated ring, centered on the document.
    fn render_layer_rings(&self, layout: &GraphLayout) -> svg_element::Group {
        let center = layout.document().position();
        let stroke = style::ring_stroke(layout.theme());

        layout
            .ring_radii()
            .iter()
            .enumerate()
            .fold(
                svg_element::Group::new().set("class", "layer-rings"),
                |group, (idx, radius)| {
                    let ring = svg_element::Circle::new()
                        .set("data-layer", idx + 1)
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("r", *radius)
                        .set("fill", "none")
                        .set("opacity", 0.3);
                    group.add(apply_stroke!(ring, &stroke))
                },
            )
    }
}

impl Exporter for Svg {
    fn export_layout(&mut self, layout: &GraphLayout) -> Result<String, Error> {
        let doc = self.render_layout(layout)?;
        debug!("SVG document rendered");

        let text = doc.to_string();
        info!(bytes = text.len(); "SVG rendered successfully");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use newsgraph_core::graph::{
        Entity, EntityType, GraphPayload, NewsDocument, RelationKind, Relationship,
    };
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{config::LayoutConfig, layout::LayoutEngine};

    fn layout(theme: Theme) -> GraphLayout {
        let payload = GraphPayload::new(
            Some(NewsDocument::new("d1", "Test Article")),
            vec![
                Entity::new("e1", "Alice", EntityType::Person, 5),
                Entity::new("e2", "Acme Corp", EntityType::Organization, 2),
            ],
            vec![Relationship::new("e1", "e2", RelationKind::WorksFor)],
        );
        LayoutEngine::default()
            .compute_payload_with_rng(&payload, theme, &mut StdRng::seed_from_u64(3))
            .unwrap()
    }

    fn render(style: &StyleConfig, theme: Theme) -> String {
        SvgBuilder::new()
            .with_style(style)
            .build()
            .unwrap()
            .export_layout(&layout(theme))
            .unwrap()
    }

    #[test]
    fn test_renders_all_elements() {
        let svg = render(&StyleConfig::default(), Theme::Light);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("class=\"layer-rings\""));
        assert_eq!(svg.matches("class=\"edge ").count(), 3);
        assert_eq!(svg.matches("class=\"node ").count(), 3);
        assert!(svg.contains("Test Article"));
        assert!(svg.contains("Alice"));
        // Alice has five mentions, Acme Corp only two
        assert_eq!(svg.matches("class=\"mention-badge\"").count(), 1);
    }

    #[test]
    fn test_rings_and_badges_can_be_disabled() {
        let style: StyleConfig = serde_json::from_str(
            r#"{ "show_layer_rings": false, "show_mention_badges": false }"#,
        )
        .unwrap();
        let svg = render(&style, Theme::Light);

        assert!(!svg.contains("layer-rings"));
        assert!(!svg.contains("mention-badge"));
    }

    #[test]
    fn test_theme_changes_background() {
        let light = render(&StyleConfig::default(), Theme::Light);
        let dark = render(&StyleConfig::default(), Theme::Dark);

        let light_fill = style::background_color(Theme::Light).to_string();
        let dark_fill = style::background_color(Theme::Dark).to_string();
        assert!(light.contains(&light_fill));
        assert!(dark.contains(&dark_fill));
        assert!(!dark.contains(&light_fill));
    }

    #[test]
    fn test_invalid_background_override() {
        let style: StyleConfig =
            serde_json::from_str(r#"{ "background_color": "not-a-color" }"#).unwrap();
        let result = SvgBuilder::new().with_style(&style).build();
        assert!(matches!(result, Err(Error::Render(_))));
    }

    #[test]
    fn test_document_only_layout_has_no_edges() {
        let payload = GraphPayload::new(Some(NewsDocument::new("d1", "Solo")), vec![], vec![]);
        let layout = LayoutEngine::default()
            .compute_payload_with_rng(&payload, Theme::Light, &mut StdRng::seed_from_u64(0))
            .unwrap();

        let svg = SvgBuilder::new().build().unwrap().export_layout(&layout).unwrap();
        assert_eq!(svg.matches("class=\"edge ").count(), 0);
        assert_eq!(svg.matches("class=\"node ").count(), 1);
        assert!(!svg.contains("data-layer"));
    }

    #[test]
    fn test_rings_follow_the_layout_geometry() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{ "base_radius": 333.0, "angle_jitter": 0.0 }"#).unwrap();
        let payload = GraphPayload::new(
            Some(NewsDocument::new("d1", "Doc")),
            vec![Entity::new("e1", "Alice", EntityType::Person, 1)],
            vec![],
        );
        let layout = LayoutEngine::new(config)
            .compute_payload_with_rng(&payload, Theme::Light, &mut StdRng::seed_from_u64(0))
            .unwrap();

        // Rendered without any layout settings, the ring still uses the computed radius
        let svg = SvgBuilder::new().build().unwrap().export_layout(&layout).unwrap();
        assert_eq!(layout.ring_radii(), &[333.0]);
        assert!(svg.contains("r=\"333\""));
    }
}
