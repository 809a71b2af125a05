//! SVG rendering for nodes.
//!
//! Each node is a group of, bottom to top: a drop shadow, the filled and
//! outlined circle, a small highlight, the label below the circle, and an
//! optional mention badge at the upper right.

use svg::node::element as svg_element;

use newsgraph_core::{apply_stroke, geometry::Point, theme::Theme};

use super::Svg;
use crate::{layout::LayoutNode, style};

const FONT_FAMILY: &str = "Arial, sans-serif";
const SHADOW_OFFSET: f32 = 2.0;
const LABEL_GAP: f32 = 20.0;
const BADGE_RADIUS: f32 = 8.0;
const BADGE_INSET: f32 = 5.0;

impl Svg {
    pub(super) fn render_node(&self, node: &LayoutNode, theme: Theme) -> svg_element::Group {
        let center = node.position();
        let radius = node.radius();

        let class = if node.is_document() {
            "node document"
        } else {
            "node entity"
        };

        let mut group = svg_element::Group::new()
            .set("class", class)
            .set("data-id", node.id())
            .set("data-type", node.kind().as_str())
            .set("data-layer", node.layer());

        let shadow = svg_element::Circle::new()
            .set("cx", center.x() + SHADOW_OFFSET)
            .set("cy", center.y() + SHADOW_OFFSET)
            .set("r", radius)
            .set("fill", "rgba(0, 0, 0, 0.1)")
            .set("opacity", 0.3);

        let body = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
            .set("fill", node.color())
            .set("opacity", 0.9);
        let body = apply_stroke!(body, &style::node_stroke(node, theme));

        let highlight = svg_element::Circle::new()
            .set("cx", center.x() - radius / 3.0)
            .set("cy", center.y() - radius / 3.0)
            .set("r", radius / 3.0)
            .set("fill", "rgba(255, 255, 255, 0.3)")
            .set("opacity", 0.6);

        group = group
            .add(shadow)
            .add(body)
            .add(highlight)
            .add(self.render_label(node, theme));

        if self.show_mention_badges && style::show_mention_badge(node) {
            group = group.add(render_badge(node, theme));
        }

        group
    }

    fn render_label(&self, node: &LayoutNode, theme: Theme) -> svg_element::Text {
        let position = node.position();
        let halo = style::label_halo(theme);
        let weight = if node.is_document() { "bold" } else { "normal" };

        let text = svg_element::Text::new(node.label())
            .set("x", position.x())
            .set("y", position.y() + node.radius() + LABEL_GAP)
            .set("text-anchor", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", style::label_font_size(node.layer()))
            .set("font-weight", weight)
            .set("fill", style::label_color(theme))
            .set("paint-order", "stroke");

        apply_stroke!(text, &halo)
    }
}

/// Mention count in a small circle on the node's upper right.
fn render_badge(node: &LayoutNode, theme: Theme) -> svg_element::Group {
    let offset = node.radius() - BADGE_INSET;
    let anchor = node.position().add_point(Point::new(offset, -offset));

    let circle = svg_element::Circle::new()
        .set("cx", anchor.x())
        .set("cy", anchor.y())
        .set("r", BADGE_RADIUS)
        .set("fill", style::badge_color(theme))
        .set("stroke", "#ffffff")
        .set("stroke-width", 2);

    let count = svg_element::Text::new(node.mention_count().to_string())
        .set("x", anchor.x())
        .set("y", anchor.y())
        .set("dy", 3)
        .set("text-anchor", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", 10)
        .set("font-weight", "bold")
        .set("fill", "#ffffff");

    svg_element::Group::new()
        .set("class", "mention-badge")
        .add(circle)
        .add(count)
}
