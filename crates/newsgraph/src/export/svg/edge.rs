//! SVG rendering for edges.

use svg::node::element as svg_element;

use newsgraph_core::apply_stroke;

use super::Svg;
use crate::{
    export::Error,
    layout::{GraphLayout, LayoutEdge},
    style,
};

impl Svg {
    /// Renders an edge as a straight line between its endpoint centers.
    pub(super) fn render_edge(
        &self,
        edge: &LayoutEdge,
        layout: &GraphLayout,
    ) -> Result<svg_element::Line, Error> {
        let endpoint = |id: &str| {
            layout.node(id).map(|node| node.position()).ok_or_else(|| {
                Error::Render(format!(
                    "edge `{}` references unknown node `{id}`",
                    edge.id()
                ))
            })
        };
        let source = endpoint(edge.source_id())?;
        let target = endpoint(edge.target_id())?;

        let class = if edge.is_document_link() {
            "edge document-link"
        } else {
            "edge relation"
        };

        let line = svg_element::Line::new()
            .set("class", class)
            .set("data-type", edge.kind().as_str())
            .set("x1", source.x())
            .set("y1", source.y())
            .set("x2", target.x())
            .set("y2", target.y())
            .set("opacity", style::edge_opacity(edge));

        let stroke = style::edge_stroke(edge, layout.theme());
        Ok(apply_stroke!(line, &stroke))
    }
}
