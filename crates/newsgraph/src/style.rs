//! Visual rules shared by the layout engine and the renderers.
//!
//! Everything here is a pure function of node or edge fields plus a
//! [`Theme`]. Lookups go through exhaustive matches, so a new
//! [`EntityType`] or [`RelationKind`] variant fails to compile until it is
//! given a style.

use serde::Deserialize;

use newsgraph_core::{
    color::Color,
    graph::{EntityType, RelationKind},
    stroke::{StrokeDefinition, StrokeStyle},
    theme::Theme,
};

use crate::layout::{LayoutEdge, LayoutNode, NodeKind};

/// Entities mentioned more often than this get a count badge.
pub const MENTION_BADGE_THRESHOLD: u32 = 3;

/// Ellipsis appended to truncated labels.
pub const ELLIPSIS: char = '…';

fn css(value: &'static str) -> Color {
    Color::new(value).expect("palette entries are valid CSS colors")
}

/// Fill color of an entity node.
pub fn entity_color(entity_type: &EntityType, theme: Theme) -> Color {
    let (light, dark) = match entity_type {
        EntityType::Person => ("#dc2626", "#ef4444"),
        EntityType::Organization => ("#2563eb", "#3b82f6"),
        EntityType::Location => ("#059669", "#10b981"),
        EntityType::Concept => ("#db2777", "#ec4899"),
        EntityType::Time => ("#7c3aed", "#8b5cf6"),
        EntityType::Numerical => ("#d97706", "#f59e0b"),
        EntityType::Miscellaneous | EntityType::Other(_) => ("#4b5563", "#6b7280"),
    };
    css(theme.pick(light, dark))
}

/// Fill color of the document node.
pub fn document_color(theme: Theme) -> Color {
    css(theme.pick("#4f46e5", "#6366f1"))
}

/// Fill color of any node kind.
pub fn node_color(kind: &NodeKind, theme: Theme) -> Color {
    match kind {
        NodeKind::Document => document_color(theme),
        NodeKind::Entity(entity_type) => entity_color(entity_type, theme),
    }
}

/// Outline of a node: a strong outline for the document, a faint one otherwise.
pub fn node_stroke(node: &LayoutNode, theme: Theme) -> StrokeDefinition {
    let color = if node.is_document() {
        theme.pick("#1e293b", "#ffffff")
    } else {
        theme.pick("rgba(0, 0, 0, 0.2)", "rgba(255, 255, 255, 0.3)")
    };
    StrokeDefinition::solid(css(color), 2.0)
}

/// Stroke color of an edge.
///
/// Document links are a muted slate. Inferred relations are colored by
/// label, with violet for any label without its own color.
pub fn edge_color(edge: &LayoutEdge, theme: Theme) -> Color {
    if edge.is_document_link() {
        return css(theme.pick("rgba(100, 116, 139, 0.4)", "rgba(148, 163, 184, 0.3)"));
    }

    let (light, dark) = match edge.kind() {
        RelationKind::RelatedTo => ("rgba(79, 70, 229, 0.6)", "rgba(99, 102, 241, 0.6)"),
        RelationKind::LocatedIn => ("rgba(5, 150, 105, 0.6)", "rgba(16, 185, 129, 0.6)"),
        RelationKind::WorksFor => ("rgba(217, 119, 6, 0.6)", "rgba(245, 158, 11, 0.6)"),
        RelationKind::PartOf => ("rgba(220, 38, 38, 0.6)", "rgba(239, 68, 68, 0.6)"),
        RelationKind::MentionedIn | RelationKind::Other(_) => {
            ("rgba(124, 58, 237, 0.6)", "rgba(139, 92, 246, 0.6)")
        }
    };
    css(theme.pick(light, dark))
}

/// Element opacity of an edge.
pub fn edge_opacity(edge: &LayoutEdge) -> f32 {
    if edge.is_document_link() { 0.4 } else { 0.7 }
}

/// Full stroke of an edge. Relations between different rings are dashed.
pub fn edge_stroke(edge: &LayoutEdge, theme: Theme) -> StrokeDefinition {
    let stroke = StrokeDefinition::solid(edge_color(edge, theme), edge.stroke_width());
    if edge.cross_layer() && !edge.is_document_link() {
        stroke.with_style(StrokeStyle::ShortDashed)
    } else {
        stroke
    }
}

/// Stroke of the dashed guide circle drawn behind each ring.
pub fn ring_stroke(theme: Theme) -> StrokeDefinition {
    let color = theme.pick("rgba(100, 116, 139, 0.1)", "rgba(148, 163, 184, 0.1)");
    StrokeDefinition::dashed(css(color), 1.0)
}

pub fn background_color(theme: Theme) -> Color {
    css(theme.pick("#f8fafc", "#0f172a"))
}

pub fn label_color(theme: Theme) -> Color {
    css(theme.pick("#000000", "#ffffff"))
}

/// Halo drawn under label glyphs so they stay readable across edges.
pub fn label_halo(theme: Theme) -> StrokeDefinition {
    let color = theme.pick("rgba(255, 255, 255, 0.8)", "rgba(15, 23, 42, 0.8)");
    StrokeDefinition::solid(css(color), 3.0)
}

pub fn badge_color(theme: Theme) -> Color {
    css(theme.pick("#dc2626", "#ef4444"))
}

/// Label font size by ring: 12, 11, 10 and 9 for layers 0, 1, 2 and deeper.
pub fn label_font_size(layer: u32) -> f32 {
    match layer {
        0 => 12.0,
        1 => 11.0,
        2 => 10.0,
        _ => 9.0,
    }
}

pub fn show_mention_badge(node: &LayoutNode) -> bool {
    !node.is_document() && node.mention_count() > MENTION_BADGE_THRESHOLD
}

/// Truncates `name` to the label length allowed at `layer`.
///
/// Lengths count characters, not bytes. A truncated label keeps the first
/// `max` characters followed by [`ELLIPSIS`].
///
/// # Examples
///
/// ```
/// # use newsgraph::style::{LabelLimits, label_for};
/// let limits = LabelLimits::default();
/// assert_eq!(label_for("Test Article", 0, &limits), "Test Article");
/// assert_eq!(
///     label_for("A very long organization name exceeding limits", 1, &limits),
///     "A very long org…"
/// );
/// ```
pub fn label_for(name: &str, layer: u32, limits: &LabelLimits) -> String {
    let max = limits.max_chars(layer);
    match name.char_indices().nth(max) {
        Some((cut, _)) => {
            let mut label = name[..cut].to_string();
            label.push(ELLIPSIS);
            label
        }
        None => name.to_string(),
    }
}

/// Maximum label length per ring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelLimits {
    /// Layer 0.
    document: usize,
    /// Layer 1.
    inner: usize,
    /// Layers 2 and deeper.
    outer: usize,
}

impl Default for LabelLimits {
    fn default() -> Self {
        Self {
            document: 20,
            inner: 15,
            outer: 12,
        }
    }
}

impl LabelLimits {
    pub fn new(document: usize, inner: usize, outer: usize) -> Self {
        Self {
            document,
            inner,
            outer,
        }
    }

    pub fn max_chars(&self, layer: u32) -> usize {
        match layer {
            0 => self.document,
            1 => self.inner,
            _ => self.outer,
        }
    }
}

/// Edge thickness rules.
///
/// Document links: `max(strength * mention_factor, min_mention_width)`.
/// Relations: `max(strength * confidence_factor, min_relation_width)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeWidths {
    mention_factor: f32,
    min_mention_width: f32,
    confidence_factor: f32,
    min_relation_width: f32,
}

impl Default for EdgeWidths {
    fn default() -> Self {
        Self {
            mention_factor: 0.3,
            min_mention_width: 1.0,
            confidence_factor: 1.5,
            min_relation_width: 2.0,
        }
    }
}

impl EdgeWidths {
    pub fn width(&self, is_document_link: bool, strength: f32) -> f32 {
        if is_document_link {
            (strength * self.mention_factor).max(self.min_mention_width)
        } else {
            (strength * self.confidence_factor).max(self.min_relation_width)
        }
    }

    /// Width of an existing edge, derived from its strength and link type only.
    pub fn width_for(&self, edge: &LayoutEdge) -> f32 {
        self.width(edge.is_document_link(), edge.strength())
    }
}
