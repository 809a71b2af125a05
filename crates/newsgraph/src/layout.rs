//! Positioned graph model produced by the layout engine.
//!
//! A [`GraphLayout`] holds one document node at the canvas center (layer 0)
//! surrounded by rings of entity nodes (layers 1 and up), plus the edges
//! between them. Every edge endpoint names a node of the same layout.

mod engine;
mod rank;

pub use engine::LayoutEngine;
pub use rank::{rank_entities, type_priority};

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use newsgraph_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    graph::{EntityType, RelationKind},
    theme::Theme,
};

/// What a node stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Entity(EntityType),
}

impl NodeKind {
    /// Display name of the kind: `"Document"` or the entity type label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Document => "Document",
            Self::Entity(entity_type) => entity_type.as_str(),
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A positioned, styled node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    id: String,
    name: String,
    label: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    layer: u32,
    x: f32,
    y: f32,
    radius: f32,
    color: Color,
    /// Zero for the document node.
    mention_count: u32,
    importance: f32,
}

impl LayoutNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full, untruncated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display label, truncated according to the node's layer.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The entity type, or `None` for the document node.
    pub fn entity_type(&self) -> Option<&EntityType> {
        match &self.kind {
            NodeKind::Document => None,
            NodeKind::Entity(entity_type) => Some(entity_type),
        }
    }

    pub fn is_document(&self) -> bool {
        self.kind == NodeKind::Document
    }

    pub fn layer(&self) -> u32 {
        self.layer
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mention_count(&self) -> u32 {
        self.mention_count
    }

    pub fn importance(&self) -> f32 {
        self.importance
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::around(self.position(), self.radius)
    }
}

/// A styled connection between two nodes of the same layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEdge {
    id: String,
    source_id: String,
    target_id: String,
    #[serde(rename = "type")]
    kind: RelationKind,
    strength: f32,
    stroke_width: f32,
    cross_layer: bool,
    is_document_link: bool,
}

impl LayoutEdge {
    /// `"{source}-{target}"`. Not guaranteed unique when the input repeats a relation.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn kind(&self) -> &RelationKind {
        &self.kind
    }

    /// Raw weight: the mention count for document links, the confidence otherwise.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// `true` when the endpoints sit in different layers.
    pub fn cross_layer(&self) -> bool {
        self.cross_layer
    }

    /// `true` for the synthetic `MENTIONED_IN` link from an entity to the document.
    pub fn is_document_link(&self) -> bool {
        self.is_document_link
    }

    /// Returns the id at the other end of the edge, if `node_id` is one of its endpoints.
    pub fn opposite(&self, node_id: &str) -> Option<&str> {
        if self.source_id == node_id {
            Some(&self.target_id)
        } else if self.target_id == node_id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}

/// Entity nodes sharing a type, in layout order.
#[derive(Debug, Clone)]
pub struct EntityGroup<'a> {
    entity_type: &'a EntityType,
    nodes: Vec<&'a LayoutNode>,
}

impl<'a> EntityGroup<'a> {
    pub fn entity_type(&self) -> &'a EntityType {
        self.entity_type
    }

    pub fn nodes(&self) -> &[&'a LayoutNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The complete result of one layout pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLayout {
    canvas_width: f32,
    canvas_height: f32,
    theme: Theme,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    ring_radii: Vec<f32>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GraphLayout {
    /// The first node must be the document, and `ring_radii` must hold one
    /// entry per populated layer.
    fn new(
        canvas: Size,
        theme: Theme,
        nodes: Vec<LayoutNode>,
        edges: Vec<LayoutEdge>,
        ring_radii: Vec<f32>,
    ) -> Self {
        debug_assert!(nodes.first().is_some_and(LayoutNode::is_document));

        let index = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id.clone(), idx))
            .collect();

        Self {
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
            theme,
            nodes,
            edges,
            ring_radii,
            index,
        }
    }

    pub fn canvas(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// All nodes, document first, then entities ring by ring in rank order.
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    /// Document links first, then relations in input order.
    pub fn edges(&self) -> &[LayoutEdge] {
        &self.edges
    }

    /// The document node at the center.
    pub fn document(&self) -> &LayoutNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Entity nodes, in layout order.
    pub fn entities(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(|node| !node.is_document())
    }

    /// Number of entity rings, i.e. the deepest layer index. Zero without entities.
    pub fn layer_count(&self) -> u32 {
        self.nodes.iter().map(LayoutNode::layer).max().unwrap_or(0)
    }

    pub fn nodes_in_layer(&self, layer: u32) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter().filter(move |node| node.layer == layer)
    }

    /// Unperturbed radius of every populated ring, innermost first, as
    /// configured when the layout was computed.
    pub fn ring_radii(&self) -> &[f32] {
        &self.ring_radii
    }

    /// Ids of the nodes sharing an edge with `id`, in edge order, without repeats.
    ///
    /// This is the neighbourhood highlighted when a node is focused.
    pub fn connected_node_ids(&self, id: &str) -> Vec<&str> {
        let neighbours: IndexSet<&str> = self
            .edges
            .iter()
            .filter_map(|edge| edge.opposite(id))
            .collect();
        neighbours.into_iter().collect()
    }

    /// Entity nodes grouped by type, groups in order of first appearance.
    pub fn entity_groups(&self) -> Vec<EntityGroup<'_>> {
        let mut groups: IndexMap<&EntityType, Vec<&LayoutNode>> = IndexMap::new();
        for node in &self.nodes {
            if let Some(entity_type) = node.entity_type() {
                groups.entry(entity_type).or_default().push(node);
            }
        }

        groups
            .into_iter()
            .map(|(entity_type, nodes)| EntityGroup { entity_type, nodes })
            .collect()
    }

    /// Smallest bounds covering the canvas and every node circle.
    pub fn bounds(&self) -> Bounds {
        self.nodes
            .iter()
            .map(LayoutNode::bounds)
            .fold(Bounds::from_size(self.canvas()), |acc, bounds| {
                acc.merge(&bounds)
            })
    }
}
