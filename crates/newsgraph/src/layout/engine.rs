//! Radial layered layout engine
//!
//! The document sits at the canvas center. Ranked entities fill concentric
//! rings of bounded capacity, spread evenly by angle with a small random
//! perturbation so that edges through the center do not overlap exactly.

use std::{collections::HashMap, f32::consts::TAU};

use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use newsgraph_core::{
    geometry::Point,
    graph::{Entity, GraphPayload, NewsDocument, RelationKind, Relationship},
    theme::Theme,
};

use super::{GraphLayout, LayoutEdge, LayoutNode, NodeKind, rank};
use crate::{config::LayoutConfig, error::NewsGraphError, style};

/// Layout engine for news knowledge graphs.
///
/// The engine is stateless between calls: every call ranks, places and
/// styles the whole graph from scratch.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create a new layout engine with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out a decoded payload.
    ///
    /// Jitter comes from a [`StdRng`] seeded with [`LayoutConfig::seed`] when
    /// one is configured, and from the thread RNG otherwise.
    ///
    /// # Errors
    ///
    /// See [`LayoutEngine::compute`].
    pub fn compute_payload(
        &self,
        payload: &GraphPayload,
        theme: Theme,
    ) -> Result<GraphLayout, NewsGraphError> {
        match self.config.seed() {
            Some(seed) => {
                debug!(seed; "Using seeded jitter");
                self.compute_payload_with_rng(payload, theme, &mut StdRng::seed_from_u64(seed))
            }
            None => self.compute_payload_with_rng(payload, theme, &mut rand::rng()),
        }
    }

    /// Lays out a decoded payload, drawing jitter from `rng`.
    ///
    /// # Errors
    ///
    /// See [`LayoutEngine::compute`].
    pub fn compute_payload_with_rng<R: Rng>(
        &self,
        payload: &GraphPayload,
        theme: Theme,
        rng: &mut R,
    ) -> Result<GraphLayout, NewsGraphError> {
        self.compute(
            payload.news(),
            payload.entities(),
            payload.relationships(),
            theme,
            rng,
        )
    }

    /// Positions and styles a document with its entities and relationships.
    ///
    /// Duplicate entity ids keep their first occurrence. Relationships whose
    /// endpoints are not both laid out are dropped. Neither case is an error.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::InvalidInput`] when the document is missing
    /// or has an empty id, or when the configuration fails
    /// [`LayoutConfig::validate`].
    pub fn compute<R: Rng>(
        &self,
        document: Option<&NewsDocument>,
        entities: &[Entity],
        relationships: &[Relationship],
        theme: Theme,
        rng: &mut R,
    ) -> Result<GraphLayout, NewsGraphError> {
        self.config.validate()?;

        let document = document.ok_or_else(|| {
            NewsGraphError::InvalidInput("graph has no news document".to_string())
        })?;
        if document.id().trim().is_empty() {
            return Err(NewsGraphError::InvalidInput(
                "news document has an empty id".to_string(),
            ));
        }

        info!(
            document_id = document.id(),
            entities = entities.len(),
            relationships = relationships.len();
            "Computing graph layout"
        );

        let canvas = self.config.canvas();
        let center = canvas.center();

        let ranked = rank::rank_entities(rank::unique_entities(entities, document.id()));

        let mut nodes = Vec::with_capacity(ranked.len() + 1);
        let mut edges = Vec::with_capacity(ranked.len() + relationships.len());

        nodes.push(self.document_node(document, center, theme));

        let mut ring_radii = Vec::new();

        for (layer_index, layer) in ranked.chunks(self.config.layer_capacity()).enumerate() {
            let layer_number = layer_index as u32 + 1;
            let ring_radius = self.config.ring_radius(layer_number);
            ring_radii.push(ring_radius);
            debug!(
                layer = layer_number,
                entities = layer.len(),
                ring_radius;
                "Placing layer"
            );

            for (slot, entity) in layer.iter().enumerate() {
                let base_angle = slot as f32 / layer.len() as f32 * TAU;
                let angle = base_angle + jitter(rng, self.config.angle_jitter());
                let radius = ring_radius + jitter(rng, self.config.radius_jitter());
                let position = Point::from_polar(center, angle, radius);

                nodes.push(self.entity_node(entity, layer_number, position, theme));
                edges.push(self.document_link(entity, document));
            }
        }

        let layers: HashMap<&str, u32> = nodes
            .iter()
            .map(|node| (node.id.as_str(), node.layer))
            .collect();

        let mut dropped = 0usize;
        for relationship in relationships {
            let source = layers.get(relationship.source_id());
            let target = layers.get(relationship.target_id());

            match (source, target) {
                (Some(&source_layer), Some(&target_layer)) => {
                    edges.push(self.relationship_edge(
                        relationship,
                        source_layer != target_layer,
                    ));
                }
                _ => {
                    dropped += 1;
                    debug!(
                        source_id = relationship.source_id(),
                        target_id = relationship.target_id();
                        "Dropping relationship with unresolved endpoint"
                    );
                }
            }
        }

        let layout = GraphLayout::new(canvas, theme, nodes, edges, ring_radii);
        info!(
            nodes = layout.nodes().len(),
            edges = layout.edges().len(),
            layers = layout.layer_count(),
            dropped_relationships = dropped;
            "Layout calculated"
        );
        trace!(layout:?; "Computed layout");

        Ok(layout)
    }

    fn document_node(&self, document: &NewsDocument, center: Point, theme: Theme) -> LayoutNode {
        LayoutNode {
            id: document.id().to_string(),
            name: document.title().to_string(),
            label: style::label_for(document.title(), 0, self.config.label_limits()),
            kind: NodeKind::Document,
            layer: 0,
            x: center.x(),
            y: center.y(),
            radius: self.config.document_radius(),
            color: style::document_color(theme),
            mention_count: 0,
            importance: 1.0,
        }
    }

    fn entity_node(&self, entity: &Entity, layer: u32, position: Point, theme: Theme) -> LayoutNode {
        LayoutNode {
            id: entity.id().to_string(),
            name: entity.name().to_string(),
            label: style::label_for(entity.name(), layer, self.config.label_limits()),
            kind: NodeKind::Entity(entity.entity_type().clone()),
            layer,
            x: position.x(),
            y: position.y(),
            radius: self.config.node_size(layer, entity.mention_count()),
            color: style::entity_color(entity.entity_type(), theme),
            mention_count: entity.mention_count(),
            importance: entity.importance(),
        }
    }

    fn document_link(&self, entity: &Entity, document: &NewsDocument) -> LayoutEdge {
        let strength = entity.mention_count().max(1) as f32;
        LayoutEdge {
            id: format!("{}-{}", entity.id(), document.id()),
            source_id: entity.id().to_string(),
            target_id: document.id().to_string(),
            kind: RelationKind::MentionedIn,
            strength,
            stroke_width: self.config.edge_widths().width(true, strength),
            cross_layer: true,
            is_document_link: true,
        }
    }

    fn relationship_edge(&self, relationship: &Relationship, cross_layer: bool) -> LayoutEdge {
        let strength = relationship.confidence();
        LayoutEdge {
            id: format!("{}-{}", relationship.source_id(), relationship.target_id()),
            source_id: relationship.source_id().to_string(),
            target_id: relationship.target_id().to_string(),
            kind: relationship.kind().clone(),
            strength,
            stroke_width: self.config.edge_widths().width(false, strength),
            cross_layer,
            is_document_link: false,
        }
    }
}

/// Uniform sample in `[-amplitude, amplitude]`, or zero when disabled.
fn jitter<R: Rng>(rng: &mut R, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.random_range(-amplitude..=amplitude)
    } else {
        0.0
    }
}
