//! Property tests for the radial layout over generated graphs.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use newsgraph::{
    graph::{Entity, EntityType, NewsDocument, RelationKind, Relationship},
    layout::{LayoutEngine, type_priority},
    theme::Theme,
};

const TYPES: [&str; 8] = [
    "Person",
    "Organization",
    "Location",
    "Concept",
    "Time",
    "Numerical",
    "Miscellaneous",
    "Gadget",
];

fn entities() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec((0u32..40, 0usize..TYPES.len(), 1u32..30), 0..40).prop_map(|raw| {
        raw.into_iter()
            .map(|(id, ty, mentions)| {
                Entity::new(
                    format!("e{id}"),
                    format!("Entity {id}"),
                    EntityType::from(TYPES[ty]),
                    mentions,
                )
            })
            .collect()
    })
}

fn relationships() -> impl Strategy<Value = Vec<Relationship>> {
    prop::collection::vec((0u32..45, 0u32..45), 0..30).prop_map(|raw| {
        raw.into_iter()
            .map(|(source, target)| {
                Relationship::new(
                    format!("e{source}"),
                    format!("e{target}"),
                    RelationKind::RelatedTo,
                )
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn layout_invariants_hold(
        entities in entities(),
        relationships in relationships(),
        seed in any::<u64>(),
    ) {
        let document = NewsDocument::new("doc", "Generated");
        let layout = LayoutEngine::default()
            .compute(
                Some(&document),
                &entities,
                &relationships,
                Theme::Light,
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();

        // Exactly one document node, first, at the center
        prop_assert!(layout.nodes()[0].is_document());
        prop_assert_eq!(layout.nodes().iter().filter(|n| n.is_document()).count(), 1);
        prop_assert_eq!(layout.document().position(), layout.canvas().center());

        // Node ids are unique and match the distinct input ids
        let ids: HashSet<&str> = layout.nodes().iter().map(|n| n.id()).collect();
        prop_assert_eq!(ids.len(), layout.nodes().len());
        let distinct: HashSet<&str> = entities.iter().map(|e| e.id()).collect();
        prop_assert_eq!(layout.entities().count(), distinct.len());

        // Every edge endpoint resolves
        for edge in layout.edges() {
            prop_assert!(layout.node(edge.source_id()).is_some());
            prop_assert!(layout.node(edge.target_id()).is_some());
        }
        prop_assert_eq!(
            layout.edges().iter().filter(|e| e.is_document_link()).count(),
            layout.entities().count()
        );

        // Rings fill in rank order and never exceed capacity
        let ranked: Vec<_> = layout.entities().collect();
        for (idx, node) in ranked.iter().enumerate() {
            prop_assert_eq!(node.layer() as usize, idx / 8 + 1);
            prop_assert!(node.radius() <= 25.0 + f32::EPSILON);
        }
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.mention_count() >= b.mention_count());
            if a.mention_count() == b.mention_count() {
                let (ta, tb) = (a.entity_type().unwrap(), b.entity_type().unwrap());
                prop_assert!(type_priority(ta) <= type_priority(tb));
            }
        }

        // Relationship edges carry the right cross-layer flag
        for edge in layout.edges().iter().filter(|e| !e.is_document_link()) {
            let source = layout.node(edge.source_id()).unwrap();
            let target = layout.node(edge.target_id()).unwrap();
            prop_assert_eq!(edge.cross_layer(), source.layer() != target.layer());
        }
    }

    #[test]
    fn same_seed_same_layout(entities in entities(), seed in any::<u64>()) {
        let document = NewsDocument::new("doc", "Generated");
        let engine = LayoutEngine::default();

        let first = engine
            .compute(Some(&document), &entities, &[], Theme::Dark, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        let second = engine
            .compute(Some(&document), &entities, &[], Theme::Dark, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        prop_assert_eq!(first.nodes(), second.nodes());
        prop_assert_eq!(first.edges(), second.edges());
    }
}
