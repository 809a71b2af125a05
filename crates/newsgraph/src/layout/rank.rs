//! Entity ordering for ring assignment.
//!
//! Entities closer to the front of the ranking land on inner rings.

use indexmap::IndexMap;
use log::debug;

use newsgraph_core::graph::{Entity, EntityType};

/// Placement priority of an entity type. Lower values sit closer to the center.
///
/// Concrete types (people, organizations, places) come before abstract ones.
pub fn type_priority(entity_type: &EntityType) -> u8 {
    match entity_type {
        EntityType::Person => 1,
        EntityType::Organization => 2,
        EntityType::Location => 3,
        EntityType::Concept => 4,
        EntityType::Time => 5,
        EntityType::Numerical => 6,
        EntityType::Miscellaneous | EntityType::Other(_) => 7,
    }
}

/// Drops entities that cannot become distinct nodes.
///
/// The first occurrence of an id wins. Entities with an empty id, or with the
/// document's id, are discarded.
pub(super) fn unique_entities<'a>(entities: &'a [Entity], document_id: &str) -> Vec<&'a Entity> {
    let mut unique: IndexMap<&str, &Entity> = IndexMap::with_capacity(entities.len());

    for entity in entities {
        let id = entity.id();
        if id.is_empty() || id == document_id {
            debug!(entity_id = id; "Discarding entity without a usable id");
            continue;
        }
        if unique.contains_key(id) {
            debug!(entity_id = id; "Discarding duplicate entity");
            continue;
        }
        unique.insert(id, entity);
    }

    unique.into_values().collect()
}

/// Sorts entities by mention count (descending), then [`type_priority`] (ascending).
///
/// The sort is stable: entities that tie on both keys keep their input order.
pub fn rank_entities<'a>(mut entities: Vec<&'a Entity>) -> Vec<&'a Entity> {
    entities.sort_by(|a, b| {
        b.mention_count()
            .cmp(&a.mention_count())
            .then_with(|| type_priority(a.entity_type()).cmp(&type_priority(b.entity_type())))
    });
    entities
}
