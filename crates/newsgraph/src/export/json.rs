//! JSON rendering of a computed layout.
//!
//! The document mirrors [`GraphLayout`]'s serde representation: camelCase
//! keys, node and edge `type` labels as plain strings, colours as CSS strings.

use log::debug;

use super::{Error, Exporter};
use crate::layout::GraphLayout;

/// JSON exporter.
#[derive(Debug, Clone, Copy)]
pub struct Json {
    pretty: bool,
}

impl Default for Json {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Json {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for Json {
    fn export_layout(&mut self, layout: &GraphLayout) -> Result<String, Error> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(layout)
        } else {
            serde_json::to_string(layout)
        }
        .map_err(Error::Serialize)?;

        debug!(bytes = encoded.len(), pretty = self.pretty; "JSON document rendered");
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use newsgraph_core::{
        graph::{Entity, EntityType, GraphPayload, NewsDocument, RelationKind, Relationship},
        theme::Theme,
    };
    use rand::{SeedableRng, rngs::StdRng};
    use serde_json::Value;

    use super::*;
    use crate::layout::LayoutEngine;

    fn layout() -> GraphLayout {
        let payload = GraphPayload::new(
            Some(NewsDocument::new("d1", "Test Article")),
            vec![
                Entity::new("e1", "Alice", EntityType::Person, 5),
                Entity::new("e2", "Acme Corp", EntityType::Organization, 2),
            ],
            vec![Relationship::new("e1", "e2", RelationKind::WorksFor)],
        );
        LayoutEngine::default()
            .compute_payload_with_rng(&payload, Theme::Dark, &mut StdRng::seed_from_u64(1))
            .unwrap()
    }

    #[test]
    fn test_json_shape() {
        let text = Json::default().export_layout(&layout()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["theme"], "dark");
        assert_eq!(value["canvasWidth"], 1000.0);

        let nodes = value["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["id"], "d1");
        assert_eq!(nodes[0]["type"], "Document");
        assert_eq!(nodes[0]["layer"], 0);
        assert_eq!(nodes[0]["mentionCount"], 0);
        assert_eq!(nodes[1]["type"], "Person");
        assert!(nodes[1]["color"].is_string());

        let edges = value["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0]["type"], "MENTIONED_IN");
        assert_eq!(edges[0]["isDocumentLink"], true);
        assert_eq!(edges[2]["type"], "WORKS_FOR");
        assert_eq!(edges[2]["crossLayer"], false);
        assert!(value.get("index").is_none());
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let text = Json::new(false).export_layout(&layout()).unwrap();
        assert!(!text.contains('\n'));
    }
}
