//! Knowledge-graph input model.
//!
//! These types are the in-memory form of the payload served by the backend's
//! `GET /api/graph/news/{id}` endpoint:
//!
//! ```text
//! {
//!   "graph": {
//!     "news": { "id": ..., "title": ... },
//!     "entities": [ { "id", "name", "type", "mentionCount", "importance" }, ... ],
//!     "relationships": [ { "sourceId", "targetId", "type", "confidence" }, ... ]
//!   }
//! }
//! ```
//!
//! Decoding is forgiving of noisy extraction output: numeric
//! fields that are missing or unusable fall back to `1`, ids may be strings or
//! integers, and a malformed `news` object decodes as absent. Validation of
//! what remains is left to the layout engine.

mod lenient;

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// The article at the center of a graph.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsDocument {
    #[serde(default, deserialize_with = "lenient::id")]
    id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    title: String,
}

impl NewsDocument {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Category assigned to an entity by the extraction backend.
///
/// Unrecognized labels are kept verbatim in [`EntityType::Other`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum EntityType {
    Person,
    Organization,
    Location,
    Concept,
    Time,
    Numerical,
    #[default]
    Miscellaneous,
    Other(String),
}

impl EntityType {
    /// The wire label of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "Person",
            Self::Organization => "Organization",
            Self::Location => "Location",
            Self::Concept => "Concept",
            Self::Time => "Time",
            Self::Numerical => "Numerical",
            Self::Miscellaneous => "Miscellaneous",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for EntityType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Person" => Self::Person,
            "Organization" => Self::Organization,
            "Location" => Self::Location,
            "Concept" => Self::Concept,
            "Time" => Self::Time,
            "Numerical" => Self::Numerical,
            "Miscellaneous" | "" => Self::Miscellaneous,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for EntityType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A named thing mentioned in the article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default, deserialize_with = "lenient::id")]
    id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::entity_type")]
    entity_type: EntityType,
    #[serde(default = "lenient::one", deserialize_with = "lenient::mention_count")]
    mention_count: u32,
    #[serde(default = "lenient::unit", deserialize_with = "lenient::weight")]
    importance: f32,
}

impl Entity {
    /// Creates an entity with the default importance of `1`.
    ///
    /// A `mention_count` of zero is raised to `1`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entity_type: EntityType,
        mention_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type,
            mention_count: mention_count.max(1),
            importance: 1.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    /// Number of times the entity is mentioned, always at least `1`.
    pub fn mention_count(&self) -> u32 {
        self.mention_count
    }

    pub fn importance(&self) -> f32 {
        self.importance
    }
}

/// Label of an edge between two nodes.
///
/// The four inferred relation labels produced by the backend get their own
/// variants, as does the synthetic [`RelationKind::MentionedIn`] link between
/// an entity and its document. Anything else is kept in
/// [`RelationKind::Other`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RelationKind {
    #[default]
    RelatedTo,
    LocatedIn,
    WorksFor,
    PartOf,
    MentionedIn,
    Other(String),
}

impl RelationKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::RelatedTo => "RELATED_TO",
            Self::LocatedIn => "LOCATED_IN",
            Self::WorksFor => "WORKS_FOR",
            Self::PartOf => "PART_OF",
            Self::MentionedIn => "MENTIONED_IN",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for RelationKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "RELATED_TO" | "" => Self::RelatedTo,
            "LOCATED_IN" => Self::LocatedIn,
            "WORKS_FOR" => Self::WorksFor,
            "PART_OF" => Self::PartOf,
            "MENTIONED_IN" => Self::MentionedIn,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for RelationKind {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RelationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A directed, typed link between two node ids.
///
/// Endpoints may name an entity or the document. Links whose endpoints do not
/// resolve are dropped during layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default, deserialize_with = "lenient::id")]
    source_id: String,
    #[serde(default, deserialize_with = "lenient::id")]
    target_id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::relation_kind")]
    kind: RelationKind,
    #[serde(default = "lenient::unit", deserialize_with = "lenient::weight")]
    confidence: f32,
}

impl Relationship {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        kind: RelationKind,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            kind,
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
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

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// The graph of one article: its document, entities and relationships.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphPayload {
    #[serde(default, deserialize_with = "lenient::document")]
    news: Option<NewsDocument>,
    #[serde(default, deserialize_with = "lenient::list")]
    entities: Vec<Entity>,
    #[serde(default, deserialize_with = "lenient::list")]
    relationships: Vec<Relationship>,
}

impl GraphPayload {
    pub fn new(
        news: Option<NewsDocument>,
        entities: Vec<Entity>,
        relationships: Vec<Relationship>,
    ) -> Self {
        Self {
            news,
            entities,
            relationships,
        }
    }

    pub fn news(&self) -> Option<&NewsDocument> {
        self.news.as_ref()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }
}

/// The response envelope of the graph endpoint: `{ "graph": { ... } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphEnvelope {
    graph: GraphPayload,
}

impl GraphEnvelope {
    pub fn into_graph(self) -> GraphPayload {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_envelope() {
        let json = r#"{
            "graph": {
                "news": { "id": "d1", "title": "Test Article" },
                "entities": [
                    { "id": "e1", "name": "Alice", "type": "Person", "mentionCount": 5 },
                    { "id": "e2", "name": "Acme Corp", "type": "Organization", "mentionCount": 2, "importance": 3 }
                ],
                "relationships": [
                    { "sourceId": "e1", "targetId": "e2", "type": "WORKS_FOR", "confidence": 0.9 }
                ]
            }
        }"#;

        let graph = serde_json::from_str::<GraphEnvelope>(json)
            .unwrap()
            .into_graph();

        let news = graph.news().unwrap();
        assert_eq!(news.id(), "d1");
        assert_eq!(news.title(), "Test Article");

        assert_eq!(graph.entities().len(), 2);
        assert_eq!(graph.entities()[0].entity_type(), &EntityType::Person);
        assert_eq!(graph.entities()[0].mention_count(), 5);
        assert_eq!(graph.entities()[0].importance(), 1.0);
        assert_eq!(graph.entities()[1].importance(), 3.0);

        let rel = &graph.relationships()[0];
        assert_eq!(rel.kind(), &RelationKind::WorksFor);
        assert!((rel.confidence() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        let json = r#"{
            "news": { "id": 42, "title": "Numbers" },
            "entities": [ { "id": 7, "name": "Seven" } ],
            "relationships": [ { "sourceId": 7, "targetId": 42 } ]
        }"#;

        let graph: GraphPayload = serde_json::from_str(json).unwrap();
        assert_eq!(graph.news().unwrap().id(), "42");
        assert_eq!(graph.entities()[0].id(), "7");
        assert_eq!(graph.relationships()[0].source_id(), "7");
        assert_eq!(graph.relationships()[0].target_id(), "42");
    }

    #[test]
    fn test_missing_and_unusable_numbers_default_to_one() {
        let json = r#"{
            "news": { "id": "d1" },
            "entities": [
                { "id": "a", "name": "A", "type": "Person" },
                { "id": "b", "name": "B", "type": "Person", "mentionCount": null },
                { "id": "c", "name": "C", "type": "Person", "mentionCount": "many" },
                { "id": "d", "name": "D", "type": "Person", "mentionCount": 0 },
                { "id": "e", "name": "E", "type": "Person", "mentionCount": "4" },
                { "id": "f", "name": "F", "type": "Person", "mentionCount": 3.7 }
            ],
            "relationships": [
                { "sourceId": "a", "targetId": "b", "type": "RELATED_TO" },
                { "sourceId": "a", "targetId": "b", "type": "RELATED_TO", "confidence": "high" },
                { "sourceId": "a", "targetId": "b", "type": "RELATED_TO", "confidence": 0 }
            ]
        }"#;

        let graph: GraphPayload = serde_json::from_str(json).unwrap();
        let counts: Vec<u32> = graph.entities().iter().map(Entity::mention_count).collect();
        assert_eq!(counts, vec![1, 1, 1, 1, 4, 3]);

        for rel in graph.relationships() {
            assert_eq!(rel.confidence(), 1.0);
        }
        assert_eq!(graph.news().unwrap().title(), "");
    }

    #[test]
    fn test_unknown_labels_are_preserved() {
        let json = r#"{
            "entities": [ { "id": "x", "name": "X", "type": "Gadget" }, { "id": "y", "name": "Y" } ],
            "relationships": [ { "sourceId": "x", "targetId": "y", "type": "INVENTED" } ]
        }"#;

        let graph: GraphPayload = serde_json::from_str(json).unwrap();
        assert_eq!(
            graph.entities()[0].entity_type(),
            &EntityType::Other("Gadget".to_string())
        );
        assert_eq!(graph.entities()[0].entity_type().as_str(), "Gadget");
        assert_eq!(graph.entities()[1].entity_type(), &EntityType::Miscellaneous);
        assert_eq!(graph.relationships()[0].kind().as_str(), "INVENTED");
    }

    #[test]
    fn test_malformed_news_decodes_as_absent() {
        let graph: GraphPayload = serde_json::from_str(r#"{ "news": "not an object" }"#).unwrap();
        assert!(graph.news().is_none());

        let graph: GraphPayload = serde_json::from_str(r#"{ "news": null }"#).unwrap();
        assert!(graph.news().is_none());

        let graph: GraphPayload = serde_json::from_str("{}").unwrap();
        assert!(graph.news().is_none());
        assert!(graph.entities().is_empty());
        assert!(graph.relationships().is_empty());
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let graph: GraphPayload =
            serde_json::from_str(r#"{ "entities": null, "relationships": null }"#).unwrap();
        assert!(graph.entities().is_empty());
        assert!(graph.relationships().is_empty());
    }

    #[test]
    fn test_entity_new_raises_zero_mentions() {
        let entity = Entity::new("e", "E", EntityType::Time, 0);
        assert_eq!(entity.mention_count(), 1);
    }

    #[test]
    fn test_labels_round_trip() {
        for label in ["Person", "Organization", "Location", "Concept", "Time", "Numerical"] {
            assert_eq!(EntityType::from(label).as_str(), label);
        }
        for label in ["RELATED_TO", "LOCATED_IN", "WORKS_FOR", "PART_OF", "MENTIONED_IN"] {
            assert_eq!(RelationKind::from(label).as_str(), label);
        }
    }
}
