//! Newsgraph - radial layered layouts for news knowledge graphs.
//!
//! Decoding, layout, and rendering for the entity graph extracted from a news
//! article. The article becomes a node at the canvas center, and its entities
//! are ranked by prominence and arranged on concentric rings around it.

pub mod config;
pub mod export;
pub mod layout;
pub mod style;

mod error;

pub use newsgraph_core::{color, geometry, graph, stroke, theme};

pub use error::NewsGraphError;

use log::{debug, info, trace};
use rand::Rng;
use serde_json::Value;

use config::AppConfig;
use export::Exporter;
use graph::{GraphEnvelope, GraphPayload};
use layout::{GraphLayout, LayoutEngine};

/// Builder for decoding, laying out and rendering news graphs.
///
/// This provides an API for processing a knowledge graph payload through the
/// parsing, layout, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use newsgraph::{GraphBuilder, config::AppConfig};
///
/// let source = r#"{
///     "graph": {
///         "news": { "id": "d1", "title": "Test Article" },
///         "entities": [{ "id": "e1", "name": "Alice", "type": "Person", "mentionCount": 5 }],
///         "relationships": []
///     }
/// }"#;
///
/// let builder = GraphBuilder::new(AppConfig::default());
///
/// let payload = builder.parse(source).expect("Failed to parse");
/// let layout = builder.layout(&payload).expect("Failed to lay out");
/// let svg = builder.render_svg(&layout).expect("Failed to render");
/// assert!(svg.contains("Alice"));
///
/// // Or use default config
/// let builder = GraphBuilder::default();
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decode a JSON payload.
    ///
    /// Accepts either the backend envelope `{ "graph": { ... } }` or a bare
    /// `{ "news", "entities", "relationships" }` object. Field-level problems
    /// are repaired or dropped during decoding rather than reported.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::Parse`] if `source` is not JSON or its
    /// top level is not an object.
    pub fn parse(&self, source: &str) -> Result<GraphPayload, NewsGraphError> {
        info!("Parsing graph payload");

        let value: Value = serde_json::from_str(source)
            .map_err(|err| NewsGraphError::new_parse_error(err, source))?;

        let decoded = if value.get("graph").is_some() {
            debug!("Unwrapping graph envelope");
            serde_json::from_value::<GraphEnvelope>(value).map(GraphEnvelope::into_graph)
        } else {
            serde_json::from_value::<GraphPayload>(value)
        };
        let payload = decoded.map_err(|err| NewsGraphError::new_parse_error(err, source))?;

        debug!(
            has_news = payload.news().is_some(),
            entities = payload.entities().len(),
            relationships = payload.relationships().len();
            "Graph payload parsed successfully"
        );
        trace!(payload:?; "Parsed payload");

        Ok(payload)
    }

    /// Lay out a decoded payload with the configured theme.
    ///
    /// Jitter is seeded from the configured seed when present.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::InvalidInput`] if the payload has no usable
    /// news document or the layout configuration is invalid.
    pub fn layout(&self, payload: &GraphPayload) -> Result<GraphLayout, NewsGraphError> {
        self.engine()
            .compute_payload(payload, self.config.style().theme())
    }

    /// Lay out a decoded payload, drawing jitter from `rng`.
    ///
    /// # Errors
    ///
    /// See [`GraphBuilder::layout`].
    pub fn layout_with_rng<R: Rng>(
        &self,
        payload: &GraphPayload,
        rng: &mut R,
    ) -> Result<GraphLayout, NewsGraphError> {
        self.engine()
            .compute_payload_with_rng(payload, self.config.style().theme(), rng)
    }

    /// Render a computed layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::Export`] if the style configuration is
    /// invalid or rendering fails.
    pub fn render_svg(&self, layout: &GraphLayout) -> Result<String, NewsGraphError> {
        info!(nodes = layout.nodes().len(); "Rendering SVG");

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .build()?;

        Ok(svg_exporter.export_layout(layout)?)
    }

    /// Render a computed layout to a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::Export`] if serialization fails.
    pub fn render_json(&self, layout: &GraphLayout) -> Result<String, NewsGraphError> {
        info!(nodes = layout.nodes().len(); "Rendering JSON");
        Ok(export::json::Json::default().export_layout(layout)?)
    }

    fn engine(&self) -> LayoutEngine {
        LayoutEngine::new(self.config.layout().clone())
    }
}
