//! Configuration types for Newsgraph layout and rendering.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! a configuration source only needs to name the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Canvas size, ring geometry, jitter and sizing constants.
//! - [`StyleConfig`] - Theme and rendering toggles.
//!
//! # Example
//!
//! ```
//! # use newsgraph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().layer_capacity(), 8);
//! assert!(config.style().background_color().is_ok());
//! ```

use std::f32::consts::PI;

use serde::Deserialize;

use newsgraph_core::{color::Color, geometry::Size, theme::Theme};

use crate::{
    error::NewsGraphError,
    style::{EdgeWidths, LabelLimits},
};

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the layout configuration for modification.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the style configuration for modification.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }
}

/// Geometry and sizing constants of the radial layered layout.
///
/// Entities are split into rings of at most [`layer_capacity`](Self::layer_capacity)
/// nodes around the document. Ring `n` (1-based) sits at
/// `base_radius + (n - 1) * radius_increment`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    canvas_width: f32,
    canvas_height: f32,
    /// Seed for the jitter generator. `None` draws from the thread RNG.
    seed: Option<u64>,
    document_radius: f32,
    layer_capacity: usize,
    base_radius: f32,
    radius_increment: f32,
    /// Maximum angular perturbation in radians, applied in `[-a, a]`.
    angle_jitter: f32,
    /// Maximum radial perturbation, applied in `[-r, r]`.
    radius_jitter: f32,
    /// Base node radius per layer, innermost first. Deeper layers reuse the last entry.
    layer_base_sizes: Vec<f32>,
    /// Multiplier of the `ln(mentionCount)` size bonus.
    mention_weight: f32,
    max_node_size: f32,
    edge_widths: EdgeWidths,
    label_limits: LabelLimits,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 1000.0,
            seed: None,
            document_radius: 30.0,
            layer_capacity: 8,
            base_radius: 120.0,
            radius_increment: 100.0,
            angle_jitter: 0.15,
            radius_jitter: 15.0,
            layer_base_sizes: vec![20.0, 16.0, 14.0, 12.0],
            mention_weight: 2.0,
            max_node_size: 25.0,
            edge_widths: EdgeWidths::default(),
            label_limits: LabelLimits::default(),
        }
    }
}

impl LayoutConfig {
    pub fn canvas(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn document_radius(&self) -> f32 {
        self.document_radius
    }

    pub fn layer_capacity(&self) -> usize {
        self.layer_capacity
    }

    pub fn angle_jitter(&self) -> f32 {
        self.angle_jitter
    }

    pub fn radius_jitter(&self) -> f32 {
        self.radius_jitter
    }

    pub fn edge_widths(&self) -> &EdgeWidths {
        &self.edge_widths
    }

    pub fn label_limits(&self) -> &LabelLimits {
        &self.label_limits
    }

    /// Sets the canvas dimensions.
    pub fn set_canvas(&mut self, width: f32, height: f32) -> &mut Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Fixes the jitter generator seed, making layouts reproducible.
    pub fn set_seed(&mut self, seed: Option<u64>) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Sets the maximum entities per ring.
    pub fn set_layer_capacity(&mut self, capacity: usize) -> &mut Self {
        self.layer_capacity = capacity;
        self
    }

    /// Sets both jitter amplitudes. Zero disables the perturbation.
    pub fn set_jitter(&mut self, angle: f32, radius: f32) -> &mut Self {
        self.angle_jitter = angle;
        self.radius_jitter = radius;
        self
    }

    /// Unperturbed radius of the ring holding `layer` (1-based).
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgraph::config::LayoutConfig;
    /// let config = LayoutConfig::default();
    /// assert_eq!(config.ring_radius(1), 120.0);
    /// assert_eq!(config.ring_radius(3), 320.0);
    /// ```
    pub fn ring_radius(&self, layer: u32) -> f32 {
        let depth = layer.saturating_sub(1) as f32;
        self.base_radius + depth * self.radius_increment
    }

    /// Rendered radius of an entity node.
    ///
    /// `min(layer_base_size + ln(mention_count) * mention_weight, max_node_size)`
    pub fn node_size(&self, layer: u32, mention_count: u32) -> f32 {
        let depth = layer.saturating_sub(1) as usize;
        let base = self
            .layer_base_sizes
            .get(depth)
            .or(self.layer_base_sizes.last())
            .copied()
            .unwrap_or(self.max_node_size);
        let bonus = (mention_count.max(1) as f32).ln() * self.mention_weight;
        (base + bonus).min(self.max_node_size)
    }

    /// Checks that the configuration describes a drawable layout.
    ///
    /// # Errors
    ///
    /// Returns [`NewsGraphError::InvalidInput`] for a non-drawable canvas,
    /// a zero layer capacity, an empty size table, or jitter that is negative,
    /// non-finite or larger than half a turn (angle) or one ring spacing (radius).
    pub fn validate(&self) -> Result<(), NewsGraphError> {
        if !self.canvas().is_drawable() {
            return Err(NewsGraphError::InvalidInput(format!(
                "canvas must have positive dimensions, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.layer_capacity == 0 {
            return Err(NewsGraphError::InvalidInput(
                "layer capacity must be at least 1".to_string(),
            ));
        }
        let jitter_ok = |v: f32, max: f32| v.is_finite() && (0.0..=max).contains(&v);
        if !jitter_ok(self.angle_jitter, PI) {
            return Err(NewsGraphError::InvalidInput(format!(
                "angle jitter must be between 0 and {PI}, got {}",
                self.angle_jitter
            )));
        }
        if !jitter_ok(self.radius_jitter, self.radius_increment.abs()) {
            return Err(NewsGraphError::InvalidInput(format!(
                "radius jitter must be between 0 and the ring spacing {}, got {}",
                self.radius_increment, self.radius_jitter
            )));
        }
        if self.layer_base_sizes.is_empty() {
            return Err(NewsGraphError::InvalidInput(
                "layer base sizes must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered graphs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    theme: Theme,

    /// Background override, as a color string. Falls back to the theme background.
    background_color: Option<String>,

    /// Draw a dashed guide circle for every populated ring.
    show_layer_rings: bool,

    /// Draw a mention-count badge on frequently mentioned entities.
    show_mention_badges: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            background_color: None,
            show_layer_rings: true,
            show_mention_badges: true,
        }
    }
}

impl StyleConfig {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn show_layer_rings(&self) -> bool {
        self.show_layer_rings
    }

    pub fn show_mention_badges(&self) -> bool {
        self.show_mention_badges
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
