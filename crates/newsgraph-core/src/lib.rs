//! Newsgraph Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Newsgraph layout
//! engine and its front ends. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Themes**: Light and dark rendering themes ([`theme::Theme`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Strokes**: Line styling for rendered edges and guides ([`stroke`] module)
//! - **Graph**: The knowledge-graph input model and its wire format ([`graph`] module)

pub mod color;
pub mod geometry;
pub mod graph;
pub mod stroke;
pub mod theme;
