//! Export for external renderers.
//!
//! Supports:
//! - **JSON**: `nodes`/`links` documents for D3.js and vis-network style front ends
//! - **DOT**: Graphviz, using the resolved colors and labels
//!
//! Layout stays with the renderer; [`layout`] only provides the sizing
//! conventions renderers expect.

pub mod dot;
pub mod json;
pub mod layout;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
pub use layout::{apply_degree_sizing, layout_scale, BASE_LAYOUT_SCALE, BASE_NODE_SIZE};
