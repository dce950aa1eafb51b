//! Committed features, the feature store, and rendering primitives.
//!
//! This module defines the core drawing types shared by the engine and hosts:
//! - [`Feature`]: a finalized shape with id, geometry, type and timestamp
//! - [`FeatureStore`]: ordered collection of features plus the active mode
//! - [`Renderer`]: the map surface the engine adds/removes layers on
//! - [`Style`] and [`Color`]: layer styling

pub mod color;
pub mod feature;
pub mod render;
pub mod store;

// Re-export commonly used types at module level
pub use color::Color;
pub use feature::{Feature, ShapeType};
pub use render::{
    Layer, LayerId, LayerShape, LayerStack, PreviewShape, Renderer, Style, render_features,
};
pub use store::{FeatureStore, StoreEvent};
