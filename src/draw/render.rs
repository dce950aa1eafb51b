//! Rendering collaborator interface and layer descriptions.
//!
//! The drawing engine never touches a map widget directly. It describes what
//! should be on screen as [`Layer`]s and hands them to a [`Renderer`], which
//! returns a handle used to remove the layer again.

use super::color::{Color, LEAFLET_BLUE};
use super::feature::{Feature, ShapeType};
use crate::config::StyleConfig;
use crate::geometry::{LatLng, LatLngBounds, ShapeGeometry};
use log::debug;

/// Live preview of the shape being drawn.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewShape {
    /// Circle around the first click; radius follows the pointer
    Circle { center: LatLng, radius_m: f64 },
    /// Box spanned by the first click and the pointer
    Rectangle(LatLngBounds),
    /// Polygon through the vertices clicked so far
    Polygon(Vec<LatLng>),
    /// Line through the vertices clicked so far
    Polyline(Vec<LatLng>),
}

/// What a layer displays.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerShape {
    /// Start marker placed by the first click of a two-click shape
    Marker(LatLng),
    /// In-progress preview
    Preview(PreviewShape),
    /// A committed geometry
    Feature(ShapeGeometry),
}

/// Stroke and fill parameters of a layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub color: Color,
    /// Fill color; `None` draws an outline only
    pub fill_color: Option<Color>,
    pub fill_opacity: f64,
    /// Stroke weight in pixels
    pub weight: f64,
    pub opacity: f64,
}

impl Style {
    /// Style of area previews.
    pub fn area(config: &StyleConfig) -> Self {
        let color = config.area_color.to_color();
        Self {
            color,
            fill_color: Some(color),
            fill_opacity: config.area_fill_opacity,
            weight: config.area_weight,
            opacity: 1.0,
        }
    }

    /// Style of line previews.
    pub fn line(config: &StyleConfig) -> Self {
        Self {
            color: config.line_color.to_color(),
            fill_color: None,
            fill_opacity: 0.0,
            weight: config.line_weight,
            opacity: 1.0,
        }
    }

    /// Style of the start marker.
    pub fn marker() -> Self {
        Self {
            color: Color::new(0xff, 0xff, 0xff),
            fill_color: Some(LEAFLET_BLUE),
            fill_opacity: 1.0,
            weight: 2.0,
            opacity: 1.0,
        }
    }

    /// Style of a committed feature of the given type.
    pub fn committed(shape_type: ShapeType, config: &StyleConfig) -> Self {
        let base = if shape_type.is_area() {
            Self::area(config)
        } else {
            Self::line(config)
        };
        Self {
            opacity: config.committed_opacity,
            ..base
        }
    }
}

/// A displayable shape with its style.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub shape: LayerShape,
    pub style: Style,
}

/// Handle to a layer added to a [`Renderer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Map surface the engine draws previews and features on.
pub trait Renderer {
    /// Displays a layer and returns its handle.
    fn add_layer(&mut self, layer: Layer) -> LayerId;
    /// Removes a previously added layer; unknown handles are ignored.
    fn remove_layer(&mut self, id: LayerId);
}

/// In-memory renderer that keeps the currently displayed layers.
///
/// Used by the headless host, and handy for inspecting what a map surface
/// would show.
#[derive(Debug, Default)]
pub struct LayerStack {
    next_id: u64,
    layers: Vec<(LayerId, Layer)>,
    added: usize,
    removed: usize,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently displayed layers, oldest first.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().map(|(_, layer)| layer)
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers
            .iter()
            .find(|(layer_id, _)| *layer_id == id)
            .map(|(_, layer)| layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of `add_layer` calls so far.
    pub fn total_added(&self) -> usize {
        self.added
    }

    /// Total number of effective `remove_layer` calls so far.
    pub fn total_removed(&self) -> usize {
        self.removed
    }
}

impl Renderer for LayerStack {
    fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.added += 1;
        debug!("Adding layer {:?}: {:?}", id, layer.shape);
        self.layers.push((id, layer));
        id
    }

    fn remove_layer(&mut self, id: LayerId) {
        if let Some(index) = self.layers.iter().position(|(layer_id, _)| *layer_id == id) {
            self.layers.remove(index);
            self.removed += 1;
            debug!("Removed layer {:?}", id);
        }
    }
}

/// Adds a layer for every committed feature, in draw order.
///
/// Returns the handles in the same order as `features`.
pub fn render_features(
    renderer: &mut dyn Renderer,
    features: &[Feature],
    config: &StyleConfig,
) -> Vec<LayerId> {
    features
        .iter()
        .map(|feature| {
            renderer.add_layer(Layer {
                shape: LayerShape::Feature(feature.geometry.clone()),
                style: Style::committed(feature.shape_type, config),
            })
        })
        .collect()
}
