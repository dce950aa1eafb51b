use super::{DrawingState, InputState};
use crate::draw::{Layer, LayerShape, PreviewShape, Renderer, Style};
use crate::geometry::{LatLng, LatLngBounds, distance_km};
use crate::input::DrawingMode;
use crate::notification::Notifier;

impl<R: Renderer, N: Notifier> InputState<R, N> {
    /// Returns the preview of a started circle or rectangle for the pointer position.
    ///
    /// Only meaningful after the first click of a two-click mode.
    pub fn provisional_shape(&self, current: LatLng) -> Option<PreviewShape> {
        let DrawingState::Dragging { start } = self.state else {
            return None;
        };
        match self.store.mode() {
            DrawingMode::Circle => Some(PreviewShape::Circle {
                center: start,
                radius_m: distance_km(start, current) * 1000.0,
            }),
            DrawingMode::Rectangle => Some(PreviewShape::Rectangle(LatLngBounds::from_corners(
                start, current,
            ))),
            _ => None,
        }
    }

    /// Preview of the vertices collected so far.
    ///
    /// Polygons show from the third vertex, lines from the first.
    pub(super) fn vertex_preview(&self) -> Option<PreviewShape> {
        let points = self.state.points();
        match self.store.mode() {
            DrawingMode::Polygon if points.len() >= 3 => Some(PreviewShape::Polygon(points.to_vec())),
            DrawingMode::LineString if !points.is_empty() => {
                Some(PreviewShape::Polyline(points.to_vec()))
            }
            _ => None,
        }
    }

    /// Replaces the preview layer. At most one preview is displayed.
    pub(super) fn show_preview(&mut self, preview: Option<PreviewShape>) {
        if let Some(id) = self.preview_layer.take() {
            self.renderer.remove_layer(id);
        }
        if let Some(shape) = &preview {
            let style = match shape {
                PreviewShape::Polyline(_) => self.line_style,
                _ => self.area_style,
            };
            self.preview_layer = Some(self.renderer.add_layer(Layer {
                shape: LayerShape::Preview(shape.clone()),
                style,
            }));
        }
        self.store.set_preview(preview);
    }

    pub(super) fn show_marker(&mut self, at: LatLng) {
        if let Some(id) = self.marker_layer.take() {
            self.renderer.remove_layer(id);
        }
        self.marker_layer = Some(self.renderer.add_layer(Layer {
            shape: LayerShape::Marker(at),
            style: Style::marker(),
        }));
    }

    /// Removes the start marker and the preview.
    pub(super) fn clear_layers(&mut self) {
        if let Some(id) = self.marker_layer.take() {
            self.renderer.remove_layer(id);
        }
        if let Some(id) = self.preview_layer.take() {
            self.renderer.remove_layer(id);
        }
        self.store.set_preview(None);
    }
}
