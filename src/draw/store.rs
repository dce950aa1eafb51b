//! Feature store: committed shapes, the active drawing mode, and the preview.

use super::feature::{Feature, ShapeType};
use super::render::PreviewShape;
use crate::geometry::ShapeGeometry;
use crate::input::DrawingMode;
use std::fmt;

/// Change notification emitted by [`FeatureStore`].
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    /// The active drawing mode changed
    ModeChanged(DrawingMode),
    /// A feature was appended
    FeatureAdded(Feature),
    /// A feature was removed by id
    FeatureRemoved(String),
    /// All features were removed and the mode reset
    Cleared,
    /// The live preview was replaced or removed
    PreviewChanged(Option<PreviewShape>),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Holds all committed features in draw order plus the active mode.
///
/// The drawing state machine is the only writer; renderers and the toolbar
/// read it through borrows or follow it through [`FeatureStore::subscribe`].
pub struct FeatureStore {
    mode: DrawingMode,
    /// Committed features in draw order (first = bottom layer)
    features: Vec<Feature>,
    preview: Option<PreviewShape>,
    listeners: Vec<Listener>,
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FeatureStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureStore")
            .field("mode", &self.mode)
            .field("features", &self.features)
            .field("preview", &self.preview)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FeatureStore {
    /// Creates an empty store with no active mode.
    pub fn new() -> Self {
        Self {
            mode: DrawingMode::None,
            features: Vec::new(),
            preview: None,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.mode != mode {
            self.mode = mode;
            self.emit(StoreEvent::ModeChanged(mode));
        }
    }

    /// Committed features in draw order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of committed features of the given type.
    pub fn count(&self, shape_type: ShapeType) -> usize {
        self.features
            .iter()
            .filter(|f| f.shape_type == shape_type)
            .count()
    }

    /// Geometries of committed area shapes, in stored order.
    pub fn area_geometries(&self) -> impl Iterator<Item = &ShapeGeometry> {
        self.features
            .iter()
            .filter(|f| f.shape_type.is_area())
            .map(|f| &f.geometry)
    }

    /// Appends a feature (drawn on top of existing ones) and drops the preview.
    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature.clone());
        self.preview = None;
        self.emit(StoreEvent::FeatureAdded(feature));
    }

    /// Attempts to add a feature, enforcing a per-type maximum.
    ///
    /// Returns `true` if the feature was added, `false` if the limit would be exceeded.
    pub fn try_add_feature(&mut self, feature: Feature, max: usize) -> bool {
        if self.count(feature.shape_type) < max {
            self.add_feature(feature);
            true
        } else {
            false
        }
    }

    /// Removes the feature with `id`, returning it if present.
    pub fn remove_feature(&mut self, id: &str) -> Option<Feature> {
        let index = self.features.iter().position(|f| f.id == id)?;
        let removed = self.features.remove(index);
        self.emit(StoreEvent::FeatureRemoved(removed.id.clone()));
        Some(removed)
    }

    /// Removes every feature, the preview, and resets the mode.
    pub fn clear_all(&mut self) {
        self.features.clear();
        self.preview = None;
        self.mode = DrawingMode::None;
        self.emit(StoreEvent::Cleared);
    }

    /// Current live preview, if a shape is in progress.
    pub fn preview(&self) -> Option<&PreviewShape> {
        self.preview.as_ref()
    }

    pub fn set_preview(&mut self, preview: Option<PreviewShape>) {
        if self.preview != preview {
            self.preview = preview.clone();
            self.emit(StoreEvent::PreviewChanged(preview));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{LatLng, rectangle_from_bounds};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn line() -> Feature {
        Feature::new(
            ShapeGeometry::LineString(vec![[0.0, 0.0], [1.0, 1.0]]),
            ShapeType::LineString,
        )
    }

    fn rect() -> Feature {
        Feature::new(rectangle_from_bounds(1.0, 0.0, 1.0, 0.0), ShapeType::Rectangle)
    }

    #[test]
    fn try_add_feature_respects_limit() {
        let mut store = FeatureStore::new();
        assert!(store.try_add_feature(rect(), 1));
        assert!(!store.try_add_feature(rect(), 1));
        assert!(store.try_add_feature(line(), 1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn area_geometries_skip_lines_and_keep_order() {
        let mut store = FeatureStore::new();
        let first = rect();
        store.add_feature(first.clone());
        store.add_feature(line());
        store.add_feature(rect());

        let areas: Vec<_> = store.area_geometries().collect();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0], &first.geometry);
    }

    #[test]
    fn remove_feature_by_id() {
        let mut store = FeatureStore::new();
        let keep = line();
        let gone = rect();
        store.add_feature(keep.clone());
        store.add_feature(gone.clone());

        assert_eq!(store.remove_feature(&gone.id), Some(gone));
        assert_eq!(store.remove_feature("missing"), None);
        assert_eq!(store.features(), &[keep]);
    }

    #[test]
    fn clear_all_resets_mode_and_preview() {
        let mut store = FeatureStore::new();
        store.set_mode(DrawingMode::Polygon);
        store.set_preview(Some(PreviewShape::Polyline(vec![LatLng::new(0.0, 0.0)])));
        store.add_feature(line());

        store.clear_all();
        assert!(store.is_empty());
        assert_eq!(store.mode(), DrawingMode::None);
        assert!(store.preview().is_none());
    }

    #[test]
    fn listeners_see_changes_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = FeatureStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.set_mode(DrawingMode::Circle);
        store.set_mode(DrawingMode::Circle);
        let feature = rect();
        store.add_feature(feature.clone());
        store.remove_feature(&feature.id);
        store.clear_all();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreEvent::ModeChanged(DrawingMode::Circle),
                StoreEvent::FeatureAdded(feature.clone()),
                StoreEvent::FeatureRemoved(feature.id),
                StoreEvent::Cleared,
            ]
        );
    }
}
