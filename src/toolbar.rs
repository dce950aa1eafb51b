//! Toolbar gating: per-tool counts, enablement, and instruction hints.

use crate::config::ShapeLimits;
use crate::draw::{FeatureStore, ShapeType};
use crate::input::DrawingMode;
use std::fmt;

/// Display state of one tool button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolStatus {
    pub shape_type: ShapeType,
    /// Committed features of this type
    pub count: usize,
    /// Configured maximum for this type
    pub max: usize,
    /// Whether this tool is the active mode
    pub active: bool,
    /// Whether the button can be pressed
    pub enabled: bool,
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.shape_type.label(), self.count, self.max)
    }
}

/// Decides which tools may be selected given the store contents.
#[derive(Clone, Debug, Default)]
pub struct Toolbar {
    limits: ShapeLimits,
}

impl Toolbar {
    pub fn new(limits: ShapeLimits) -> Self {
        Self { limits }
    }

    pub fn max_for(&self, shape_type: ShapeType) -> usize {
        self.limits.max_for(shape_type)
    }

    /// Committed features of this type.
    pub fn count(&self, store: &FeatureStore, shape_type: ShapeType) -> usize {
        store.count(shape_type)
    }

    /// True when another shape of this type may be committed.
    pub fn can_draw(&self, store: &FeatureStore, shape_type: ShapeType) -> bool {
        self.count(store, shape_type) < self.max_for(shape_type)
    }

    /// One status per tool, in toolbar order.
    pub fn statuses(&self, store: &FeatureStore) -> Vec<ToolStatus> {
        let mode = store.mode();
        ShapeType::ALL
            .into_iter()
            .map(|shape_type| {
                let active = mode.shape_type() == Some(shape_type);
                ToolStatus {
                    shape_type,
                    count: self.count(store, shape_type),
                    max: self.max_for(shape_type),
                    active,
                    enabled: active || self.can_draw(store, shape_type),
                }
            })
            .collect()
    }

    /// Resolves a button press into the next mode.
    ///
    /// Pressing the active tool deselects it. Pressing a tool at its limit is
    /// refused and returns `None`.
    pub fn press(&self, store: &FeatureStore, shape_type: ShapeType) -> Option<DrawingMode> {
        if store.mode().shape_type() == Some(shape_type) {
            return Some(DrawingMode::None);
        }
        if self.can_draw(store, shape_type) {
            Some(DrawingMode::from(shape_type))
        } else {
            None
        }
    }

    pub fn can_export(&self, store: &FeatureStore) -> bool {
        !store.is_empty()
    }

    pub fn can_clear(&self, store: &FeatureStore) -> bool {
        !store.is_empty()
    }

    /// Instruction text shown while a mode is active.
    pub fn hint(mode: DrawingMode) -> Option<&'static str> {
        match mode {
            DrawingMode::None => None,
            DrawingMode::Polygon | DrawingMode::LineString => {
                Some("Click to add points, double-click to finish")
            }
            DrawingMode::Circle => Some("Click center, then click edge to set radius"),
            DrawingMode::Rectangle => Some("Click two corners to create rectangle"),
        }
    }
}
