use crate::draw::{Feature, Renderer, ShapeType};
use crate::input::DrawingMode;
use crate::notification::Notifier;
use log::{debug, info, warn};

use super::{DrawingState, InputState};

impl<R: Renderer, N: Notifier> InputState<R, N> {
    /// Sets the active drawing mode.
    ///
    /// Any shape in progress is discarded along with its marker and preview.
    /// Setting the mode that is already active does nothing.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.store.mode() == mode {
            return;
        }
        if self.state.is_drawing() {
            info!("Discarding unfinished {} on switch to {}", self.store.mode(), mode);
        }
        self.clear_layers();
        self.store.set_mode(mode);
        self.state = DrawingState::initial(mode);
    }

    /// Handles a toolbar button press.
    ///
    /// Toggles the tool: pressing the active tool deselects it. Returns
    /// `false` when the tool is disabled because its limit is reached.
    pub fn press_tool(&mut self, shape_type: ShapeType) -> bool {
        match self.toolbar.press(&self.store, shape_type) {
            Some(mode) => {
                self.set_mode(mode);
                true
            }
            None => {
                warn!(
                    "{} tool disabled: limit of {} reached",
                    shape_type.label(),
                    self.toolbar.max_for(shape_type)
                );
                false
            }
        }
    }

    /// Discards the shape in progress but keeps the mode (right click or Escape).
    pub fn cancel(&mut self) {
        if self.state.is_drawing() {
            debug!("Cancelled unfinished {}", self.store.mode());
        }
        self.reset_in_progress();
    }

    /// Removes every feature and any shape in progress, and deselects the tool.
    pub fn clear_all(&mut self) {
        let removed = self.store.len();
        self.clear_layers();
        self.store.clear_all();
        self.state = DrawingState::Idle;
        info!("Cleared {} features", removed);
    }

    /// Removes one committed feature by id.
    pub fn remove_feature(&mut self, id: &str) -> Option<Feature> {
        let removed = self.store.remove_feature(id);
        match &removed {
            Some(feature) => info!("Removed {} {}", feature.shape_type.as_str(), id),
            None => warn!("No feature with id {}", id),
        }
        removed
    }
}
