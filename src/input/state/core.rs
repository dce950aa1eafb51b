//! Drawing state machine and input state management.

use crate::config::{Config, TrimFailurePolicy};
use crate::draw::{FeatureStore, LayerId, Renderer, StoreEvent, Style};
use crate::geometry::{LatLng, OverlapOptions};
use crate::input::DrawingMode;
use crate::notification::Notifier;
use crate::toolbar::Toolbar;

/// Current drawing state machine.
///
/// Tracks where the active mode is in building its shape. Transitions occur
/// on pointer events and mode changes.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawingState {
    /// No mode selected
    Idle,
    /// Circle or rectangle mode, waiting for the first click
    AwaitingFirstPoint,
    /// Circle or rectangle mode after the first click
    Dragging {
        /// Circle center or first rectangle corner
        start: LatLng,
    },
    /// Polygon or line mode, collecting vertices until double-click
    AccumulatingVertices {
        /// Clicked vertices in order
        points: Vec<LatLng>,
    },
}

impl DrawingState {
    /// State a mode starts in, and returns to after each shape.
    pub fn initial(mode: DrawingMode) -> Self {
        match mode {
            DrawingMode::None => DrawingState::Idle,
            DrawingMode::Circle | DrawingMode::Rectangle => DrawingState::AwaitingFirstPoint,
            DrawingMode::Polygon | DrawingMode::LineString => {
                DrawingState::AccumulatingVertices { points: Vec::new() }
            }
        }
    }

    /// True while a shape has been started but not finished.
    pub fn is_drawing(&self) -> bool {
        match self {
            DrawingState::Dragging { .. } => true,
            DrawingState::AccumulatingVertices { points } => !points.is_empty(),
            DrawingState::Idle | DrawingState::AwaitingFirstPoint => false,
        }
    }

    /// Vertices collected so far (empty outside vertex accumulation).
    pub fn points(&self) -> &[LatLng] {
        match self {
            DrawingState::AccumulatingVertices { points } => points,
            _ => &[],
        }
    }
}

/// How a finished shape was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Stored under the given id; `trimmed` is set when overlap was cut away
    Committed { id: String, trimmed: bool },
    /// Encloses, or is enclosed by, a committed shape
    Rejected,
    /// Dropped without storing: trim failure or zero area
    Discarded,
    /// The per-type limit was reached before the shape could be stored
    LimitReached,
}

impl CommitOutcome {
    /// Id of the stored feature, if the shape was committed.
    pub fn committed_id(&self) -> Option<&str> {
        match self {
            CommitOutcome::Committed { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Main input state: the feature store plus the shape in progress.
///
/// All store mutations go through this type. It owns the renderer the
/// marker and preview layers are drawn on, and the notifier that tells the
/// user about rejected shapes.
pub struct InputState<R: Renderer, N: Notifier> {
    /// Committed features and active mode
    pub(super) store: FeatureStore,
    /// Progress of the active mode
    pub(super) state: DrawingState,
    pub(super) renderer: R,
    pub(super) notifier: N,
    /// Start marker of a two-click shape
    pub(super) marker_layer: Option<LayerId>,
    /// Live preview layer
    pub(super) preview_layer: Option<LayerId>,
    pub(super) toolbar: Toolbar,
    /// Vertices per generated circle
    pub(super) circle_steps: usize,
    pub(super) overlap: OverlapOptions,
    pub(super) trim_failure: TrimFailurePolicy,
    /// Discard zero-area shapes instead of committing them
    pub(super) reject_degenerate: bool,
    pub(super) area_style: Style,
    pub(super) line_style: Style,
}

impl<R: Renderer, N: Notifier> InputState<R, N> {
    /// Creates an idle input state with an empty store.
    pub fn new(config: &Config, renderer: R, notifier: N) -> Self {
        Self {
            store: FeatureStore::new(),
            state: DrawingState::Idle,
            renderer,
            notifier,
            marker_layer: None,
            preview_layer: None,
            toolbar: Toolbar::new(config.limits.clone()),
            circle_steps: config.circle.steps,
            overlap: config.overlap_options(),
            trim_failure: config.overlap.trim_failure,
            reject_degenerate: config.overlap.reject_degenerate,
            area_style: Style::area(&config.style),
            line_style: Style::line(&config.style),
        }
    }

    /// Creates an input state with default settings.
    pub fn with_defaults(renderer: R, notifier: N) -> Self {
        Self::new(&Config::default(), renderer, notifier)
    }

    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    /// Registers a store listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.store.subscribe(listener);
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn mode(&self) -> DrawingMode {
        self.store.mode()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
