use crate::draw::{Renderer, ShapeType};
use crate::geometry::LatLng;
use crate::input::PointerEvent;
use crate::notification::{Notice, Notifier};
use log::{debug, warn};

use super::{CommitOutcome, DrawingState, InputState};

impl<R: Renderer, N: Notifier> InputState<R, N> {
    /// Dispatches a host pointer event.
    ///
    /// Returns the outcome when the event finished a shape.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<CommitOutcome> {
        match event {
            PointerEvent::Click(point) => self.on_click(point),
            PointerEvent::Move(point) => {
                self.on_pointer_move(point);
                None
            }
            PointerEvent::DoubleClick(_) => self.on_double_click(),
            PointerEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }

    /// Processes a primary click.
    ///
    /// # Behavior
    /// - Circle/rectangle: the first click places the start marker, the second finishes the shape
    /// - Polygon/line: appends a vertex and refreshes the preview
    /// - No mode: ignored
    ///
    /// Starting a new shape is refused once the per-type limit is reached.
    pub fn on_click(&mut self, point: LatLng) -> Option<CommitOutcome> {
        let shape_type = self.store.mode().shape_type()?;
        if !self.state.is_drawing() && !self.may_start(shape_type) {
            return None;
        }

        match &mut self.state {
            DrawingState::Dragging { start } => {
                let start = *start;
                Some(self.finish_two_click(shape_type, start, point))
            }
            DrawingState::AccumulatingVertices { points } => {
                points.push(point);
                debug!("Added {} vertex #{}", shape_type.as_str(), points.len());
                let preview = self.vertex_preview();
                self.show_preview(preview);
                None
            }
            DrawingState::Idle | DrawingState::AwaitingFirstPoint => {
                if self.store.mode().is_two_click() {
                    debug!("Started {} at {:?}", shape_type.as_str(), point);
                    self.state = DrawingState::Dragging { start: point };
                    self.show_marker(point);
                } else {
                    self.state = DrawingState::AccumulatingVertices {
                        points: vec![point],
                    };
                    let preview = self.vertex_preview();
                    self.show_preview(preview);
                }
                None
            }
        }
    }

    /// Processes pointer motion.
    ///
    /// Refreshes the circle or rectangle preview after the first click; the
    /// previous preview layer is replaced, never accumulated.
    pub fn on_pointer_move(&mut self, point: LatLng) {
        if let Some(preview) = self.provisional_shape(point) {
            self.show_preview(Some(preview));
        }
    }

    /// Processes a double-click, finishing a polygon or line.
    ///
    /// Polygons need three vertices and lines two; with fewer the event is
    /// ignored and the vertices are kept.
    pub fn on_double_click(&mut self) -> Option<CommitOutcome> {
        let shape_type = self.store.mode().shape_type()?;
        let minimum = match shape_type {
            ShapeType::Polygon => 3,
            ShapeType::LineString => 2,
            ShapeType::Circle | ShapeType::Rectangle => return None,
        };

        let points = self.state.points();
        if points.len() < minimum {
            debug!(
                "Ignoring finish of {} with {} of {} vertices",
                shape_type.as_str(),
                points.len(),
                minimum
            );
            return None;
        }

        let points = points.to_vec();
        Some(self.finish_vertices(shape_type, &points))
    }

    fn may_start(&mut self, shape_type: ShapeType) -> bool {
        if self.toolbar.can_draw(&self.store, shape_type) {
            return true;
        }
        let max = self.toolbar.max_for(shape_type);
        warn!("{} limit of {} reached; ignoring click", shape_type.label(), max);
        self.notifier.notify(Notice::LimitReached { shape_type, max });
        false
    }
}
