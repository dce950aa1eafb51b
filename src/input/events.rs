//! Generic pointer event types for host map surfaces.

use crate::geometry::LatLng;

/// Pointer interaction dispatched by the host map surface.
///
/// Hosts translate their native events into these values; the drawing state
/// machine consumes them in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary click at a map position
    Click(LatLng),
    /// Pointer moved (high frequency; only refreshes the preview)
    Move(LatLng),
    /// Double-click, finishing polygons and lines
    DoubleClick(LatLng),
    /// Cancel the shape in progress (right click or Escape)
    Cancel,
}
