use super::{CommitOutcome, DrawingState, InputState};
use crate::config::TrimFailurePolicy;
use crate::draw::{Feature, Renderer, ShapeType};
use crate::geometry::{
    LatLng, LatLngBounds, ShapeGeometry, area_m2, circle, classify_overlap, distance_km,
    line_string, polygon_from_points, rectangle, trim_overlap,
};
use crate::notification::{Notice, Notifier};
use log::{debug, info, warn};

impl<R: Renderer, N: Notifier> InputState<R, N> {
    /// Builds the circle or rectangle spanned by two clicks and resolves it.
    pub(super) fn finish_two_click(
        &mut self,
        shape_type: ShapeType,
        start: LatLng,
        end: LatLng,
    ) -> CommitOutcome {
        let candidate = match shape_type {
            ShapeType::Circle => circle(start, distance_km(start, end), self.circle_steps),
            _ => {
                let bounds = LatLngBounds::from_corners(start, end);
                if self.reject_degenerate && bounds.is_degenerate() {
                    warn!("Discarding rectangle with zero width or height");
                    self.reset_in_progress();
                    return CommitOutcome::Discarded;
                }
                rectangle(&bounds)
            }
        };
        let outcome = self.resolve_area(candidate, shape_type);
        self.reset_in_progress();
        outcome
    }

    /// Builds the polygon or line through `points` and resolves it.
    pub(super) fn finish_vertices(
        &mut self,
        shape_type: ShapeType,
        points: &[LatLng],
    ) -> CommitOutcome {
        let outcome = match shape_type {
            // Lines never take part in overlap checks
            ShapeType::LineString => self.commit(line_string(points), shape_type, false),
            _ => self.resolve_area(polygon_from_points(points), shape_type),
        };
        self.reset_in_progress();
        outcome
    }

    /// Rejects, trims, or commits an area candidate against the stored areas.
    fn resolve_area(&mut self, candidate: ShapeGeometry, shape_type: ShapeType) -> CommitOutcome {
        if self.reject_degenerate {
            let area = area_m2(&candidate);
            if area <= self.overlap.tolerance {
                warn!(
                    "Discarding {} with zero area ({:.6} m²)",
                    shape_type.as_str(),
                    area
                );
                return CommitOutcome::Discarded;
            }
        }

        let overlap = classify_overlap(&candidate, self.store.area_geometries(), &self.overlap);
        if overlap.fully_enclosed {
            info!(
                "Rejected {}: encloses or is enclosed by an existing shape",
                shape_type.as_str()
            );
            self.notifier.notify(Notice::Enclosed);
            return CommitOutcome::Rejected;
        }
        if !overlap.overlaps {
            return self.commit(candidate, shape_type, false);
        }

        match trim_overlap(&candidate, self.store.area_geometries()) {
            Some(trimmed) => {
                debug!(
                    "Trimmed {} from {} to {} vertices",
                    shape_type.as_str(),
                    candidate.vertex_count(),
                    trimmed.vertex_count()
                );
                self.commit(trimmed, shape_type, true)
            }
            None => {
                warn!(
                    "Discarding {}: trimmed shape would be empty or split",
                    shape_type.as_str()
                );
                if self.trim_failure == TrimFailurePolicy::Notify {
                    self.notifier.notify(Notice::TrimFailed);
                }
                CommitOutcome::Discarded
            }
        }
    }

    fn commit(
        &mut self,
        geometry: ShapeGeometry,
        shape_type: ShapeType,
        trimmed: bool,
    ) -> CommitOutcome {
        let max = self.toolbar.max_for(shape_type);
        let feature = Feature::new(geometry, shape_type);
        let id = feature.id.clone();

        if self.store.try_add_feature(feature, max) {
            info!("Committed {} {}", shape_type.as_str(), id);
            CommitOutcome::Committed { id, trimmed }
        } else {
            warn!(
                "{} limit of {} reached; discarding new shape",
                shape_type.label(),
                max
            );
            self.notifier.notify(Notice::LimitReached { shape_type, max });
            CommitOutcome::LimitReached
        }
    }

    /// Drops the marker and preview and restarts the active mode.
    pub(super) fn reset_in_progress(&mut self) {
        self.clear_layers();
        self.state = DrawingState::initial(self.store.mode());
    }
}
