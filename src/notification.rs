//! User-facing notices raised by the drawing engine.

use crate::draw::ShapeType;
use std::fmt;

/// Message shown when a shape is rejected for enclosure.
pub const ENCLOSURE_MESSAGE: &str =
    "Cannot draw: This shape fully encloses or is fully enclosed by an existing shape";

/// Message shown when trimming leaves nothing usable.
pub const TRIM_FAILURE_MESSAGE: &str =
    "Cannot draw: The trimmed shape would be empty or split into several parts";

/// A condition the user should be told about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The candidate encloses, or is enclosed by, a committed shape
    Enclosed,
    /// Trimming the candidate against committed shapes failed
    TrimFailed,
    /// The per-type limit for this shape type is reached
    LimitReached { shape_type: ShapeType, max: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Enclosed => f.write_str(ENCLOSURE_MESSAGE),
            Notice::TrimFailed => f.write_str(TRIM_FAILURE_MESSAGE),
            Notice::LimitReached { shape_type, max } => write!(
                f,
                "Cannot draw: {} limit of {} reached",
                shape_type.label(),
                max
            ),
        }
    }
}

/// Shows notices to the user.
///
/// Notices are synchronous; the engine continues once `notify` returns.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        log::warn!("{}", notice);
    }
}

/// Keeps every notice it receives, for hosts that display them later.
#[derive(Debug, Default, Clone)]
pub struct NoticeLog {
    pub notices: Vec<Notice>,
}

impl Notifier for NoticeLog {
    fn notify(&mut self, notice: Notice) {
        log::debug!("Recorded notice: {}", notice);
        self.notices.push(notice);
    }
}
