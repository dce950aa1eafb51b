//! Pointer handling and the drawing state machine.
//!
//! This module translates host pointer events into drawing actions. It keeps
//! the in-progress shape for the active mode, drives the live preview, and on
//! completion resolves overlaps before committing to the feature store.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use state::{CommitOutcome, DrawingState, InputState};
pub use tool::{DrawingMode, ParseModeError};
