mod actions;
mod commit;
mod core;
mod mouse;
mod render;

pub use core::{CommitOutcome, DrawingState, InputState};
