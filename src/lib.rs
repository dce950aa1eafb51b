//! Library exports for the geoscriber drawing engine.
//!
//! Exposes the geometry kernel, the feature store, and the pointer-driven
//! drawing state machine so that map hosts (and the bundled headless CLI)
//! can share overlap rules and export code.

pub mod config;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod input;
pub mod notification;
pub mod script;
pub mod toolbar;
pub mod util;

pub use config::Config;
