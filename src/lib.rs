//! Library exports for the glyphpad subsystems.
//!
//! Exposes the drawing model, input state machine, configuration, and
//! export pipeline so integration tests and external tools can drive the
//! sketchpad without opening a window.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;

pub use config::Config;
