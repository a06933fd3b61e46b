mod actions;
mod core;
mod pointer;
mod render;
#[cfg(test)]
mod tests;

pub use actions::Action;
pub use core::{PointerState, SketchState};
