//! Presentation side: terminal styling and theme comparison.

pub mod compare;
pub mod painter;

pub use compare::{compare, preview};
pub use painter::Painter;
