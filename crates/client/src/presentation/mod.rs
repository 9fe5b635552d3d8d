//! Console presentation: colour theme and event rendering.
mod render;
mod theme;

pub use render::Renderer;
pub use theme::{Theme, Tone};
