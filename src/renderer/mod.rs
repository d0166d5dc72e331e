//! Immediate-mode 2D rendering module
//!
//! Draws a [`GameState`](crate::sim::GameState) onto any [`Surface`], in a
//! coordinate space rotated 45° about the canvas center.

pub mod frame;
pub mod layout;
pub mod surface;

pub use frame::Renderer;
pub use layout::{Layout, mouth_aperture};
pub use surface::{CountingSurface, Surface};
