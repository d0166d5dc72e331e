//! Platform abstraction layer
//!
//! Browser bindings for the pieces the game core keeps abstract:
//! - Display refresh (`requestAnimationFrame`) as a [`FrameHost`](crate::FrameHost)
//! - Canvas 2D context as a [`Surface`](crate::renderer::Surface)

#[cfg(target_arch = "wasm32")]
pub mod web;
