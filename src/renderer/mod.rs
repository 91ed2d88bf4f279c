//! Scene tessellation for GPU front ends
//!
//! Produces plain triangle lists; owning a device, pipeline and surface is
//! the presentation layer's job.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{TextItem, build_scene, overlay_text, popup_text};
pub use vertex::{Vertex, colors};
