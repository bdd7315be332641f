//! Scene composition for the rendering collaborator
//!
//! Produces meshes, per-object model matrices, lights and a camera. Drawing
//! them is left to whichever backend consumes a `Frame`.

pub mod camera;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use camera::OrbitCamera;
pub use frame::{DrawItem, Frame, LIGHTS, Light, Meshes, ShapeKind, compose};
pub use shapes::Mesh;
pub use vertex::Vertex;
