pub mod geometry;
pub mod mesh;
pub mod scene;

pub use geometry::{Intersection, Ray, ZeroTest};
pub use mesh::{Mesh, MeshError, Shading};
pub use scene::{MaterialIdx, Plane, Scene, SceneSettings, Shape, Sphere, Triangle};
