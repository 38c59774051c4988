//! Ray caster for a one-sphere, one-plane scene lit by a single point light.
//!
//! A [`Scene`] is loaded once and passed by reference into every call;
//! [`renderer::resolve`] turns a ray into a pixel and [`renderer::render`]
//! fills an image with it.

pub mod algebra;
pub mod camera;
pub mod light;
pub mod material;
pub mod object;
pub mod plane;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;

pub use algebra::Vec3;
pub use camera::Camera;
pub use light::{Light, Lighting, FLOOR_COLOR};
pub use material::Material;
pub use object::Surface;
pub use plane::Plane;
pub use ray::Ray;
pub use renderer::{render, render_image_name, render_parallel, resolve, shade, sky_gradient};
pub use scene::{Scene, SceneError, SceneResult};
pub use sphere::Sphere;
