use crate::algebra::Vec3;

/// Surface colours of the sphere.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: Vec3,
    pub specular: Vec3,
}
