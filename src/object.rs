use crate::{ray::Ray, scene::Scene};

/// What a primary ray sees first, with the hit parameter where there is one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Surface {
    Sphere(f32),
    Floor(f32),
    Sky,
}

impl Surface {
    /// The sphere wins when it is hit in front of the origin and either the
    /// plane is missed or lies farther away. A plane hit at exactly `t = 0`
    /// is not visible and falls through to the sky.
    pub fn nearest(scene: &Scene, ray: &Ray) -> Self {
        let sphere_t = scene.sphere.intersect(ray);
        let plane_t = scene.plane.intersect(ray);

        match (sphere_t, plane_t) {
            (Some(s), p) if s > 0.0 && p.map_or(true, |p| s < p) => Self::Sphere(s),
            (_, Some(p)) if p > 0.0 => Self::Floor(p),
            _ => Self::Sky,
        }
    }
}
