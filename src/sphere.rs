//! src/sphere.rs
//! -------------
//! The scene's single sphere.

use crate::{algebra::Vec3, ray::Ray};

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    pub center : Vec3,
    pub radius : f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Intersect a ray (ro + t·rd).
    /// Returns the *smaller* root of the quadratic, or `None` when the
    /// discriminant is negative. The root is not checked for sign: a sphere
    /// behind the origin, or an origin inside the sphere, gives `t <= 0`,
    /// and callers must test `t > 0` themselves.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Analytic quadratic; `a` absorbs an unnormalized direction
        let oc   = ray.origin.sub(self.center);
        let a    = ray.direction.dot(ray.direction);
        let b    = 2.0 * oc.dot(ray.direction);
        let c    = oc.dot(oc) - self.radius * self.radius;
        let disc = b*b - 4.0*a*c;
        if disc < 0.0 { return None; }

        Some((-b - disc.sqrt()) / (2.0 * a))
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        p.sub(self.center).normalize()
    }
}
