use crate::{algebra::Vec3, ray::Ray};

/// Below this |N·D| the ray counts as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Infinite plane through `point`. `normal` should be unit length.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point  : Vec3,
    pub normal : Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// Returns the hit parameter `t >= 0`, or `None` if the ray is parallel
    /// to the plane or the plane lies behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {   // ray ‖ plane
            return None;
        }

        let t = self.point.sub(ray.origin).dot(self.normal) / denom;
        (t >= 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3(0.0, -1.0, 0.0), Vec3(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, -0.5, -1.0));
        let t = floor().intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
        assert!((ray.at(t).1 + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallel_ray_misses_from_any_origin() {
        for origin in [Vec3::ZERO, Vec3(0.0, -1.0, 0.0), Vec3(5.0, -30.0, 2.0)] {
            let ray = Ray::new(origin, Vec3(1.0, 0.0, -1.0));
            assert_eq!(floor().intersect(&ray), None);
        }
    }

    #[test]
    fn test_nearly_parallel_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, -1e-7, -1.0));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_plane_behind_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3(0.0, 1.0, -1.0));
        assert_eq!(floor().intersect(&ray), None);
    }

    #[test]
    fn test_origin_on_plane_hits_at_zero() {
        let ray = Ray::new(Vec3(0.0, -1.0, 0.0), Vec3(0.0, -1.0, 0.0));
        assert_eq!(floor().intersect(&ray), Some(0.0));
    }
}
