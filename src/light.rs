//! Phong shading for the sphere and hard shadows on the floor.

use crate::{
    algebra::{clamp01, Vec3},
    material::Material,
    ray::Ray,
    sphere::Sphere,
};

/// Base colour of the floor plane before shadowing.
pub const FLOOR_COLOR: Vec3 = Vec3(0.8, 0.8, 0.8);

const SHININESS: i32 = 32;

/// Point light.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub pos: Vec3,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: Vec3,
    pub material: Material,
    pub light: Light,
    /// Multiplier in [0, 1] applied to the floor colour when occluded.
    pub shadow_intensity: f32,
}

impl Lighting {
    /// Ambient + diffuse + specular at `ray.at(t)`, clamped per channel.
    /// `normal` must be the unit surface normal at that point.
    pub fn phong(&self, ray: &Ray, t: f32, normal: Vec3) -> Vec3 {
        let mat = self.material;
        let ambient = self.ambient.mul(mat.color);

        let l = self.light.pos.sub(ray.at(t)).normalize();
        let diffuse_intensity = clamp01(normal.dot(l));
        let diffuse = mat.color.mul(self.light.color).scale(diffuse_intensity);

        // The power is applied before clamping, so a negative V·R still
        // contributes through the even exponent.
        let v = ray.direction.neg().normalize();
        let r = normal.scale(2.0 * l.dot(normal)).sub(l).normalize();
        let specular_intensity = clamp01(v.dot(r).powi(SHININESS));
        let specular = mat.specular.mul(self.light.color).scale(specular_intensity);

        ambient.add(diffuse).add(specular).clamp01()
    }

    /// True when the segment from `point` toward the light hits `occluder`
    /// in front of `point`.
    pub fn in_shadow(&self, point: Vec3, occluder: &Sphere) -> bool {
        let shadow_ray = Ray::new(point, self.light.pos.sub(point).normalize());
        occluder.intersect(&shadow_ray).is_some_and(|t| t > 0.0)
    }

    /// Floor colour at `point`, darkened when `occluder` blocks the light.
    pub fn floor_color(&self, point: Vec3, occluder: &Sphere) -> Vec3 {
        if self.in_shadow(point, occluder) {
            FLOOR_COLOR.scale(self.shadow_intensity)
        } else {
            FLOOR_COLOR
        }
    }
}
