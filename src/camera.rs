//! Pinhole camera at the world origin looking down −Z.

use crate::{algebra::Vec3, ray::Ray};

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    origin: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left: Vec3,
    width: u32,
    height: u32,
}

impl Camera {
    /// Viewport sized from the image aspect ratio and `viewport_height`,
    /// placed `focal_length` in front of the origin.
    ///
    /// `width` and `height` must both be greater than 1. The pixel mapping
    /// divides by `width - 1` and `height - 1`, and a dimension of 1 yields
    /// non-finite ray directions; this is not guarded here.
    pub fn new(width: u32, height: u32, viewport_height: f32, focal_length: f32) -> Self {
        let aspect = width as f32 / height as f32;
        let viewport_width = aspect * viewport_height;

        let origin = Vec3::ZERO;
        let horizontal = Vec3(viewport_width, 0.0, 0.0);
        let vertical = Vec3(0.0, viewport_height, 0.0);
        let lower_left = origin
            .sub(horizontal.scale(0.5))
            .sub(vertical.scale(0.5))
            .sub(Vec3(0.0, 0.0, focal_length));

        Self { origin, horizontal, vertical, lower_left, width, height }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn origin(&self) -> Vec3 { self.origin }

    /// Primary ray through pixel column `i`, row `j`. Row 0 is the top of
    /// the viewport.
    pub fn ray(&self, i: u32, j: u32) -> Ray {
        let u = i as f32 / (self.width as f32 - 1.0);
        let v = (self.height as f32 - j as f32 - 1.0) / (self.height as f32 - 1.0);

        let direction = self.lower_left
            .add(self.horizontal.scale(u))
            .add(self.vertical.scale(v))
            .sub(self.origin);
        Ray::new(self.origin, direction)
    }
}
