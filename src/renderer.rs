use crate::{
    algebra::Vec3,
    object::Surface,
    ray::Ray,
    scene::Scene,
};
use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use rand::Rng;
use rayon::prelude::*;

const SKY_HORIZON: Vec3 = Vec3(0.2, 0.2, 0.3);
const SKY_ZENITH: Vec3 = Vec3(0.8, 0.8, 1.0);

/// Background gradient, blended on the ray's vertical direction: straight
/// down gives the horizon colour, straight up the zenith colour.
pub fn sky_gradient(ray: &Ray) -> Vec3 {
    let t = 0.5 * (ray.direction.normalize().1 + 1.0);
    SKY_HORIZON.lerp(SKY_ZENITH, t)
}

/// Linear colour seen along `ray`, every channel in [0, 1].
pub fn shade(scene: &Scene, ray: &Ray) -> Vec3 {
    match Surface::nearest(scene, ray) {
        Surface::Sphere(t) => {
            let normal = scene.sphere.normal_at(ray.at(t));
            scene.lighting.phong(ray, t, normal)
        }
        Surface::Floor(t) => scene.lighting.floor_color(ray.at(t), &scene.sphere),
        Surface::Sky => sky_gradient(ray),
    }
}

/// Final 8-bit colour for one ray. Pure: depends only on `scene` and `ray`.
pub fn resolve(scene: &Scene, ray: &Ray) -> [u8; 3] {
    shade(scene, ray).to_rgb8()
}

/// Reference single-threaded render. Row 0 is the top of the image.
pub fn render(scene: &Scene) -> RgbImage {
    let camera = &scene.camera;
    RgbImage::from_fn(camera.width(), camera.height(), |x, y| {
        Rgb(resolve(scene, &camera.ray(x, y)))
    })
}

/// Same image as [`render`], with rows spread over the rayon pool. `bar`
/// advances once per finished row.
pub fn render_parallel(scene: &Scene, bar: Option<&ProgressBar>) -> RgbImage {
    let camera = &scene.camera;
    let (width, height) = (camera.width(), camera.height());

    let rows: Vec<_> = (0..height).into_par_iter().flat_map(|y| {
        let row: Vec<_> = (0..width)
            .map(|x| ((x, y), resolve(scene, &camera.ray(x, y))))
            .collect();
        if let Some(b) = bar {
            b.inc(1);
        }
        row
    }).collect();

    let mut img = RgbImage::new(width, height);
    for ((x, y), rgb) in rows { img.put_pixel(x, y, Rgb(rgb)); }
    img
}

pub fn render_image_name(w: u32, h: u32) -> String {
    let suf: String = rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(6).map(char::from).collect();
    format!("renders/render_{w}x{h}_{suf}.png")
}
