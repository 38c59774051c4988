//! JSON scene description and the validated, immutable [`Scene`] built
//! from it.

use crate::{
    algebra::{vec3_from_array, Vec3},
    camera::Camera,
    light::{Light, Lighting},
    material::Material,
    plane::Plane,
    sphere::Sphere,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scene: {0}")]
    Invalid(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Deserialize, Debug)]
pub struct ImageJson {
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize, Debug)]
pub struct CameraJson {
    pub viewport_height: f32,
    pub focal_length: f32,
}

#[derive(Deserialize, Debug)]
pub struct SphereJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Deserialize, Debug)]
pub struct PlaneJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub point: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub normal: Vec3,
}

#[derive(Deserialize, Debug)]
pub struct LightingJson {
    #[serde(deserialize_with = "vec3_from_array")]
    pub ambient_color: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub object_color: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub specular_color: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub light_position: Vec3,
    #[serde(deserialize_with = "vec3_from_array")]
    pub light_color: Vec3,
    pub shadow_intensity: f32,
}

#[derive(Deserialize, Debug)]
struct SceneFile {
    image: ImageJson,
    camera: CameraJson,
    sphere: SphereJson,
    plane: PlaneJson,
    lighting: LightingJson,
}

/// Everything needed to resolve a ray. Read-only once built, so it can be
/// shared across render threads.
#[derive(Clone, Copy, Debug)]
pub struct Scene {
    pub camera: Camera,
    pub sphere: Sphere,
    pub plane: Plane,
    pub lighting: Lighting,
}

pub fn load(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&data)
}

pub fn load_from_str(data: &str) -> SceneResult<Scene> {
    let file: SceneFile = serde_json::from_str(data)?;
    file.validate()?;
    Ok(file.into_scene())
}

impl SceneFile {
    fn validate(&self) -> SceneResult<()> {
        let invalid = |msg: String| -> SceneResult<()> { Err(SceneError::Invalid(msg)) };

        let (width, height) = (self.image.width, self.image.height);
        if width <= 1 || height <= 1 {
            return invalid(format!("image must be at least 2x2, got {width}x{height}"));
        }
        if !(self.camera.viewport_height > 0.0) {
            return invalid(format!(
                "viewport_height must be positive, got {}",
                self.camera.viewport_height
            ));
        }
        if !(self.sphere.radius > 0.0) {
            return invalid(format!("sphere radius must be positive, got {}", self.sphere.radius));
        }

        let normal_len = self.plane.normal.norm();
        if normal_len == 0.0 {
            return invalid("plane normal must be non-zero".to_string());
        }
        if (normal_len - 1.0).abs() > 1e-3 {
            log::warn!(
                "Plane normal {:?} has length {:.4}; intersections use it as given",
                self.plane.normal,
                normal_len
            );
        }

        let s = self.lighting.shadow_intensity;
        if !(0.0..=1.0).contains(&s) {
            return invalid(format!("shadow_intensity must be in [0, 1], got {s}"));
        }
        Ok(())
    }

    fn into_scene(self) -> Scene {
        let l = self.lighting;
        Scene {
            camera: Camera::new(
                self.image.width,
                self.image.height,
                self.camera.viewport_height,
                self.camera.focal_length,
            ),
            sphere: Sphere::new(self.sphere.center, self.sphere.radius),
            plane: Plane::new(self.plane.point, self.plane.normal),
            lighting: Lighting {
                ambient: l.ambient_color,
                material: Material {
                    color: l.object_color,
                    specular: l.specular_color,
                },
                light: Light {
                    pos: l.light_position,
                    color: l.light_color,
                },
                shadow_intensity: l.shadow_intensity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "image":    { "width": 8, "height": 6 },
        "camera":   { "viewport_height": 2.0, "focal_length": 1.0 },
        "sphere":   { "center": [0.0, 0.0, -5.0], "radius": 1.0 },
        "plane":    { "point": [0.0, -1.0, 0.0], "normal": [0.0, 1.0, 0.0] },
        "lighting": {
            "ambient_color":  [0.1, 0.1, 0.1],
            "object_color":   [1.0, 0.0, 0.0],
            "specular_color": [1.0, 1.0, 1.0],
            "light_position": [5.0, 5.0, 5.0],
            "light_color":    [1.0, 1.0, 1.0],
            "shadow_intensity": 0.5
        }
    }"#;

    #[test]
    fn test_load_from_str() {
        let scene = load_from_str(SCENE).unwrap();
        assert_eq!(scene.camera.width(), 8);
        assert_eq!(scene.camera.height(), 6);
        assert_eq!(scene.sphere.center, Vec3(0.0, 0.0, -5.0));
        assert_eq!(scene.plane.normal, Vec3(0.0, 1.0, 0.0));
        assert_eq!(scene.lighting.material.color, Vec3(1.0, 0.0, 0.0));
        assert_eq!(scene.lighting.light.pos, Vec3(5.0, 5.0, 5.0));
        assert_eq!(scene.lighting.shadow_intensity, 0.5);
    }

    #[test]
    fn test_sample_scene_file_parses() {
        let scene = load(concat!(env!("CARGO_MANIFEST_DIR"), "/scene.json")).unwrap();
        assert!(scene.camera.width() > 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_from_str("{ \"image\": ").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_short_vector_rejected() {
        let text = SCENE.replace("[0.0, 0.0, -5.0]", "[0.0, -5.0]");
        assert!(matches!(load_from_str(&text), Err(SceneError::Parse(_))));
    }

    #[test]
    fn test_single_pixel_dimension_rejected() {
        for (w, h) in [(1, 6), (8, 1), (0, 0)] {
            let text = SCENE.replace(
                r#""width": 8, "height": 6"#,
                &format!(r#""width": {w}, "height": {h}"#),
            );
            assert!(matches!(load_from_str(&text), Err(SceneError::Invalid(_))), "{w}x{h}");
        }
    }

    #[test]
    fn test_bad_radius_rejected() {
        for r in ["0.0", "-1.0"] {
            let text = SCENE.replace(r#""radius": 1.0"#, &format!(r#""radius": {r}"#));
            assert!(matches!(load_from_str(&text), Err(SceneError::Invalid(_))));
        }
    }

    #[test]
    fn test_zero_normal_rejected() {
        let text = SCENE.replace(r#""normal": [0.0, 1.0, 0.0]"#, r#""normal": [0.0, 0.0, 0.0]"#);
        assert!(matches!(load_from_str(&text), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_bad_viewport_rejected() {
        let text = SCENE.replace(r#""viewport_height": 2.0"#, r#""viewport_height": 0.0"#);
        assert!(matches!(load_from_str(&text), Err(SceneError::Invalid(_))));
    }

    #[test]
    fn test_shadow_intensity_range() {
        let text = SCENE.replace(r#""shadow_intensity": 0.5"#, r#""shadow_intensity": 1.5"#);
        assert!(matches!(load_from_str(&text), Err(SceneError::Invalid(_))));

        let text = SCENE.replace(r#""shadow_intensity": 0.5"#, r#""shadow_intensity": 0.0"#);
        assert!(load_from_str(&text).is_ok());
    }
}
