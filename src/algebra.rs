use serde::Deserialize;

/// Point, direction or linear RGB colour, depending on context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub const ZERO: Self = Self(0.0, 0.0, 0.0);

    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2) }
    pub fn mul(self, v: Self) -> Self { Self(self.0*v.0, self.1*v.1, self.2*v.2) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 }
    pub fn norm(self) -> f32 { self.dot(self).sqrt() }
    pub fn neg(self) -> Self { Self(-self.0,-self.1,-self.2) }
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self { Self(f(self.0), f(self.1), f(self.2)) }

    /// Unit-length copy. A zero vector comes back unchanged, so callers
    /// cannot assume the result has length 1.
    pub fn normalize(self) -> Self {
        let n = self.norm();
        if n == 0.0 { self } else { self.scale(1.0/n) }
    }

    pub fn clamp01(self) -> Self { self.map(clamp01) }

    /// `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.scale(1.0 - t).add(other.scale(t))
    }

    /// Colour → 8-bit channels (clamped, ×255, truncated).
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamp01();
        [
            (c.0*255.0) as u8,
            (c.1*255.0) as u8,
            (c.2*255.0) as u8,
        ]
    }
}

#[inline]
pub fn clamp01(x: f32) -> f32 { x.clamp(0.0, 1.0) }

impl From<[f32; 3]> for Vec3 {
    fn from(a: [f32; 3]) -> Self { Vec3(a[0], a[1], a[2]) }
}

/* Custom helper so Serde turns a JSON array into Vec3 */
pub fn vec3_from_array<'de, D>(d: D) -> Result<Vec3, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 3]>::deserialize(d)?;
    Ok(arr.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3(3.0, -4.0, 12.0).normalize();
        assert!((v.norm() - 1.0).abs() < 1e-6);
        assert!((v.0 - 3.0 / 13.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_and_bytes() {
        let c = Vec3(-0.5, 0.5, 2.0);
        assert_eq!(c.clamp01(), Vec3(0.0, 0.5, 1.0));
        assert_eq!(c.to_rgb8(), [0, 127, 255]);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vec3(0.2, 0.2, 0.3);
        let b = Vec3(0.8, 0.8, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_mul_is_componentwise() {
        assert_eq!(Vec3(1.0, 2.0, 3.0).mul(Vec3(2.0, 0.5, 0.0)), Vec3(2.0, 1.0, 0.0));
    }
}
