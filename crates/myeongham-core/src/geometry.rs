//! 3D rotation and pinhole projection onto the terminal cell grid.

use std::ops::{Add, AddAssign, Mul};

/// Horizontal stretch applied at projection time. Terminal cells are
/// roughly twice as tall as they are wide, so one object-space unit
/// covers two columns but only one row.
pub const CELL_ASPECT: f32 = 2.0;

/// Smallest allowed projection denominator. Keeps the scale finite for
/// points approaching the focal plane.
const MIN_DEPTH: f32 = 1.0;

/// A point or direction in object space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Rotation angles about the X, Y and Z axes, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Rotation {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotate a point about the X axis, then Y, then Z.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        let (sx, cx) = self.x.sin_cos();
        let y1 = p.y * cx - p.z * sx;
        let z1 = p.y * sx + p.z * cx;

        let (sy, cy) = self.y.sin_cos();
        let x2 = p.x * cy + z1 * sy;
        let z2 = -p.x * sy + z1 * cy;

        let (sz, cz) = self.z.sin_cos();
        let x3 = x2 * cz - y1 * sz;
        let y3 = x2 * sz + y1 * cz;

        Vec3::new(x3, y3, z2)
    }
}

/// A screen position produced by [`Viewport::project`], with the
/// perspective scale that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Fractional column.
    pub col: f32,
    /// Fractional row.
    pub row: f32,
    /// Perspective scale, 1.0 at the focal plane origin.
    pub scale: f32,
}

/// The drawing surface and pinhole camera for the cube projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in columns.
    pub width: f32,
    /// Height in rows.
    pub height: f32,
    /// Focal length in object-space units (rows).
    pub focal: f32,
}

impl Viewport {
    pub fn new(width: u16, height: u16, focal: f32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            focal,
        }
    }

    /// Project an object-space point onto the cell grid, viewport
    /// centered, aspect corrected.
    pub fn project(&self, p: Vec3) -> Projected {
        let depth = (self.focal + p.z).max(MIN_DEPTH);
        let scale = self.focal / depth;
        Projected {
            col: p.x * scale * CELL_ASPECT + self.width / 2.0,
            row: p.y * scale + self.height / 2.0,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotation() {
        let p = Vec3::new(3.0, -2.0, 5.0);
        let rotated = Rotation::default().apply(p);
        assert!((rotated.x - p.x).abs() < 1e-6);
        assert!((rotated.y - p.y).abs() < 1e-6);
        assert!((rotated.z - p.z).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let r = Rotation::new(0.7, -1.3, 2.1);
        let rotated = r.apply(p);
        assert!((rotated.length() - p.length()).abs() < 1e-4);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        let r = Rotation::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let rotated = r.apply(p);
        assert!(rotated.x.abs() < 1e-6);
        assert!((rotated.z - -1.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_origin_hits_center() {
        let vp = Viewport::new(80, 24, 60.0);
        let p = vp.project(Vec3::ZERO);
        assert!((p.col - 40.0).abs() < 1e-6);
        assert!((p.row - 12.0).abs() < 1e-6);
        assert!((p.scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_near_focal_plane_is_finite() {
        let vp = Viewport::new(80, 24, 60.0);
        let p = vp.project(Vec3::new(10.0, 10.0, -60.0));
        assert!(p.scale.is_finite());
        assert!(p.col.is_finite() && p.row.is_finite());
    }

    #[test]
    fn test_aspect_stretch() {
        let vp = Viewport::new(100, 40, 50.0);
        let p = vp.project(Vec3::new(5.0, 5.0, 0.0));
        assert!((p.col - (50.0 + 5.0 * CELL_ASPECT)).abs() < 1e-4);
        assert!((p.row - 25.0).abs() < 1e-4);
    }
}
