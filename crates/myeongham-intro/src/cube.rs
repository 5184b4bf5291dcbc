//! The rotating binary cube and its explosion.

use myeongham_core::{Glyph, Particle, Rotation, Vec3, Viewport, seed};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};

/// Nominal frame length the per-frame motion constants assume. Elapsed
/// time is normalized against this so pacing is poll-rate independent.
const FRAME_MS: f32 = 16.7;

/// Focal length as a multiple of the cube half-size.
const FOCAL_FACTOR: f32 = 4.5;

/// Pointer-follow easing per nominal frame.
const POINTER_EASE: f32 = 0.05;

/// Tilt at the screen edge, radians.
const POINTER_TILT: f32 = 0.55;

/// Constant drift per nominal frame, radians.
const DRIFT_Y: f32 = 0.008;
const DRIFT_Z: f32 = 0.003;

/// Arrow-key rotation step, radians.
const NUDGE_STEP: f32 = 0.12;

/// Explosion speed bounds as a fraction of the half-size, per nominal
/// frame.
const BURST_SPEED_MIN: f32 = 0.09;
const BURST_SPEED_MAX: f32 = 0.27;

/// Opacity multiplier per nominal frame while exploding.
const BURST_DECAY: f32 = 0.96;

/// Gray level at the cube's depth midpoint and its span across the
/// cube size.
const SHADE_BASE: f32 = 150.0;
const SHADE_SPAN: f32 = 105.0;

/// Spawn distribution of the cube particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnStyle {
    /// All particles uniformly over the six faces.
    Faces,
    /// Half along the twelve edges for a wireframe look, half over the
    /// faces.
    Wireframe,
}

/// The explodable particle cube of the intro overlay.
#[derive(Debug)]
pub struct CubeField {
    particles: Vec<Particle>,
    rotation: Rotation,
    half: f32,
    exploding: bool,
}

impl CubeField {
    /// Spawn `count` particles on a cube of the given half-size, in
    /// rows of object space.
    pub fn new(count: usize, half: f32, style: SpawnStyle, field_seed: u64) -> Self {
        let particles = (0..count)
            .map(|i| {
                let m = seed::mix(field_seed, i as u64);
                let on_edge = style == SpawnStyle::Wireframe && i % 2 == 0;
                let pos = if on_edge {
                    edge_point(half, m)
                } else {
                    face_point(half, m)
                };
                let glyph = Glyph::from_seed(seed::mix(m, 1));
                let alpha = seed::range(seed::mix(m, 2), 0.3, 1.0);
                Particle::at_rest(pos, glyph, alpha)
            })
            .collect();

        Self {
            particles,
            rotation: Rotation::default(),
            half,
            exploding: false,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_exploding(&self) -> bool {
        self.exploding
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Arrow-key rotation step. Ignored once exploding.
    pub fn nudge(&mut self, cols: f32, rows: f32) {
        if self.exploding {
            return;
        }
        self.rotation.y += cols * NUDGE_STEP;
        self.rotation.x += rows * NUDGE_STEP;
    }

    /// Assign radial burst velocities. A second call is a no-op: the
    /// fade already in flight is never restarted.
    pub fn explode(&mut self, burst_seed: u64) {
        if self.exploding {
            return;
        }
        self.exploding = true;

        for (i, p) in self.particles.iter_mut().enumerate() {
            let m = seed::mix(burst_seed, i as u64);
            let planar = p.pos.y.atan2(p.pos.x);
            let polar = p
                .pos
                .z
                .atan2((p.pos.x * p.pos.x + p.pos.y * p.pos.y).sqrt());
            let speed = self.half * seed::range(m, BURST_SPEED_MIN, BURST_SPEED_MAX);
            p.vel = Vec3::new(
                planar.cos() * polar.cos() * speed,
                planar.sin() * speed,
                polar.sin() * speed,
            );
        }
    }

    /// Advance one frame. While intact only the shared rotation moves:
    /// constant drift plus eased pointer follow. While exploding each
    /// particle integrates its velocity and fades.
    pub fn update(&mut self, delta_ms: u64, pointer: Option<(f32, f32)>) {
        let dt = delta_ms as f32 / FRAME_MS;

        if self.exploding {
            for p in &mut self.particles {
                p.pos += p.vel * dt;
                p.alpha *= BURST_DECAY.powf(dt);
            }
            return;
        }

        if let Some((px, py)) = pointer {
            let target_y = px * POINTER_TILT;
            let target_x = py * POINTER_TILT;
            self.rotation.y += (target_y - self.rotation.y * 0.1) * POINTER_EASE * dt;
            self.rotation.x += (target_x - self.rotation.x * 0.1) * POINTER_EASE * dt;
        }
        self.rotation.y += DRIFT_Y * dt;
        self.rotation.z += DRIFT_Z * dt;
    }

    /// Paint the field into the buffer, depth-sorted. Every particle is
    /// rotated and projected fresh; the sort must be redone per frame
    /// because rotation changes depth order.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let viewport = Viewport::new(area.width, area.height, self.half * FOCAL_FACTOR);

        let mut rotated: Vec<(Vec3, &Particle)> = self
            .particles
            .iter()
            .map(|p| (self.rotation.apply(p.pos), p))
            .collect();
        rotated.sort_by(|a, b| a.0.z.total_cmp(&b.0.z));

        for (r, p) in rotated {
            let proj = viewport.project(r);
            let col = proj.col.round();
            let row = proj.row.round();
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let (col, row) = (col as u16, row as u16);
            if col >= area.width || row >= area.height {
                continue;
            }
            let shade = self.shade(r.z, p.alpha * proj.scale);
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(p.glyph.as_char()).set_fg(shade);
            }
        }
    }

    /// Depth shading: a linear map of rotated z across the cube size
    /// onto a gray channel, scaled by opacity.
    fn shade(&self, z: f32, alpha: f32) -> Color {
        let base = (SHADE_BASE + (z / (2.0 * self.half)) * SHADE_SPAN).clamp(0.0, 255.0);
        let v = (base * alpha.clamp(0.0, 1.0)) as u8;
        Color::Rgb(v, v, v)
    }
}

/// Uniform point on one of the six faces.
fn face_point(half: f32, m: u64) -> Vec3 {
    let u = seed::range(seed::mix(m, 11), -half, half);
    let v = seed::range(seed::mix(m, 12), -half, half);
    match m % 6 {
        0 => Vec3::new(half, u, v),
        1 => Vec3::new(-half, u, v),
        2 => Vec3::new(u, half, v),
        3 => Vec3::new(u, -half, v),
        4 => Vec3::new(u, v, half),
        _ => Vec3::new(u, v, -half),
    }
}

/// Uniform point on one of the twelve edges.
fn edge_point(half: f32, m: u64) -> Vec3 {
    let edge = m % 12;
    let t = seed::range(seed::mix(m, 13), -half, half);
    let q = edge % 4;
    let a = if q & 1 == 0 { -half } else { half };
    let b = if q & 2 == 0 { -half } else { half };
    match edge / 4 {
        0 => Vec3::new(t, a, b),
        1 => Vec3::new(a, t, b),
        _ => Vec3::new(a, b, t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_count_and_ranges() {
        for count in [0usize, 1, 40, 1200] {
            let field = CubeField::new(count, 10.0, SpawnStyle::Faces, 7);
            assert_eq!(field.len(), count);
            for p in field.particles() {
                assert!((0.0..=1.0).contains(&p.alpha));
                assert!(matches!(p.glyph.as_char(), '0' | '1'));
            }
        }
    }

    #[test]
    fn test_face_spawn_lies_on_surface() {
        let half = 10.0;
        let field = CubeField::new(500, half, SpawnStyle::Faces, 3);
        for p in field.particles() {
            let m = p.pos.x.abs().max(p.pos.y.abs()).max(p.pos.z.abs());
            assert!((m - half).abs() < 1e-4);
        }
    }

    #[test]
    fn test_wireframe_spawn_includes_edge_points() {
        let half = 10.0;
        let field = CubeField::new(200, half, SpawnStyle::Wireframe, 3);
        let on_edge = field
            .particles()
            .iter()
            .filter(|p| {
                let pinned = [p.pos.x, p.pos.y, p.pos.z]
                    .iter()
                    .filter(|c| (c.abs() - half).abs() < 1e-4)
                    .count();
                pinned >= 2
            })
            .count();
        assert!(on_edge >= 100);
    }

    #[test]
    fn test_idle_update_moves_rotation_not_particles() {
        let mut field = CubeField::new(100, 10.0, SpawnStyle::Faces, 5);
        let before: Vec<Vec3> = field.particles().iter().map(|p| p.pos).collect();
        field.update(100, Some((0.5, -0.5)));
        assert!(field.rotation().y != 0.0);
        for (p, pos) in field.particles().iter().zip(before) {
            assert_eq!(p.pos, pos);
            assert_eq!(p.pos, p.rest);
        }
    }

    #[test]
    fn test_explosion_is_idempotent() {
        let mut field = CubeField::new(100, 10.0, SpawnStyle::Faces, 5);
        field.explode(11);
        let first: Vec<Vec3> = field.particles().iter().map(|p| p.vel).collect();
        assert!(first.iter().any(|v| v.length() > 0.0));

        field.explode(99);
        let second: Vec<Vec3> = field.particles().iter().map(|p| p.vel).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_explosion_moves_outward_and_fades() {
        let mut field = CubeField::new(100, 10.0, SpawnStyle::Faces, 5);
        field.explode(11);
        let alpha_before: f32 = field.particles().iter().map(|p| p.alpha).sum();
        let dist_before: f32 = field.particles().iter().map(|p| p.pos.length()).sum();

        field.update(50, None);

        let alpha_after: f32 = field.particles().iter().map(|p| p.alpha).sum();
        let dist_after: f32 = field.particles().iter().map(|p| p.pos.length()).sum();
        assert!(alpha_after < alpha_before);
        assert!(dist_after > dist_before);
    }

    #[test]
    fn test_nudge_ignored_while_exploding() {
        let mut field = CubeField::new(10, 10.0, SpawnStyle::Faces, 5);
        field.nudge(1.0, 0.0);
        let nudged = field.rotation().y;
        assert!(nudged > 0.0);

        field.explode(1);
        field.nudge(1.0, 0.0);
        assert_eq!(field.rotation().y, nudged);
    }

    #[test]
    fn test_render_stays_in_area() {
        let field = CubeField::new(800, 8.0, SpawnStyle::Faces, 5);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        field.render(area, &mut buf);

        let drawn = area
            .positions()
            .filter(|pos| buf[*pos].symbol() != " ")
            .count();
        assert!(drawn > 0);
    }
}
