//! Spotlight stream (stateful): glyphs falling from a fixed origin.

use myeongham_core::{Glyph, seed};
use ratatui::style::Color;

use crate::color::alpha_gray;

/// Drops per stream.
pub const STREAM_COUNT: usize = 30;

/// Fall speed bounds, cells per second.
const FALL_MIN: f32 = 4.0;
const FALL_MAX: f32 = 10.0;

/// Horizontal jitter bound, cells per second.
const JITTER: f32 = 0.8;

/// One falling glyph. Opacity is derived from distance fallen.
#[derive(Debug, Clone)]
struct Droplet {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    glyph: Glyph,
    salt: u64,
}

impl Droplet {
    fn spawn(origin_col: f32, salt: u64) -> Self {
        let m = seed::mix(salt, 0);
        Self {
            x: origin_col,
            y: 0.0,
            vx: seed::range(seed::mix(m, 1), -JITTER, JITTER),
            vy: seed::range(seed::mix(m, 2), FALL_MIN, FALL_MAX),
            glyph: Glyph::from_seed(seed::mix(m, 3)),
            salt,
        }
    }
}

/// An unbounded, restartable stream of drops from one origin.
#[derive(Debug)]
pub struct Stream {
    origin_col: f32,
    /// Fall distance over which a drop fades to nothing.
    max_travel: f32,
    /// Horizontal extent a drop may occupy.
    bounds: (f32, f32),
    drops: Vec<Droplet>,
}

impl Stream {
    /// A stream of [`STREAM_COUNT`] drops, staggered along their fall
    /// so the stream starts fully developed.
    pub fn new(origin_col: f32, max_travel: f32, bounds: (f32, f32), stream_seed: u64) -> Self {
        let drops = (0..STREAM_COUNT)
            .map(|i| {
                let mut d = Droplet::spawn(origin_col, seed::mix(stream_seed, i as u64));
                let progress = seed::unit(seed::mix(stream_seed, 1000 + i as u64));
                d.y = progress * max_travel;
                d.x = origin_col + d.vx * (d.y / d.vy);
                d
            })
            .collect();

        Self {
            origin_col,
            max_travel,
            bounds,
            drops,
        }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    /// Advance the fall. A drop that exhausts its travel or leaves the
    /// horizontal bounds respawns at the origin with fresh jitter.
    pub fn update(&mut self, delta_ms: u64) {
        let dt = delta_ms as f32 / 1000.0;
        for d in &mut self.drops {
            d.x += d.vx * dt;
            d.y += d.vy * dt;
            if d.y > self.max_travel || d.x < self.bounds.0 || d.x > self.bounds.1 {
                *d = Droplet::spawn(self.origin_col, seed::mix(d.salt, 1));
            }
        }
    }

    /// Drawable cells for the current positions. Opacity fades
    /// linearly to zero across the travel distance.
    pub fn cells(
        &self,
        width: u16,
        height: u16,
    ) -> impl Iterator<Item = (u16, u16, char, Color)> {
        let max_travel = self.max_travel;
        self.drops.iter().filter_map(move |d| {
            let (col, row) = (d.x.round(), d.y.round());
            if col < 0.0 || row < 0.0 || col >= width as f32 || row >= height as f32 {
                return None;
            }
            let alpha = (1.0 - d.y / max_travel).clamp(0.0, 1.0);
            Some((col as u16, row as u16, d.glyph.as_char(), alpha_gray(alpha)))
        })
    }
}
