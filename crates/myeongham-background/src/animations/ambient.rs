//! Ambient drift field (stateful), confined to the side margins.

use myeongham_core::{Glyph, seed};
use ratatui::style::Color;

use crate::color::alpha_gray;

/// Number of drifting glyphs.
pub const AMBIENT_COUNT: usize = 40;

/// Drift speed bounds, cells per second.
const DRIFT_COLS: f32 = 1.1;
const DRIFT_ROWS: f32 = 0.9;

/// Distance from the band edge a strayed particle is snapped back to.
const BAND_SNAP: f32 = 1.0;

/// A drifting background glyph.
#[derive(Debug, Clone)]
pub struct AmbientParticle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub glyph: Glyph,
    pub alpha: f32,
}

/// The horizontal span of columns reserved for content. Particles stay
/// left of `left` or right of `right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBand {
    pub left: f32,
    pub right: f32,
}

impl ContentBand {
    /// Band for a centered content column of `content_cols` columns.
    pub fn centered(width: u16, content_cols: u16) -> Self {
        let width = width as f32;
        let content = (content_cols as f32).min(width);
        Self {
            left: (width - content) / 2.0,
            right: (width + content) / 2.0,
        }
    }

    /// Column widths of the left and right margins.
    pub fn margins(&self, width: u16) -> (f32, f32) {
        (self.left.max(0.0), (width as f32 - self.right).max(0.0))
    }

    fn contains(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }
}

/// Spawn the field into the side margins.
pub fn init(
    width: u16,
    height: u16,
    band: ContentBand,
    field_seed: u64,
) -> Vec<AmbientParticle> {
    let (left_w, right_w) = band.margins(width);

    (0..AMBIENT_COUNT)
        .map(|i| {
            let m = seed::mix(field_seed, i as u64);
            let pick_left = match (left_w > 0.0, right_w > 0.0) {
                (true, true) => m & 1 == 0,
                (only_left, _) => only_left,
            };
            let x = if pick_left {
                seed::unit(seed::mix(m, 1)) * left_w
            } else {
                band.right + seed::unit(seed::mix(m, 1)) * right_w
            };
            AmbientParticle {
                x,
                y: seed::unit(seed::mix(m, 2)) * height as f32,
                vx: seed::range(seed::mix(m, 3), -DRIFT_COLS, DRIFT_COLS),
                vy: seed::range(seed::mix(m, 4), -DRIFT_ROWS, DRIFT_ROWS),
                glyph: Glyph::from_seed(seed::mix(m, 5)),
                alpha: seed::range(seed::mix(m, 6), 0.15, 0.4),
            }
        })
        .collect()
}

/// Advance the drift. Vertical motion wraps toroidally; horizontal
/// motion keeps every particle in a side margin, relocating strays to
/// the nearest band edge.
pub fn update(
    particles: &mut [AmbientParticle],
    delta_ms: u64,
    width: u16,
    height: u16,
    band: ContentBand,
) {
    let dt = delta_ms as f32 / 1000.0;
    let (w, h) = (width as f32, height as f32);

    for p in particles {
        p.x += p.vx * dt;
        p.y += p.vy * dt;

        if p.y < 0.0 {
            p.y = h;
        } else if p.y > h {
            p.y = 0.0;
        }

        if p.x < 0.0 {
            p.x = (band.left - BAND_SNAP).max(0.0);
        } else if p.x > w {
            p.x = (band.right + BAND_SNAP).min(w - 1.0).max(0.0);
        } else if band.contains(p.x) {
            p.x = if p.x < w / 2.0 {
                (band.left - BAND_SNAP).max(0.0)
            } else {
                (band.right + BAND_SNAP).min(w - 1.0).max(0.0)
            };
        }
    }
}

/// Drawable cells for the current positions.
pub fn cells(
    particles: &[AmbientParticle],
    width: u16,
    height: u16,
) -> impl Iterator<Item = (u16, u16, char, Color)> {
    particles.iter().filter_map(move |p| {
        let (col, row) = (p.x.round(), p.y.round());
        if col < 0.0 || row < 0.0 || col >= width as f32 || row >= height as f32 {
            return None;
        }
        Some((
            col as u16,
            row as u16,
            p.glyph.as_char(),
            alpha_gray(p.alpha),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u16 = 100;
    const H: u16 = 30;

    fn band() -> ContentBand {
        ContentBand::centered(W, 60)
    }

    #[test]
    fn test_init_count_and_ranges() {
        let field = init(W, H, band(), 7);
        assert_eq!(field.len(), AMBIENT_COUNT);
        for p in &field {
            assert!((0.0..=1.0).contains(&p.alpha));
            assert!(matches!(p.glyph.as_char(), '0' | '1'));
            assert!(!band().contains(p.x));
        }
    }

    #[test]
    fn test_vertical_wrap() {
        let mut field = init(W, H, band(), 7);
        field[0].y = H as f32 - 0.01;
        field[0].vy = DRIFT_ROWS;
        field[0].vx = 0.0;
        update(&mut field, 1000, W, H, band());
        assert!((0.0..=H as f32).contains(&field[0].y));

        field[0].y = 0.01;
        field[0].vy = -DRIFT_ROWS;
        update(&mut field, 1000, W, H, band());
        assert!((0.0..=H as f32).contains(&field[0].y));
    }

    #[test]
    fn test_strays_return_to_margins() {
        let mut field = init(W, H, band(), 7);
        field[0].x = W as f32 / 2.0;
        field[1].x = -3.0;
        field[2].x = W as f32 + 3.0;
        for p in field.iter_mut() {
            p.vx = 0.0;
            p.vy = 0.0;
        }
        update(&mut field, 16, W, H, band());
        for p in &field {
            assert!(!band().contains(p.x), "stray at {}", p.x);
            assert!((0.0..W as f32).contains(&p.x));
        }
    }

    #[test]
    fn test_cells_stay_in_bounds() {
        let mut field = init(W, H, band(), 7);
        for _ in 0..200 {
            update(&mut field, 50, W, H, band());
        }
        for (col, row, ch, _) in cells(&field, W, H) {
            assert!(col < W && row < H);
            assert!(matches!(ch, '0' | '1'));
        }
    }

    #[test]
    fn test_band_narrower_than_terminal_has_margins() {
        let band = ContentBand::centered(100, 60);
        let (l, r) = band.margins(100);
        assert_eq!(l, 20.0);
        assert_eq!(r, 20.0);
    }
}
