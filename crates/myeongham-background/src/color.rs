//! Shading helpers for glyph particles.

use ratatui::style::Color;

/// Map an opacity in [0, 1] onto a white-on-black terminal gray.
pub fn alpha_gray(alpha: f32) -> Color {
    let v = (alpha.clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb(v, v, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_gray_clamps() {
        assert_eq!(alpha_gray(-1.0), Color::Rgb(0, 0, 0));
        assert_eq!(alpha_gray(2.0), Color::Rgb(255, 255, 255));
    }
}
