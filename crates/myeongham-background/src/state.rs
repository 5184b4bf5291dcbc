//! Background field state and rendering.

use myeongham_core::EffectStyle;
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::animations::{
    ambient::{self, AmbientParticle, ContentBand},
    spotlight::Stream,
};

/// Margins narrower than this get no spotlight of their own; a single
/// full-width stream is used instead.
const MIN_STREAM_MARGIN: f32 = 3.0;

/// Stateful container for whichever background effect is active.
///
/// Fields are created lazily from the frame dimensions and regenerated
/// whenever those dimensions (or the content band) change.
#[derive(Debug)]
pub struct BackgroundState {
    ambient: Vec<AmbientParticle>,
    streams: Vec<Stream>,
    band: ContentBand,
    last_width: u16,
    last_height: u16,
    last_update_ms: u64,
    init_seed: u64,
}

impl BackgroundState {
    pub fn new(init_seed: u64) -> Self {
        Self {
            ambient: Vec::new(),
            streams: Vec::new(),
            band: ContentBand { left: 0.0, right: 0.0 },
            last_width: 0,
            last_height: 0,
            last_update_ms: 0,
            init_seed,
        }
    }

    /// Render the active effect behind the content column. Handles
    /// first-frame initialization and resize regeneration internally.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        style: EffectStyle,
        content_cols: u16,
        elapsed_ms: u64,
    ) {
        if style == EffectStyle::Off {
            return;
        }

        let area = frame.area();
        let (width, height) = (area.width, area.height);
        if width == 0 || height == 0 {
            return;
        }

        let band = ContentBand::centered(width, content_cols);
        let dimensions_changed =
            width != self.last_width || height != self.last_height || band != self.band;

        if style == EffectStyle::Ambient && (dimensions_changed || self.ambient.is_empty()) {
            self.ambient = ambient::init(width, height, band, self.init_seed);
        }
        if style == EffectStyle::Spotlight && (dimensions_changed || self.streams.is_empty()) {
            self.streams = init_streams(width, height, band, self.init_seed);
        }

        if dimensions_changed {
            self.last_width = width;
            self.last_height = height;
            self.band = band;
            self.last_update_ms = elapsed_ms;
        }

        let delta_ms = elapsed_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = elapsed_ms;

        match style {
            EffectStyle::Ambient => {
                ambient::update(&mut self.ambient, delta_ms, width, height, band);
            }
            EffectStyle::Spotlight => {
                for stream in &mut self.streams {
                    stream.update(delta_ms);
                }
            }
            EffectStyle::Off => {}
        }

        let mut grid: Vec<Option<(char, Color)>> =
            vec![None; width as usize * height as usize];
        let put = |grid: &mut Vec<Option<(char, Color)>>, col: u16, row: u16, ch, color| {
            grid[row as usize * width as usize + col as usize] = Some((ch, color));
        };
        match style {
            EffectStyle::Ambient => {
                for (col, row, ch, color) in ambient::cells(&self.ambient, width, height) {
                    put(&mut grid, col, row, ch, color);
                }
            }
            EffectStyle::Spotlight => {
                for stream in &self.streams {
                    for (col, row, ch, color) in stream.cells(width, height) {
                        put(&mut grid, col, row, ch, color);
                    }
                }
            }
            EffectStyle::Off => {}
        }

        let lines: Vec<Line> = (0..height)
            .map(|row| {
                let spans: Vec<Span> = (0..width)
                    .map(|col| {
                        match grid[row as usize * width as usize + col as usize] {
                            Some((ch, color)) => {
                                Span::styled(ch.to_string(), Style::new().fg(color))
                            }
                            None => Span::raw(" "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// One stream per side margin, or a single centered stream when the
/// margins are too narrow to hold one.
fn init_streams(width: u16, height: u16, band: ContentBand, init_seed: u64) -> Vec<Stream> {
    let max_travel = height as f32;
    let (left_w, right_w) = band.margins(width);

    let mut streams = Vec::new();
    if left_w >= MIN_STREAM_MARGIN {
        streams.push(Stream::new(
            left_w / 2.0,
            max_travel,
            (0.0, band.left),
            init_seed,
        ));
    }
    if right_w >= MIN_STREAM_MARGIN {
        streams.push(Stream::new(
            band.right + right_w / 2.0,
            max_travel,
            (band.right, width as f32),
            init_seed.wrapping_add(1),
        ));
    }
    if streams.is_empty() {
        streams.push(Stream::new(
            width as f32 / 2.0,
            max_travel,
            (0.0, width as f32),
            init_seed,
        ));
    }
    streams
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_ambient_renders_only_in_margins() {
        let mut state = BackgroundState::new(42);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| state.render(frame, EffectStyle::Ambient, 60, 0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut drawn = 0;
        for row in 0..30u16 {
            for col in 0..100u16 {
                let symbol = buffer[(col, row)].symbol();
                if symbol != " " {
                    drawn += 1;
                    assert!(
                        !(21..=79).contains(&col),
                        "glyph inside content band at {col}"
                    );
                }
            }
        }
        assert!(drawn > 0);
    }

    #[test]
    fn test_off_style_renders_nothing() {
        let mut state = BackgroundState::new(42);
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| state.render(frame, EffectStyle::Off, 20, 0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        for row in 0..10u16 {
            for col in 0..40u16 {
                assert_eq!(buffer[(col, row)].symbol(), " ");
            }
        }
    }

    #[test]
    fn test_resize_regenerates_field() {
        let mut state = BackgroundState::new(42);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|frame| state.render(frame, EffectStyle::Ambient, 60, 0))
            .unwrap();
        let before = state.ambient.clone();
        assert_eq!(before.len(), ambient::AMBIENT_COUNT);

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|frame| state.render(frame, EffectStyle::Ambient, 60, 16))
            .unwrap();
        assert_eq!(state.ambient.len(), ambient::AMBIENT_COUNT);
        assert_eq!(state.last_width, 120);
        assert_eq!(state.last_height, 40);
    }

    #[test]
    fn test_spotlight_uses_both_margins() {
        let streams = init_streams(100, 30, ContentBand::centered(100, 60), 7);
        assert_eq!(streams.len(), 2);

        let narrow = init_streams(60, 30, ContentBand::centered(60, 60), 7);
        assert_eq!(narrow.len(), 1);
    }
}
