use std::io::stdout;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use myeongham_background::BackgroundState;
use myeongham_config::{IntroMarker, Preferences};
use myeongham_core::{CELL_ASPECT, EffectStyle, Language, seed};
use myeongham_intro::{CubeField, Lifecycle, Phase, SpawnStyle};
use myeongham_reveal::{Sequencer, render::block_line};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
};

mod content;

use content::{CONTENT_COLS, CONTENT_PADDING, resume_blocks};

/// Particles in the intro cube.
const CUBE_PARTICLES: usize = 1200;

/// Cube half-size as a fraction of the smaller viewport dimension, in
/// rows after aspect correction.
const CUBE_SCALE: f32 = 0.28;

/// Event poll timeout; doubles as the frame pacer.
const POLL_MS: u64 = 16;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    // Pointer-driven rotation needs mouse reports; losing them only
    // costs the effect, so the result is not propagated.
    let _ = execute!(stdout(), EnableMouseCapture);
    let result = App::new().run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current display language.
    language: Language,
    /// Current background effect.
    effects: EffectStyle,
    /// Intro progression.
    lifecycle: Lifecycle,
    /// Session marker; present so a reload skips the intro.
    marker: IntroMarker,
    /// The intro cube, created on the first overlay frame and dropped
    /// at teardown.
    cube: Option<CubeField>,
    /// Background field behind the revealed content.
    background: BackgroundState,
    /// Typing reveal of the content blocks.
    sequencer: Sequencer,
    /// Start of the monotonic animation clock.
    started: Instant,
    /// Clock value at the last update.
    last_tick_ms: u64,
    /// Pointer offset from the viewport center, each axis in [-1, 1].
    pointer: Option<(f32, f32)>,
    /// Viewport of the last rendered frame.
    last_area: Rect,
}

impl App {
    /// Construct a new instance of [`App`] from the persisted
    /// preferences and session state.
    pub fn new() -> Self {
        let prefs = Preferences::load();
        let marker = IntroMarker::new();
        let mut sequencer = Sequencer::new(resume_blocks());

        let lifecycle = if marker.seen() {
            sequencer.reveal_all();
            Lifecycle::skipped()
        } else {
            Lifecycle::new()
        };

        Self {
            running: false,
            language: prefs.language,
            effects: prefs.effects,
            lifecycle,
            marker,
            cube: None,
            background: BackgroundState::new(seed::time_seed()),
            sequencer,
            started: Instant::now(),
            last_tick_ms: 0,
            pointer: None,
            last_area: Rect::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.advance();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Advance all animation state from the monotonic clock.
    fn advance(&mut self) {
        let now_ms = self.now_ms();
        let delta_ms = now_ms.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now_ms;

        self.lifecycle.tick(now_ms);
        if self.lifecycle.is_revealed() {
            // Teardown: the cube render path stops for good.
            self.cube = None;
        }
        if let Some(cube) = &mut self.cube {
            cube.update(delta_ms, self.pointer);
        }
        if self.lifecycle.content_visible() {
            self.sequencer.tick(delta_ms, self.language);
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.lifecycle.content_visible() {
            self.background.render(
                frame,
                self.effects,
                CONTENT_COLS + 2 * CONTENT_PADDING,
                self.last_tick_ms,
            );

            let rows = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);
            let columns = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(CONTENT_COLS.min(area.width)),
                Constraint::Fill(1),
            ])
            .split(rows[1]);

            self.render_content(frame, columns[1]);
            self.render_status(frame, rows[2]);
        }

        if self.lifecycle.overlay_active() {
            self.render_overlay(frame);
        }
    }

    /// The intro overlay: the cube painted over whatever is underneath,
    /// plus a hint line while idle.
    fn render_overlay(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if self.cube.is_none() {
            let half = CUBE_SCALE * (area.height as f32).min(area.width as f32 / CELL_ASPECT);
            let mut cube =
                CubeField::new(CUBE_PARTICLES, half, SpawnStyle::Faces, seed::time_seed());
            // Created after the trigger (first frames on a zero-sized
            // terminal): catch up with the burst.
            if self.lifecycle.phase() == Phase::Exploding {
                cube.explode(seed::time_seed());
            }
            self.cube = Some(cube);
        }
        if let Some(cube) = &self.cube {
            cube.render(area, frame.buffer_mut());
        }

        if self.lifecycle.phase() == Phase::Idle && area.height >= 3 {
            let hint = Line::from("press any key".dark_gray()).centered();
            let row = Rect::new(area.x, area.y + area.height - 2, area.width, 1);
            frame.render_widget(Paragraph::new(vec![hint]), row);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .sequencer
            .blocks()
            .iter()
            .enumerate()
            .map(|(i, block)| block_line(block, self.sequencer.view(i), self.language))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let clock = Local::now().format("%H:%M  %b %d %Y").to_string();
        let status = Line::from(vec![
            "l".bold().cyan(),
            format!(" {}  ", self.language.label()).dark_gray(),
            "e".bold().cyan(),
            format!(" {}  ", self.effects.label()).dark_gray(),
            "q".bold().cyan(),
            " quit  ".dark_gray(),
            clock.dark_gray(),
        ])
        .centered();
        frame.render_widget(Paragraph::new(vec![status]), area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout keeps frames coming while idle.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    ///
    /// Arrow keys steer the idle cube and the control keys keep their
    /// meaning; any other key fires the intro.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('l')) => self.toggle_language(),
            (_, KeyCode::Char('e')) => self.cycle_effects(),
            (_, KeyCode::Left) => self.nudge(-1.0, 0.0),
            (_, KeyCode::Right) => self.nudge(1.0, 0.0),
            (_, KeyCode::Up) => self.nudge(0.0, -1.0),
            (_, KeyCode::Down) => self.nudge(0.0, 1.0),
            _ => self.trigger_intro(),
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved => {
                let (w, h) = (self.last_area.width, self.last_area.height);
                if w > 0 && h > 0 {
                    let cx = w as f32 / 2.0;
                    let cy = h as f32 / 2.0;
                    self.pointer = Some((
                        (mouse.column as f32 - cx) / cx,
                        (mouse.row as f32 - cy) / cy,
                    ));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => self.trigger_intro(),
            _ => {}
        }
    }

    /// Fire the explosion, once. Persists the session marker so a
    /// reload within this terminal session skips straight to content.
    fn trigger_intro(&mut self) {
        if !self.lifecycle.trigger(self.now_ms()) {
            return;
        }
        let _ = self.marker.mark();
        if let Some(cube) = &mut self.cube {
            cube.explode(seed::time_seed());
        }
    }

    /// Switch every dual-language element to the other language.
    fn toggle_language(&mut self) {
        self.language = self.language.toggle();
        self.save_preferences();
    }

    /// Cycle the background effect.
    fn cycle_effects(&mut self) {
        self.effects = self.effects.next();
        self.save_preferences();
    }

    /// Arrow-key rotation while the cube is idle.
    fn nudge(&mut self, cols: f32, rows: f32) {
        if self.lifecycle.phase() != Phase::Idle {
            return;
        }
        if let Some(cube) = &mut self.cube {
            cube.nudge(cols, rows);
        }
    }

    fn save_preferences(&self) {
        let _ = Preferences {
            language: self.language,
            effects: self.effects,
        }
        .save();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
