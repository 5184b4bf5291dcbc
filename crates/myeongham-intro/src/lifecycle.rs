//! The intro state machine: idle cube, explosion, revealed content.

/// Explosion trigger to content layer becoming visible.
pub const CONTENT_REVEAL_DELAY_MS: u64 = 600;

/// Content layer visible to overlay removal.
pub const OVERLAY_TEARDOWN_DELAY_MS: u64 = 800;

/// Phase of the intro overlay. Transitions are monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cube rotating, waiting for input.
    Idle,
    /// Explosion running, content fading in underneath.
    Exploding,
    /// Terminal state: overlay gone, content and background active.
    Revealed,
}

/// Tracks the intro progression on a caller-supplied millisecond clock.
///
/// The caller owns the clock so the timing contract can be exercised
/// without wall-clock delays.
#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
    triggered_at: Option<u64>,
    content_shown: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    /// Start in [`Phase::Idle`] with the overlay up.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            triggered_at: None,
            content_shown: false,
        }
    }

    /// Start directly in [`Phase::Revealed`]: overlay never shown,
    /// content visible immediately. Used when the intro already played
    /// this session.
    pub fn skipped() -> Self {
        Self {
            phase: Phase::Revealed,
            triggered_at: None,
            content_shown: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latch the explosion. Returns true only for the first trigger
    /// while idle; later calls are no-ops.
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Exploding;
        self.triggered_at = Some(now_ms);
        true
    }

    /// Advance the post-explosion timers.
    pub fn tick(&mut self, now_ms: u64) {
        let Some(t0) = self.triggered_at else {
            return;
        };
        if now_ms >= t0 + CONTENT_REVEAL_DELAY_MS {
            self.content_shown = true;
        }
        if now_ms >= t0 + CONTENT_REVEAL_DELAY_MS + OVERLAY_TEARDOWN_DELAY_MS {
            self.phase = Phase::Revealed;
        }
    }

    /// Content layer (and with it the background field) is active.
    pub fn content_visible(&self) -> bool {
        self.content_shown
    }

    /// Overlay still occupies the screen.
    pub fn overlay_active(&self) -> bool {
        self.phase != Phase::Revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == Phase::Revealed
    }
}
