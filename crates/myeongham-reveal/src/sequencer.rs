//! Drives the ordered, one-block-at-a-time reveal on a caller-supplied
//! millisecond clock.

use myeongham_core::Language;

use crate::block::{Block, BlockKind};

/// Pause before the first block starts typing.
pub const START_DELAY_MS: u64 = 200;

/// Interval between character batches.
pub const TYPE_INTERVAL_MS: u64 = 2;

/// Characters revealed per batch.
pub const CHARS_PER_BATCH: usize = 3;

/// Pause between a block's restoration and the next block.
pub const BLOCK_GAP_MS: u64 = 30;

/// Reveal progress of one block, as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockView {
    /// Not yet reached; nothing is rendered.
    Hidden,
    /// Mid-reveal: this many characters of the plain projection, with a
    /// trailing cursor.
    Typing(usize),
    /// Restored: the original segments render verbatim.
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    StartDelay,
    Typing,
    Gap,
    Done,
}

/// The typing sequencer. Strictly sequential: a block's successor never
/// starts before its restoration completes.
#[derive(Debug)]
pub struct Sequencer {
    blocks: Vec<Block>,
    current: usize,
    cursor: usize,
    wait_ms: u64,
    step: Step,
}

impl Sequencer {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            current: 0,
            cursor: 0,
            wait_ms: START_DELAY_MS,
            step: Step::StartDelay,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_finished(&self) -> bool {
        self.step == Step::Done
    }

    /// Complete every block instantly, with no animation.
    pub fn reveal_all(&mut self) {
        self.current = self.blocks.len();
        self.cursor = 0;
        self.wait_ms = 0;
        self.step = Step::Done;
    }

    /// Advance by elapsed milliseconds. A large delta is consumed in
    /// batch-interval steps, so pacing is independent of the caller's
    /// frame rate.
    pub fn tick(&mut self, mut delta_ms: u64, lang: Language) {
        while self.step != Step::Done {
            if delta_ms < self.wait_ms {
                self.wait_ms -= delta_ms;
                return;
            }
            delta_ms -= self.wait_ms;
            self.wait_ms = 0;
            self.advance(lang);
        }
    }

    /// Reveal progress of the block at `index`.
    pub fn view(&self, index: usize) -> BlockView {
        let Some(block) = self.blocks.get(index) else {
            return BlockView::Hidden;
        };
        if block.kind == BlockKind::Static {
            return BlockView::Full;
        }
        if index < self.current {
            return BlockView::Full;
        }
        if index == self.current {
            return match self.step {
                Step::Typing => BlockView::Typing(self.cursor),
                Step::Gap => BlockView::Full,
                Step::StartDelay | Step::Done => BlockView::Hidden,
            };
        }
        BlockView::Hidden
    }

    fn advance(&mut self, lang: Language) {
        match self.step {
            Step::StartDelay => self.enter_block(),
            Step::Typing => {
                let len = self.blocks[self.current].char_len(lang);
                self.cursor = (self.cursor + CHARS_PER_BATCH).min(len);
                if self.cursor >= len {
                    self.step = Step::Gap;
                    self.wait_ms = BLOCK_GAP_MS;
                } else {
                    self.wait_ms = TYPE_INTERVAL_MS;
                }
            }
            Step::Gap => {
                self.current += 1;
                self.enter_block();
            }
            Step::Done => {}
        }
    }

    /// Move to the next sequenced block, skipping statics.
    fn enter_block(&mut self) {
        while self
            .blocks
            .get(self.current)
            .is_some_and(|b| b.kind == BlockKind::Static)
        {
            self.current += 1;
        }
        let Some(block) = self.blocks.get(self.current) else {
            self.step = Step::Done;
            self.wait_ms = 0;
            return;
        };
        match block.kind {
            BlockKind::Typed => {
                self.step = Step::Typing;
                self.cursor = 0;
                self.wait_ms = 0;
            }
            BlockKind::Atomic => {
                self.step = Step::Gap;
                self.wait_ms = BLOCK_GAP_MS;
            }
            BlockKind::Static => unreachable!("statics are skipped above"),
        }
    }
}
