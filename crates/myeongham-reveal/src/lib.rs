//! Typing-style reveal of the resume content.
//!
//! The text model is kept apart from presentation: [`Block`]s hold
//! dual-language styled segments, the [`Sequencer`] advances a cursor
//! over each block's plain-text projection on a caller-supplied clock,
//! and [`render`] turns a block plus its reveal progress into a
//! terminal line.

mod block;
pub mod render;
mod sequencer;

pub use block::{Block, BlockKind, Segment, SegmentStyle};
pub use sequencer::{
    BLOCK_GAP_MS, BlockView, CHARS_PER_BATCH, START_DELAY_MS, Sequencer, TYPE_INTERVAL_MS,
};
