//! The intro overlay: a rotating cube of binary glyphs that explodes
//! into the page content.
//!
//! [`CubeField`] owns the particles and their motion; [`Lifecycle`]
//! gates the overlay through idle, exploding and revealed on a
//! caller-supplied millisecond clock.

mod cube;
mod lifecycle;

pub use cube::{CubeField, SpawnStyle};
pub use lifecycle::{
    CONTENT_REVEAL_DELAY_MS, Lifecycle, OVERLAY_TEARDOWN_DELAY_MS, Phase,
};
