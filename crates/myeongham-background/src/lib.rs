//! Background particle effects for the resume card.
//!
//! Two indefinitely-running glyph fields: an ambient drift confined to
//! the margins beside the content column, and a spotlight stream
//! falling from the top of each margin. [`BackgroundState`] owns
//! whichever is active and regenerates it when the terminal resizes.

mod animations;
mod color;
mod state;

pub use animations::ambient::ContentBand;
pub use color::alpha_gray;
pub use state::BackgroundState;
