//! Core types for the myeongham terminal resume card.
//!
//! This crate holds the pieces every other crate agrees on: the 3D
//! math used to spin and project the intro cube, the glyph particle
//! model, deterministic seed mixing, and the small enums that are
//! persisted as user preferences.

pub mod geometry;
pub mod particle;
pub mod seed;

mod effects;
mod lang;

pub use effects::EffectStyle;
pub use geometry::{CELL_ASPECT, Projected, Rotation, Vec3, Viewport};
pub use lang::Language;
pub use particle::{Glyph, Particle};
