//! Background effect selection.

use serde::{Deserialize, Serialize};

/// Background effect rendered behind the revealed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectStyle {
    /// Glyphs drifting in the side margins.
    #[default]
    Ambient,
    /// Glyph streams falling from the top of each margin.
    Spotlight,
    /// No background effect.
    Off,
}

impl EffectStyle {
    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            EffectStyle::Ambient => EffectStyle::Spotlight,
            EffectStyle::Spotlight => EffectStyle::Off,
            EffectStyle::Off => EffectStyle::Ambient,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            EffectStyle::Ambient => "ambient",
            EffectStyle::Spotlight => "spotlight",
            EffectStyle::Off => "off",
        }
    }
}
