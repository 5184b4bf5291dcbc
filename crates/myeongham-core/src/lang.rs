//! Display language selection for the dual-language content.

use serde::{Deserialize, Serialize};

/// Display language. Every content segment carries one string per
/// variant; the active language decides which is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Kr,
}

impl Language {
    /// Switch to the other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Kr,
            Language::Kr => Language::En,
        }
    }

    /// Short label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Kr => "KR",
        }
    }
}
