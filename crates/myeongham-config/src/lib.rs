//! Persisted preferences and the per-session intro marker.
//!
//! Preferences survive across runs in the platform config directory.
//! The intro marker lives in the state directory and is scoped to the
//! current terminal session, so a new session shows the intro again.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use myeongham_core::{EffectStyle, Language};
use serde::{Deserialize, Serialize};

mod session;

pub use session::IntroMarker;

/// Preferences file name inside the config directory.
const PREFS_FILE: &str = "preferences.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "dohyun-kim", "myeongham")
}

/// User preferences persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Display language for the dual-language content.
    pub language: Language,
    /// Background effect behind the revealed content.
    pub effects: EffectStyle,
}

impl Preferences {
    /// Load from the config directory. Any failure (missing file,
    /// unreadable directory, malformed TOML) falls back to defaults.
    pub fn load() -> Self {
        let Some(dirs) = project_dirs() else {
            return Self::default();
        };
        let path = dirs.config_dir().join(PREFS_FILE);
        fs::read_to_string(path)
            .ok()
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist to the config directory. Callers may ignore the error;
    /// an unwritable disk only costs the saved preference.
    pub fn save(&self) -> io::Result<()> {
        let dirs = project_dirs()
            .ok_or_else(|| io::Error::other("no home directory"))?;
        fs::create_dir_all(dirs.config_dir())?;
        let text = toml::to_string(self).map_err(io::Error::other)?;
        fs::write(dirs.config_dir().join(PREFS_FILE), text)
    }
}

/// Directory for session-scoped state, preferring the platform state
/// dir and falling back to the cache dir.
fn state_dir() -> Option<PathBuf> {
    let dirs = project_dirs()?;
    Some(
        dirs.state_dir()
            .unwrap_or_else(|| dirs.cache_dir())
            .to_path_buf(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_default() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.effects, EffectStyle::Ambient);
    }

    #[test]
    fn test_preferences_toml_round_trip() {
        let prefs = Preferences {
            language: Language::Kr,
            effects: EffectStyle::Spotlight,
        };
        let text = toml::to_string(&prefs).unwrap();
        let back: Preferences = toml::from_str(&text).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_preferences_reads_known_keys() {
        let back: Preferences =
            toml::from_str("language = \"kr\"\neffects = \"off\"\n").unwrap();
        assert_eq!(back.language, Language::Kr);
        assert_eq!(back.effects, EffectStyle::Off);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let back: Preferences = toml::from_str("language = \"kr\"\n").unwrap();
        assert_eq!(back.language, Language::Kr);
        assert_eq!(back.effects, EffectStyle::Ambient);
    }
}
