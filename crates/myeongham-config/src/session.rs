//! Per-terminal-session marker for the one-time intro.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Marker file name inside the state directory.
const MARKER_FILE: &str = "intro-seen";

/// Identity of the current terminal session. A marker written by a
/// different session is stale, so the intro plays again.
fn session_id() -> String {
    std::env::var("TERM_SESSION_ID")
        .or_else(|_| std::env::var("WINDOWID"))
        .unwrap_or_else(|_| parent_process_id().to_string())
}

#[cfg(unix)]
fn parent_process_id() -> u32 {
    std::os::unix::process::parent_id()
}

#[cfg(not(unix))]
fn parent_process_id() -> u32 {
    std::process::id()
}

/// Records that the intro already played in the current session.
#[derive(Debug)]
pub struct IntroMarker {
    path: Option<PathBuf>,
    id: String,
}

impl Default for IntroMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroMarker {
    /// Marker rooted in the platform state directory. With no home
    /// directory the marker is inert: never seen, never written.
    pub fn new() -> Self {
        Self {
            path: super::state_dir().map(|dir| dir.join(MARKER_FILE)),
            id: session_id(),
        }
    }

    /// Marker at an explicit location with an explicit session id.
    pub fn at(path: PathBuf, id: impl Into<String>) -> Self {
        Self {
            path: Some(path),
            id: id.into(),
        }
    }

    /// Whether the intro already played in this session.
    pub fn seen(&self) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        fs::read_to_string(path)
            .map(|stored| stored.trim() == self.id)
            .unwrap_or(false)
    }

    /// Persist the marker for this session.
    pub fn mark(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("myeongham-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_unmarked_is_not_seen() {
        let marker = IntroMarker::at(scratch_path("unmarked"), "s1");
        assert!(!marker.seen());
    }

    #[test]
    fn test_mark_then_seen_same_session() {
        let path = scratch_path("same-session");
        let marker = IntroMarker::at(path.clone(), "s1");
        marker.mark().unwrap();
        assert!(marker.seen());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_other_session_marker_is_stale() {
        let path = scratch_path("stale");
        IntroMarker::at(path.clone(), "old-session").mark().unwrap();
        let marker = IntroMarker::at(path.clone(), "new-session");
        assert!(!marker.seen());
        fs::remove_file(path).unwrap();
    }
}
