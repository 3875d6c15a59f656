//! Platform-specific directory utilities

use std::path::PathBuf;

/// Bundled content in the source checkout this binary was built from.
const SOURCE_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data");

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/console-rpg/logs`
/// - Linux: `~/.cache/console-rpg/logs` (or `$XDG_CACHE_HOME/console-rpg/logs`)
/// - Windows: `%LOCALAPPDATA%\console-rpg\logs`
/// - Fallback: `/tmp/console-rpg/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "console-rpg")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("console-rpg"));

    base_dir.join("logs")
}

/// Content directory used when `RPG_DATA_DIR` is not set.
///
/// Checked in order, first existing wins:
/// - the source tree's `game/content/data` (path fixed at build time)
/// - a `data` directory next to the executable
/// - the platform data directory, e.g. `~/.local/share/console-rpg/data`
///
/// When none exist the source tree path is returned so the load error
/// names it.
pub fn data_dir() -> PathBuf {
    let source_tree = PathBuf::from(SOURCE_DATA_DIR);
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")));
    let platform = directories::ProjectDirs::from("", "", "console-rpg")
        .map(|dirs| dirs.data_dir().join("data"));

    first_existing([Some(source_tree.clone()), beside_exe, platform].into_iter().flatten())
        .unwrap_or(source_tree)
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|dir| dir.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_candidates() {
        let missing = std::env::temp_dir().join("console-rpg-no-such-dir");
        let present = std::env::temp_dir();
        assert_eq!(
            first_existing([missing.clone(), present.clone()]),
            Some(present)
        );
        assert_eq!(first_existing([missing]), None);
    }

    #[test]
    fn bundled_content_is_found_from_the_checkout() {
        assert!(data_dir().join("items.ron").is_file());
    }
}
