//! User supplied paths (`--sqlite`, `--file`).

use std::path::PathBuf;

/// Expand a leading `~` to the home directory. Used as a clap value parser.
pub fn user_path(raw: &str) -> Result<PathBuf, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("path must not be empty".to_string());
    }

    let home = dirs::home_dir();
    match (raw.strip_prefix('~'), home) {
        (Some(""), Some(home)) => Ok(home),
        (Some(rest), Some(home)) if rest.starts_with('/') || rest.starts_with('\\') => {
            Ok(home.join(&rest[1..]))
        }
        _ => Ok(PathBuf::from(raw)),
    }
}
