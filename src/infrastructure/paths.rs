//! Path helpers for data files and user-supplied paths.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "artauction-admin";

/// Returns the data directory for logs and default files.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/artauction-admin`
/// 2. `$HOME/.local/share/artauction-admin`
/// 3. `./.artauction-admin` when neither variable is set
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(
        std::env::var_os("XDG_DATA_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn data_dir_from(xdg_data_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(xdg), _) if !xdg.as_os_str().is_empty() => xdg.join(APP_DIR),
        (_, Some(home)) if !home.as_os_str().is_empty() => {
            home.join(".local").join("share").join(APP_DIR)
        }
        _ => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to `$HOME`.
///
/// Paths without a leading tilde, and every path when `HOME` is unset, are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    std::env::var("HOME").map_or_else(|_| path.to_string(), |home| expand_tilde_with(path, &home))
}

fn expand_tilde_with(path: &str, home: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else if path == "~" {
        home.to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_takes_precedence() {
        let dir = data_dir_from(Some("/xdg".into()), Some("/home/ana".into()));
        assert_eq!(dir, PathBuf::from("/xdg/artauction-admin"));
    }

    #[test]
    fn falls_back_to_home_then_cwd() {
        assert_eq!(
            data_dir_from(None, Some("/home/ana".into())),
            PathBuf::from("/home/ana/.local/share/artauction-admin")
        );
        assert_eq!(
            data_dir_from(Some("".into()), None),
            PathBuf::from(".artauction-admin")
        );
    }

    #[test]
    fn expands_only_leading_tilde() {
        assert_eq!(expand_tilde_with("~/seed.json", "/home/ana/"), "/home/ana/seed.json");
        assert_eq!(expand_tilde_with("~", "/home/ana"), "/home/ana");
        assert_eq!(expand_tilde_with("/etc/~x", "/home/ana"), "/etc/~x");
    }
}
