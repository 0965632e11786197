//! Storage location management.
//!
//! This module resolves where the persisted location and trash blobs live on
//! disk. The default follows the XDG data-directory convention with a home
//! fallback; embedders can override the directory entirely via `Config`.

use std::path::PathBuf;

/// Returns the default data directory for SkyGraph storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/skygraph` if `XDG_DATA_HOME` is set
/// 2. `$HOME/.local/share/skygraph` if `HOME` is set
/// 3. `.skygraph` relative to the working directory as a last resort
///
/// The JSON slot files `locations.json` and `trash.json` are located within
/// this directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("skygraph");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".local/share").join("skygraph");
    }
    PathBuf::from(".skygraph")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_crate_name() {
        assert!(get_data_dir().ends_with("skygraph") || get_data_dir().ends_with(".skygraph"));
    }
}
