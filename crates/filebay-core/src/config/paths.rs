//! Standard locations for filebay configuration

use std::path::PathBuf;

/// Directory holding filebay's configuration
///
/// Returns: `<config dir>/filebay` (e.g. `~/.config/filebay` on Linux),
/// falling back to `./filebay` when the platform has no config directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("filebay")
}

/// Get the default config file path for a given file name
///
/// Returns: `<config dir>/filebay/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    config_dir().join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_filebay() {
        assert!(config_dir().ends_with("filebay"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path("config.yaml");
        assert!(path.ends_with("filebay/config.yaml"));
    }
}
