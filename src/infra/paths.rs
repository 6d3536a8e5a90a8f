// src/infra/paths.rs — Config and data locations
//
// All paths respect the MOSDAC_HOME environment variable for isolation.
// When MOSDAC_HOME is set, config and datasets live under that directory.
// When unset, config uses ~/.mosdac/ and data uses XDG_DATA_HOME/mosdac.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<Option<ProjectDirs>> = OnceLock::new();

fn project_dirs() -> Option<&'static ProjectDirs> {
    PROJECT_DIRS
        .get_or_init(|| ProjectDirs::from("", "", "mosdac"))
        .as_ref()
}

/// Returns the MOSDAC_HOME override, if set.
fn mosdac_home() -> Option<PathBuf> {
    std::env::var_os("MOSDAC_HOME").map(PathBuf::from)
}

/// Configuration directory: $MOSDAC_HOME/ or ~/.mosdac/
pub fn config_dir() -> PathBuf {
    if let Some(home) = mosdac_home() {
        return home;
    }
    dirs_home().join(".mosdac")
}

/// Data directory: $MOSDAC_HOME/data/ or ~/.local/share/mosdac/
pub fn data_dir() -> PathBuf {
    if let Some(home) = mosdac_home() {
        return home.join("data");
    }
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Home directory. Falls back to the working directory when no home is known.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default location of a user-supplied dataset
pub fn dataset_file_path() -> PathBuf {
    data_dir().join("dataset.toml")
}
