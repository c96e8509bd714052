use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::COLLECT_RADIUS_M;

pub struct Config {
    pub radius_m: u32,
    pub db_path: Option<PathBuf>,
    pub json_output: bool,
    pub verbose: bool,
}

impl Config {
    /// Layer the per-command flags over the optional config file.
    /// CLI values win; anything unset falls back to file values, then
    /// built-in defaults.
    pub fn load(json_output: bool, verbose: bool, radius_m: Option<u32>) -> Self {
        let file = FileConfig::read();

        Config {
            radius_m: radius_m.or(file.radius_m).unwrap_or(COLLECT_RADIUS_M),
            db_path: file.data_dir.map(|dir| dir.join("dtrip.db")),
            json_output,
            verbose,
        }
    }
}

/// Overrides read from ~/.config/dtrip/config.toml (or platform equivalent).
#[derive(Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    radius_m: Option<u32>,
    data_dir: Option<PathBuf>,
}

impl FileConfig {
    // a missing file is the normal case; a malformed one degrades to
    // defaults with a diagnostic instead of failing the command
    fn read() -> FileConfig {
        let Some(dirs) = directories::ProjectDirs::from("", "", "dtrip") else {
            return FileConfig::default();
        };

        let path = dirs.config_dir().join("config.toml");
        let Ok(content) = std::fs::read_to_string(&path) else {
            return FileConfig::default();
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: ignoring malformed config {}: {e}", path.display());
                FileConfig::default()
            }
        }
    }
}
