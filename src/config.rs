use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

/// User-level defaults for knobs that rarely change between runs; every
/// value can still be overridden on the command line.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default = "default_max_branch_mutations")]
    pub max_branch_mutations: usize,
}

fn default_threads() -> usize {
    4
}

fn default_max_branch_mutations() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            max_branch_mutations: default_max_branch_mutations(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("org", "spectrumsplits", "spectrum-splits") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                if let Ok(content) = fs::read_to_string(config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Config::default()
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(proj_dirs) = ProjectDirs::from("org", "spectrumsplits", "spectrum-splits") {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let content = toml::to_string_pretty(self)?;
            fs::write(config_dir.join("config.toml"), content)?;
        }
        Ok(())
    }
}
