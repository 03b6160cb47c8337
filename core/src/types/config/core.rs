use std::path::PathBuf;

/// Core configuration for MarkSiftCore initialization.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("marksift.redb")
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_path.join("config.toml")
    }
}
