//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["agenda.toml", ".agenda.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./agenda.toml` or `./.agenda.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/agenda/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut files = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            files.push(global_path);
        }

        if let Some(project_path) = Self::project_config_path() {
            files.push(project_path);
        }

        if let Some(path) = config_path {
            files.push(path.clone());
        }

        Self::load_files(&files)
    }

    /// Merge the given files over the defaults, later files winning
    pub fn load_files(files: &[impl AsRef<Path>]) -> Result<FileConfig, Box<figment::Error>> {
        let figment = files.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path.as_ref())),
        );

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/agenda/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("agenda").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./agenda.toml or ./.agenda.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FEED_URL;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.source.url, DEFAULT_FEED_URL);
        assert!(config.behavior.refresh_on_start);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("agenda"));
    }

    #[test]
    fn test_load_files_merges_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(
            &global,
            "[source]\nurl = \"https://global.example/sessions.json\"\n\n[output]\ncolor = false\n",
        )
        .unwrap();
        fs::write(
            &explicit,
            "[source]\nurl = \"https://explicit.example/sessions.json\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load_files(&[&global, &explicit]).unwrap();

        assert_eq!(config.source.url, "https://explicit.example/sessions.json");
        assert!(!config.output.color);
        assert!(config.repl.confirm_exit);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let config = ConfigLoader::load_files(&[missing]).unwrap();

        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[behavior]\nfetch_timeout_seconds = \"soon\"\n").unwrap();

        assert!(ConfigLoader::load_files(&[path]).is_err());
    }
}
