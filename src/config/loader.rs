//! Configuration File Loading
//!
//! Handles loading and saving configuration files from various locations
//! in TOML or JSON, falling back to defaults when nothing is found.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, without extension
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }

    /// Format implied by a file extension, TOML when unknown
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<Config> {
        Self::load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<Config> {
        let mut loader = Self::new();
        loader.load_using(&options)
    }

    /// Load one explicit file; its extension picks the format
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let loader = Self::new();
        if !path.exists() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file does not exist".to_string(),
            });
        }
        let config = loader.load_config_file(path, ConfigFormat::from_path(path))?;
        loader.validate_config(&config)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn load_using(&mut self, options: &LoadOptions) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config()? {
            info!("Loaded configuration from {}", path.display());
            self.current_path = Some(path);

            if options.validate {
                self.validate_config(&config)?;
            }

            return Ok(config);
        }

        if options.create_default {
            debug!("No configuration file found, using defaults");
            let config = Config::default();
            if options.validate {
                self.validate_config(&config)?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Save configuration to the current path or default location
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(Self::get_default_config_path);

        self.save_to_path(config, &path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::ConfigLoadFailed {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let format = ConfigFormat::from_path(path);
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                }
            })?,
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        fs::write(path, content)?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());

                if config_path.exists() {
                    match self.load_config_file(&config_path, *format) {
                        Ok(config) => return Ok(Some((config_path, config))),
                        Err(e) => {
                            warn!(
                                "Failed to load config from {}: {}",
                                config_path.display(),
                                e
                            );
                            continue;
                        }
                    }
                }
            }
        }

        Ok(None)
    }

    /// Load a specific configuration file
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: format.name().to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: format.name().to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("shellport").join("config"));
            paths.push(config_dir.join("shellport"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".shellport"));
        }

        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(".shellport"));
        }

        paths
    }

    /// Get the default configuration path
    fn get_default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shellport")
            .join("config.toml")
    }

    /// Validate configuration
    pub fn validate_config(&self, config: &Config) -> Result<()> {
        if let Some(timeout) = config.execution.command_timeout_secs {
            if timeout == 0 {
                return Err(Error::ConfigValidationFailed {
                    field: "execution.command_timeout_secs".to_string(),
                    reason: "Command timeout must be greater than 0".to_string(),
                });
            }

            if timeout > 3600 {
                return Err(Error::ConfigValidationFailed {
                    field: "execution.command_timeout_secs".to_string(),
                    reason: "Command timeout cannot exceed 1 hour (3600 seconds)".to_string(),
                });
            }
        }

        if let Some(dir) = &config.session.initial_directory {
            if !dir.is_dir() {
                return Err(Error::ConfigValidationFailed {
                    field: "session.initial_directory".to_string(),
                    reason: format!("{} is not a directory", dir.display()),
                });
            }
        }

        if config.execution.environment.keys().any(|key| key.is_empty()) {
            return Err(Error::ConfigValidationFailed {
                field: "execution.environment".to_string(),
                reason: "Environment variable names cannot be empty".to_string(),
            });
        }

        if config.logging.level.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "logging.level".to_string(),
                reason: "Log level cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Clear all search paths and add a single path
    pub fn set_search_path(&mut self, path: PathBuf) {
        self.search_paths = vec![path];
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
