//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the colour scheme and where exported screening images are written. The
//! configuration directory also hosts the persisted settings file.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/daily-screening";
const EXPORT_FOLDER_NAME: &str = "Daily Screening";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub export_directory: Option<PathBuf>,
    dir_path: Option<PathBuf>,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_directory: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "light".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            export_directory: None,
            dir_path: None,
            file_path: None,
        }
    }

    /// Load an existing configuration from the custom directory if provided,
    /// otherwise from the default directory. A missing file is created with
    /// default values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        self.dir_path = Some(dir_path);
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::InvalidFile {
                    path: file_path.clone(),
                    source: e,
                })?;
            self.theme_name = data.theme_name;
            self.export_directory = data.export_directory;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::NotLoaded)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            export_directory: self.export_directory.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(ConfigError::EncodeFailed)?;
        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Directory holding the configuration and settings files.
    ///
    pub fn directory(&self) -> Result<&Path, AppError> {
        self.dir_path
            .as_deref()
            .ok_or_else(|| ConfigError::NotLoaded.into())
    }

    /// Directory exported screening images are written to: the configured
    /// one, or a folder inside the user's pictures (or home) directory.
    ///
    pub fn resolved_export_directory(&self) -> Result<PathBuf, AppError> {
        if let Some(dir) = &self.export_directory {
            return Ok(dir.clone());
        }
        match dirs::picture_dir().or_else(dirs::home_dir) {
            Some(base) => Ok(base.join(EXPORT_FOLDER_NAME)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
