//! Persisted settings module.
//!
//! Profile fields and the most recent survey result are kept as a handful of
//! scalar keys in `settings.yml`. The application receives a `SettingsStore`
//! instead of reaching for global storage, so tests can swap in memory.

mod error;

pub use error::StoreError;

use crate::screening::{distant_past, Profile, SurveyResult};
use chrono::{DateTime, SecondsFormat, Utc};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "settings.yml";

/// Everything the screening screens read from storage.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub profile: Profile,
    pub survey: SurveyResult,
}

/// Loads and persists settings.
///
pub trait SettingsStore {
    fn load(&self) -> Result<Settings, StoreError>;
    fn save(&mut self, settings: &Settings) -> Result<(), StoreError>;
}

/// Define specification for the settings file.
///
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileSpec {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_date_last_survey")]
    pub date_last_survey: String,
    #[serde(default = "default_is_clear_last_survey")]
    pub is_clear_last_survey: bool,
}

fn default_date_last_survey() -> String {
    encode_timestamp(&distant_past())
}

fn default_is_clear_last_survey() -> bool {
    true
}

impl From<&Settings> for FileSpec {
    fn from(settings: &Settings) -> Self {
        FileSpec {
            first_name: settings.profile.first_name.clone(),
            last_name: settings.profile.last_name.clone(),
            email: settings.profile.email.clone(),
            date_last_survey: encode_timestamp(&settings.survey.last_survey_date),
            is_clear_last_survey: settings.survey.is_clear,
        }
    }
}

/// Encode a timestamp the way it is stored on disk.
///
pub fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Decode a stored timestamp, rejecting anything that is not RFC 3339.
///
pub fn decode_timestamp(value: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|source| StoreError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Settings kept in a YAML file.
///
pub struct FileStore {
    file_path: PathBuf,
}

impl FileStore {
    /// Return a store for the settings file inside `dir_path`.
    ///
    pub fn new(dir_path: &Path) -> FileStore {
        FileStore {
            file_path: dir_path.join(Path::new(FILE_NAME)),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn to_settings(data: FileSpec) -> Settings {
        let last_survey_date = match decode_timestamp(&data.date_last_survey) {
            Ok(timestamp) => timestamp,
            Err(e) => {
                // A corrupt date must not read as a screening taken today.
                warn!("{}; treating the last screening as never taken", e);
                distant_past()
            }
        };
        Settings {
            profile: Profile {
                first_name: data.first_name,
                last_name: data.last_name,
                email: data.email,
            },
            survey: SurveyResult {
                last_survey_date,
                is_clear: data.is_clear_last_survey,
            },
        }
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Settings, StoreError> {
        if !self.file_path.exists() {
            debug!(
                "No settings file at {}, using defaults",
                self.file_path.display()
            );
            return Ok(Settings::default());
        }
        let contents =
            fs::read_to_string(&self.file_path).map_err(|e| StoreError::LoadFailed {
                path: self.file_path.clone(),
                source: e,
            })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
        Ok(FileStore::to_settings(data))
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let content = serde_yaml::to_string(&FileSpec::from(settings))
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(&self.file_path).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| StoreError::SaveFailed {
            path: self.file_path.clone(),
            source: e,
        })?;
        debug!("Saved settings to {}", self.file_path.display());
        Ok(())
    }
}

/// Settings kept in memory only.
///
#[derive(Default)]
pub struct MemoryStore {
    settings: Settings,
    saves: usize,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        MemoryStore { settings, saves: 0 }
    }

    /// Number of times `save` was called.
    ///
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = settings.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn jane_cleared() -> Settings {
        Settings {
            profile: Profile::new("Jane", "Doe", "jdoe"),
            survey: SurveyResult {
                last_survey_date: Utc.with_ymd_and_hms(2022, 5, 2, 14, 0, 0).unwrap(),
                is_clear: true,
            },
        }
    }

    #[test]
    fn test_timestamp_encoding() {
        let timestamp = Utc.with_ymd_and_hms(2022, 5, 2, 14, 0, 0).unwrap();
        assert_eq!(encode_timestamp(&timestamp), "2022-05-02T14:00:00Z");
        assert_eq!(decode_timestamp("2022-05-02T14:00:00Z").unwrap(), timestamp);
        assert_eq!(
            decode_timestamp("2022-05-02T16:00:00+02:00").unwrap(),
            timestamp
        );
        assert_eq!(
            decode_timestamp(&default_date_last_survey()).unwrap(),
            distant_past()
        );
    }

    #[test]
    fn test_decode_timestamp_rejects_garbage() {
        let error = decode_timestamp("not a date").unwrap_err();
        assert!(matches!(error, StoreError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_file_store_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let settings = store.load().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.survey.is_clear);
        assert!(!settings.survey.has_submission());
    }

    #[test]
    fn test_file_store_persists_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&jane_cleared()).unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(reopened.load().unwrap(), jane_cleared());
    }

    #[test]
    fn test_file_store_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&jane_cleared()).unwrap();

        let contents = fs::read_to_string(store.file_path()).unwrap();
        for key in [
            "firstName",
            "lastName",
            "email",
            "dateLastSurvey",
            "isClearLastSurvey",
        ] {
            assert!(contents.contains(key), "missing key {}", key);
        }
    }

    #[test]
    fn test_file_store_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.file_path(), "firstName: Jane\n").unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.profile.first_name, "Jane");
        assert!(settings.profile.last_name.is_empty());
        assert_eq!(settings.survey, SurveyResult::default());
    }

    #[test]
    fn test_file_store_malformed_timestamp_reads_as_never() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(
            store.file_path(),
            "dateLastSurvey: garbage\nisClearLastSurvey: false\n",
        )
        .unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.survey.last_survey_date, distant_past());
        assert!(!settings.survey.is_clear);
    }

    #[test]
    fn test_file_store_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.file_path(), "isClearLastSurvey: [not, a, bool]\n").unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&jane_cleared()).unwrap();
        assert_eq!(store.saves(), 1);
        assert_eq!(store.load().unwrap(), jane_cleared());
    }
}
