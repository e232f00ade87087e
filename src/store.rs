//! Durable theme storage in a JSON file.
//!
//! The file is a flat object of slot name to ARGB integer:
//!
//! ```json
//! { "background1": 4278190165, "hour_hand": 4289396735 }
//! ```
//!
//! Writes only touch memory; [`flush`](ThemeStore::flush) rewrites the file.
//! Keys this version does not know are kept, so a newer companion's settings
//! survive a round trip through an older simulator.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use sea_lines_common::{ThemeKey, ThemeStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{PROJECT_DIRS, STORE_FILE_NAME};

/// Theme store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("theme store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("theme store {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk layout of the theme file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background1: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    background2: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_bg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weekday_bg: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    digit_stroke: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hour_hand: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minute_hand: Option<u32>,
    /// Settings written by other versions, kept as they are.
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

impl ThemeFile {
    fn slot(
        &mut self,
        key: ThemeKey,
    ) -> &mut Option<u32> {
        match key {
            ThemeKey::Background1 => &mut self.background1,
            ThemeKey::Background2 => &mut self.background2,
            ThemeKey::DateBg => &mut self.date_bg,
            ThemeKey::WeekdayBg => &mut self.weekday_bg,
            ThemeKey::DigitStroke => &mut self.digit_stroke,
            ThemeKey::HourHand => &mut self.hour_hand,
            ThemeKey::MinuteHand => &mut self.minute_hand,
        }
    }

    const fn get(
        &self,
        key: ThemeKey,
    ) -> Option<u32> {
        match key {
            ThemeKey::Background1 => self.background1,
            ThemeKey::Background2 => self.background2,
            ThemeKey::DateBg => self.date_bg,
            ThemeKey::WeekdayBg => self.weekday_bg,
            ThemeKey::DigitStroke => self.digit_stroke,
            ThemeKey::HourHand => self.hour_hand,
            ThemeKey::MinuteHand => self.minute_hand,
        }
    }
}

/// [`ThemeStore`] backed by one JSON file.
#[derive(Debug)]
pub struct JsonThemeStore {
    path: PathBuf,
    file: ThemeFile,
}

impl JsonThemeStore {
    /// `theme.json` in the platform config directory.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let (qualifier, organization, application) = PROJECT_DIRS;
        let dirs = directories::ProjectDirs::from(qualifier, organization, application).ok_or(StoreError::NoConfigDir)?;
        Ok(dirs.config_dir().join(STORE_FILE_NAME))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no theme store at {}, using defaults", path.display());
                ThemeFile::default()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path { &self.path }

    fn io_error(
        &self,
        source: io::Error,
    ) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for JsonThemeStore {
    type Error = StoreError;

    fn read(
        &self,
        key: ThemeKey,
    ) -> Option<u32> {
        self.file.get(key)
    }

    fn write(
        &mut self,
        key: ThemeKey,
        argb: u32,
    ) -> Result<(), StoreError> {
        *self.file.slot(key) = Some(argb);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let content = serde_json::to_string_pretty(&self.file).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|err| self.io_error(err))?;
        log::debug!("theme saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_lines_common::{ConfigMessage, Theme, ThemeColor};

    use super::*;

    /// Unique scratch path, removed on drop.
    struct ScratchFile(PathBuf);

    impl ScratchFile {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("sea-lines-{}-{name}", std::process::id()));
            Self(dir.join(STORE_FILE_NAME))
        }
    }

    impl Drop for ScratchFile {
        fn drop(&mut self) {
            if let Some(dir) = self.0.parent() {
                std::fs::remove_dir_all(dir).ok();
            }
        }
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let file = ScratchFile::new("missing");
        let store = JsonThemeStore::open(&file.0).unwrap();
        assert_eq!(Theme::load(&store), Theme::DEFAULT);
    }

    #[test]
    fn test_theme_survives_restart() {
        let file = ScratchFile::new("restart");
        let mut message = ConfigMessage::new();
        for (i, key) in ThemeKey::ALL.into_iter().enumerate() {
            message.set(key, 0x0A_0B0C + i as i32);
        }

        let mut theme = Theme::DEFAULT;
        theme.apply(&message);
        let mut store = JsonThemeStore::open(&file.0).unwrap();
        theme.save(&mut store).unwrap();
        drop(store);

        let reopened = JsonThemeStore::open(&file.0).unwrap();
        let reloaded = Theme::load(&reopened);
        assert_eq!(reloaded, theme);
        for (key, hex) in message.iter() {
            assert_eq!(reloaded.get(key), ThemeColor::from_hex(hex));
        }
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let file = ScratchFile::new("unknown");
        std::fs::create_dir_all(file.0.parent().unwrap()).unwrap();
        std::fs::write(&file.0, r#"{"seconds_hand": 7, "date_bg": 4294901760}"#).unwrap();

        let mut store = JsonThemeStore::open(&file.0).unwrap();
        assert_eq!(store.read(ThemeKey::DateBg), Some(0xFFFF_0000));
        Theme::DEFAULT.save(&mut store).unwrap();

        let content = std::fs::read_to_string(&file.0).unwrap();
        let saved: BTreeMap<String, u32> = serde_json::from_str(&content).unwrap();
        assert_eq!(saved.get("seconds_hand"), Some(&7));
        assert_eq!(saved.len(), 8);
    }

    #[test]
    fn test_foreign_settings_round_trip() {
        let file = ScratchFile::new("foreign");
        std::fs::create_dir_all(file.0.parent().unwrap()).unwrap();
        std::fs::write(&file.0, r#"{"hour_hand": 4278255360, "companion": {"units": "metric"}}"#).unwrap();

        let mut store = JsonThemeStore::open(&file.0).unwrap();
        assert_eq!(store.read(ThemeKey::HourHand), Some(0xFF00_FF00));
        assert_eq!(store.read(ThemeKey::MinuteHand), None);
        store.write(ThemeKey::MinuteHand, 0xFF12_3456).unwrap();
        store.flush().unwrap();

        let saved: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&file.0).unwrap()).unwrap();
        assert_eq!(saved["companion"]["units"], "metric");
        assert_eq!(saved["hour_hand"], 0xFF00_FF00_u32);
        assert_eq!(saved["minute_hand"], 0xFF12_3456_u32);
        assert!(saved.get("date_bg").is_none(), "unwritten slots stay out of the file");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let file = ScratchFile::new("corrupt");
        std::fs::create_dir_all(file.0.parent().unwrap()).unwrap();
        std::fs::write(&file.0, "not json").unwrap();

        let err = JsonThemeStore::open(&file.0).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }
}
