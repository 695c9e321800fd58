// SPDX-License-Identifier: MIT OR Apache-2.0
//! Site settings, stored as `site.ron` next to the executable's working directory.

use crate::app::{Result, SiteError};
use kochillium_sequencer::SequenceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "site.ron";

/// Initial window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Logical width
    pub width: f64,
    /// Logical height
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// Where contact submissions go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSettings {
    /// Directory for JSON outbox files; log only when unset
    pub outbox_dir: Option<PathBuf>,
}

/// Complete site settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Settings format version
    pub version: u32,
    /// Window geometry
    #[serde(default)]
    pub window: WindowSettings,
    /// Loading sequence
    #[serde(default)]
    pub loading: SequenceConfig,
    /// Play the loading sequence on startup
    #[serde(default = "default_true")]
    pub show_loading_screen: bool,
    /// Fade-in of the page content after loading
    #[serde(default = "default_content_fade_ms")]
    pub content_fade_ms: u64,
    /// Contact delivery
    #[serde(default)]
    pub contact: ContactSettings,
    /// Font with Japanese glyphs, added as a fallback
    #[serde(default)]
    pub cjk_font_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_content_fade_ms() -> u64 {
    3000
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            window: WindowSettings::default(),
            loading: SequenceConfig::default(),
            show_loading_screen: true,
            content_fade_ms: default_content_fade_ms(),
            contact: ContactSettings::default(),
            cjk_font_path: None,
        }
    }
}

impl SiteSettings {
    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: SiteSettings = ron::from_str(&content)?;

        // Version check
        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(SiteError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_FORMAT_VERSION,
            });
        }

        settings.loading.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        let content = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Settings file path inside `dir`
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kochillium_sequencer::Phase;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = SiteSettings::default();
        assert_eq!(settings.version, SETTINGS_FORMAT_VERSION);
        assert!(settings.show_loading_screen);
        assert_eq!(settings.content_fade_ms, 3000);
        assert!(settings.contact.outbox_dir.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = SiteSettings::file_path(temp.path());

        let mut settings = SiteSettings::default();
        settings.show_loading_screen = false;
        settings.loading = settings.loading.with_media_intro(6000);
        settings.contact.outbox_dir = Some(temp.path().join("outbox"));
        settings.save(&path).unwrap();

        let loaded = SiteSettings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_newer_version_rejected() {
        let temp = TempDir::new().unwrap();
        let path = SiteSettings::file_path(temp.path());
        std::fs::write(&path, "(version: 99)").unwrap();

        assert!(matches!(
            SiteSettings::load(&path),
            Err(SiteError::UnsupportedVersion { found: 99, .. })
        ));
        assert_eq!(SiteSettings::load_or_default(&path), SiteSettings::default());
    }

    #[test]
    fn test_invalid_sequence_rejected() {
        let temp = TempDir::new().unwrap();
        let path = SiteSettings::file_path(temp.path());

        let mut settings = SiteSettings::default();
        settings.loading.phases = vec![Phase::Fade, Phase::Intro];
        settings.save(&path).unwrap();

        assert!(matches!(SiteSettings::load(&path), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: SiteSettings = ron::from_str("(version: 1)").unwrap();
        assert!(settings.show_loading_screen);
        assert_eq!(settings.content_fade_ms, 3000);
        assert_eq!(settings.loading, SequenceConfig::default());
    }
}
