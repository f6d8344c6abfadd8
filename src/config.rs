//! Project configuration loader describing where showcase inputs and outputs live.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::project::ShowcaseLayout;

/// File name searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "showcase.config.json";

/// Discoverable configuration describing the filesystem layout of a showcase build.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Directory holding the images and documents referenced by the page.
    pub asset_dir: String,
    /// Markdown file with frontmatter providing the page text.
    pub content_file: String,
    /// Directory the rendered page is written to.
    pub output_dir: String,
    /// File name of the rendered page.
    pub index_html_file: String,
    /// File name of the JSON build manifest.
    pub manifest_json: String,
    /// Display width in pixels for images in the narrative sections.
    pub section_image_width: u32,
    /// Display width in pixels for dataset result images.
    pub result_image_width: u32,
    /// Display width in pixels for the logo.
    pub logo_width: u32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            asset_dir: ".".into(),
            content_file: "content/showcase.md".into(),
            output_dir: "target/showcase".into(),
            index_html_file: "index.html".into(),
            manifest_json: "showcase_manifest.json".into(),
            section_image_width: 900,
            result_image_width: 800,
            logo_width: 180,
        }
    }
}

impl ShowcaseConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall back to default
    /// values so a bare checkout can still render the page.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match Self::from_path(&candidate) {
            Some(config) => {
                log::debug!("loaded configuration from {}", candidate.display());
                config
            }
            None => Self::default(),
        }
    }

    /// Load configuration from a file the user named explicitly.
    ///
    /// Unlike [`ShowcaseConfig::discover`], a missing or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse configuration {}", path.display()))
    }

    /// Read configuration from a specific JSON file, returning `None` when it is absent
    /// or invalid.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!("ignoring invalid configuration {}: {err}", path.display());
                None
            }
        }
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> ShowcaseLayout {
        ShowcaseLayout {
            asset_dir: self.asset_dir.into(),
            content_file: self.content_file.into(),
            output_dir: self.output_dir.into(),
            index_html_file: self.index_html_file,
            manifest_json: self.manifest_json,
            section_image_width: self.section_image_width,
            result_image_width: self.result_image_width,
            logo_width: self.logo_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = ShowcaseConfig::discover(dir.path());
        assert_eq!(config.asset_dir, ".");
        assert_eq!(config.result_image_width, 800);
    }

    #[test]
    fn discover_reads_partial_configuration() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"asset_dir": "static", "logo_width": 120}"#,
        )
        .unwrap();

        let layout = ShowcaseConfig::discover(dir.path()).into_layout();
        assert_eq!(layout.asset_dir, PathBuf::from("static"));
        assert_eq!(layout.logo_width, 120);
        assert_eq!(layout.index_html_file, "index.html");
    }

    #[test]
    fn explicit_configuration_must_exist() {
        let dir = tempdir().unwrap();
        let err = ShowcaseConfig::load(&dir.path().join("typo.config.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read configuration"));

        let invalid = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&invalid, "{ not json").unwrap();
        let err = ShowcaseConfig::load(&invalid).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse configuration"));
    }

    #[test]
    fn explicit_configuration_loads_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"output_dir": "public"}"#).unwrap();

        let config = ShowcaseConfig::load(&path).unwrap();
        assert_eq!(config.output_dir, "public");
        assert_eq!(config.asset_dir, ".");
    }

    #[test]
    fn invalid_configuration_is_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        let config = ShowcaseConfig::discover(dir.path());
        assert_eq!(config.output_dir, "target/showcase");
    }
}
