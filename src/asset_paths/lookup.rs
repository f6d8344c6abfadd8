//! Filesystem-backed resolution of showcase images.

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset_paths::candidates::{generate_image_candidates, generate_reference_candidates};
use crate::asset_paths::filters::{has_image_extension, matches_dataset};
use crate::asset_paths::kind::AssetKind;
use crate::datasets::DatasetId;

/// Image file located inside the asset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Full path of the file, rooted at the resolver's asset directory.
    pub path: PathBuf,
    /// File name as found on disk.
    pub file_name: String,
}

impl Asset {
    fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, file_name }
    }

    /// Lowercased extension without the leading dot.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Stateless resolver answering image lookups by scanning one directory.
///
/// Nothing is cached: every call re-reads the directory, so results always reflect the
/// current contents. Calls never fail; a missing image is `None`.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    /// Create a resolver over the provided asset directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the resolver scans.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find the image for a file stem, trying each supported extension in priority order.
    pub fn resolve_by_base_name(&self, stem: &str) -> Option<Asset> {
        let found = generate_image_candidates(stem)
            .into_iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.is_file())
            .map(Asset::from_path);

        if found.is_none() {
            log::debug!("no image found for stem `{stem}` in {}", self.root.display());
        }
        found
    }

    /// Resolve an image reference from authored content, either an exact relative path or
    /// a stem.
    pub fn resolve_reference(&self, reference: &str) -> Option<Asset> {
        generate_reference_candidates(reference)
            .into_iter()
            .map(|candidate| self.root.join(candidate))
            .find(|path| path.is_file())
            .map(Asset::from_path)
    }

    /// Find the pre-rendered image of `kind` for `dataset`.
    ///
    /// Candidates are the image files directly inside the asset directory, visited in
    /// ascending file-name order. The first one passing both the dataset filter and the
    /// kind keywords is returned.
    pub fn resolve_dataset_asset(&self, dataset: DatasetId, kind: AssetKind) -> Option<Asset> {
        let found = self.image_entries().into_iter().find(|asset| {
            let name = asset.file_name.to_lowercase();
            matches_dataset(&name, dataset) && kind.matches(&name)
        });

        match &found {
            Some(asset) => log::debug!("resolved {dataset} {kind} image to {}", asset.file_name),
            None => log::debug!(
                "no {kind} image for dataset {dataset} in {}",
                self.root.display()
            ),
        }
        found
    }

    fn image_entries(&self) -> Vec<Asset> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("failed to read asset directory {}: {err}", self.root.display());
                return Vec::new();
            }
        };

        let mut assets: Vec<Asset> = entries
            .flatten()
            .filter(|entry| entry.path().is_file())
            .filter(|entry| has_image_extension(&entry.file_name().to_string_lossy()))
            .map(|entry| Asset::from_path(entry.path()))
            .collect();

        assets.sort_by(|left, right| left.file_name.cmp(&right.file_name));
        assets
    }
}
