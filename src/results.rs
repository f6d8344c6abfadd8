//! Results section driven by the uploaded dataset filename.

use std::path::Path;

use crate::asset_paths::{Asset, AssetKind, AssetResolver, make_display_path};
use crate::datasets::{DatasetRecord, resolve_dataset_from_filename};
use crate::models::ResultImageSummary;

/// Upload extensions the results section is designed for.
pub const SUPPORTED_UPLOAD_EXTENSIONS: [&str; 2] = ["mat", "npy"];

/// Returns `true` when the uploaded filename carries a supported extension.
pub fn is_supported_upload(filename: &str) -> bool {
  Path::new(filename)
    .extension()
    .map(|ext| ext.to_string_lossy().to_lowercase())
    .is_some_and(|ext| SUPPORTED_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
}

/// Pre-rendered results for a recognised dataset.
#[derive(Debug, Clone)]
pub struct MatchedResults {
  /// Filename that selected the dataset.
  pub upload: String,
  /// Matched dataset.
  pub dataset: &'static DatasetRecord,
  /// Endmember signature image, when one exists.
  pub signature: Option<Asset>,
  /// Abundance map image, when one exists.
  pub abundance: Option<Asset>,
}

/// What the results section shows for an upload.
#[derive(Debug, Clone)]
pub enum ResultsView {
  /// The filename matched a dataset.
  Matched(MatchedResults),
  /// The filename matched no dataset; the page shows a hint instead of results.
  Unknown {
    /// Filename that failed to match.
    upload: String,
  },
}

impl ResultsView {
  /// Classify the uploaded filename and look up the dataset's result images.
  ///
  /// Only the name is inspected. Files with an unexpected extension are still
  /// classified, with a warning.
  pub fn from_upload(resolver: &AssetResolver, upload: &str) -> Self {
    if !is_supported_upload(upload) {
      log::warn!(
        "uploaded file `{upload}` is not a .mat or .npy file, classifying by name anyway"
      );
    }

    let Some(dataset) = resolve_dataset_from_filename(upload) else {
      log::warn!("uploaded file `{upload}` does not match any known dataset");
      return ResultsView::Unknown {
        upload: upload.to_string(),
      };
    };

    log::info!("uploaded file `{upload}` resolved to dataset {dataset}");
    ResultsView::Matched(MatchedResults {
      upload: upload.to_string(),
      dataset: dataset.record(),
      signature: resolver.resolve_dataset_asset(dataset, AssetKind::Signature),
      abundance: resolver.resolve_dataset_asset(dataset, AssetKind::Abundance),
    })
  }

  /// Filename the view was built from.
  pub fn upload(&self) -> &str {
    match self {
      ResultsView::Matched(results) => &results.upload,
      ResultsView::Unknown { upload } => upload,
    }
  }

  /// Matched dataset, if any.
  pub fn dataset(&self) -> Option<&'static DatasetRecord> {
    match self {
      ResultsView::Matched(results) => Some(results.dataset),
      ResultsView::Unknown { .. } => None,
    }
  }

  /// Summaries of the result images for the build manifest.
  pub fn image_summaries(&self, asset_root: &Path) -> Vec<ResultImageSummary> {
    let ResultsView::Matched(results) = self else {
      return Vec::new();
    };

    [
      (AssetKind::Signature, &results.signature),
      (AssetKind::Abundance, &results.abundance),
    ]
    .into_iter()
    .map(|(kind, asset)| ResultImageSummary {
      kind,
      path: asset
        .as_ref()
        .map(|asset| make_display_path(asset_root, &asset.path)),
    })
    .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::datasets::DatasetId;
  use std::fs;
  use tempfile::tempdir;

  #[test]
  fn recognises_supported_extensions() {
    assert!(is_supported_upload("urban.mat"));
    assert!(is_supported_upload("URBAN.NPY"));
    assert!(!is_supported_upload("urban.csv"));
    assert!(!is_supported_upload("urban"));
  }

  #[test]
  fn matched_upload_collects_result_images() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("urban_signature.png"), b"s").unwrap();
    fs::write(dir.path().join("urban_abundance.png"), b"a").unwrap();

    let resolver = AssetResolver::new(dir.path());
    let view = ResultsView::from_upload(&resolver, "Urban_R162.mat");

    let ResultsView::Matched(results) = &view else {
      panic!("expected a matched dataset");
    };
    assert_eq!(results.dataset.id, DatasetId::Urban);
    assert_eq!(results.signature.as_ref().unwrap().file_name, "urban_signature.png");
    assert_eq!(results.abundance.as_ref().unwrap().file_name, "urban_abundance.png");

    let summaries = view.image_summaries(dir.path());
    assert_eq!(summaries[0].kind, AssetKind::Signature);
    assert_eq!(summaries[0].path.as_deref(), Some("urban_signature.png"));
  }

  #[test]
  fn matched_upload_tolerates_missing_images() {
    let dir = tempdir().unwrap();
    let resolver = AssetResolver::new(dir.path());
    let view = ResultsView::from_upload(&resolver, "jasper.npy");

    assert_eq!(view.dataset().map(|record| record.id), Some(DatasetId::Jasper));
    assert!(view.image_summaries(dir.path()).iter().all(|summary| summary.path.is_none()));
  }

  #[test]
  fn unknown_upload_has_no_dataset() {
    let dir = tempdir().unwrap();
    let resolver = AssetResolver::new(dir.path());
    let view = ResultsView::from_upload(&resolver, "random_file.mat");

    assert!(view.dataset().is_none());
    assert_eq!(view.upload(), "random_file.mat");
    assert!(view.image_summaries(dir.path()).is_empty());
  }
}
