//! Compiled-in registry of the benchmark datasets shown in the results section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of one of the benchmark datasets with pre-rendered results.
///
/// Declaration order matters: filename classification walks [`DatasetId::ALL`] and the
/// first dataset whose aliases match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetId {
  /// Urban aerial scene.
  Urban,
  /// Jasper Ridge scene.
  Jasper,
  /// Samson scene.
  Samson,
  /// Synthetic checkerboard scene.
  CheckersBoard,
  /// Generated synthetic mixtures.
  Synthetic,
}

impl DatasetId {
  /// Every dataset in declaration order.
  pub const ALL: [DatasetId; 5] = [
    DatasetId::Urban,
    DatasetId::Jasper,
    DatasetId::Samson,
    DatasetId::CheckersBoard,
    DatasetId::Synthetic,
  ];

  /// Lowercase identifier used in filenames and on the command line.
  pub fn as_str(self) -> &'static str {
    match self {
      DatasetId::Urban => "urban",
      DatasetId::Jasper => "jasper",
      DatasetId::Samson => "samson",
      DatasetId::CheckersBoard => "checkersboard",
      DatasetId::Synthetic => "synthetic",
    }
  }

  /// Static record describing this dataset.
  pub fn record(self) -> &'static DatasetRecord {
    match self {
      DatasetId::Urban => &DATASETS[0],
      DatasetId::Jasper => &DATASETS[1],
      DatasetId::Samson => &DATASETS[2],
      DatasetId::CheckersBoard => &DATASETS[3],
      DatasetId::Synthetic => &DATASETS[4],
    }
  }
}

impl fmt::Display for DatasetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Raised when a command-line dataset identifier is not one of the known datasets.
#[derive(Debug, Error)]
#[error("unknown dataset `{0}`, expected one of: urban, jasper, samson, checkersboard, synthetic")]
pub struct ParseDatasetIdError(String);

impl FromStr for DatasetId {
  type Err = ParseDatasetIdError;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    let lowered = value.trim().to_lowercase();
    DatasetId::ALL
      .into_iter()
      .find(|id| id.as_str() == lowered)
      .ok_or_else(|| ParseDatasetIdError(value.to_string()))
  }
}

/// Quality metrics reported for a dataset's unmixing results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetMetrics {
  /// Root mean squared error of the reconstructed abundances.
  pub rmse: f64,
  /// Spectral angle distance of the extracted endmembers.
  pub sad: f64,
  /// Spectral information divergence of the extracted endmembers.
  pub sid: f64,
}

impl DatasetMetrics {
  /// Metric rows in display order.
  pub fn rows(&self) -> [(&'static str, f64); 3] {
    [("RMSE", self.rmse), ("SAD", self.sad), ("SID", self.sid)]
  }
}

/// Fixed description of a dataset: display name, filename aliases and metrics.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetRecord {
  /// Dataset identifier.
  pub id: DatasetId,
  /// Human readable dataset name.
  pub display_name: &'static str,
  /// Lowercase substrings that identify the dataset in an uploaded filename.
  pub aliases: &'static [&'static str],
  /// Reported metrics.
  pub metrics: DatasetMetrics,
}

static DATASETS: [DatasetRecord; 5] = [
  DatasetRecord {
    id: DatasetId::Urban,
    display_name: "Urban",
    aliases: &["urban"],
    metrics: DatasetMetrics { rmse: 0.012, sad: 1.23, sid: 0.045 },
  },
  DatasetRecord {
    id: DatasetId::Jasper,
    display_name: "Jasper Ridge",
    aliases: &["jasper"],
    metrics: DatasetMetrics { rmse: 0.015, sad: 1.35, sid: 0.050 },
  },
  DatasetRecord {
    id: DatasetId::Samson,
    display_name: "Samson",
    aliases: &["samson"],
    metrics: DatasetMetrics { rmse: 0.010, sad: 1.10, sid: 0.040 },
  },
  DatasetRecord {
    id: DatasetId::CheckersBoard,
    display_name: "Checkers Board",
    aliases: &["checker", "checkers", "board"],
    metrics: DatasetMetrics { rmse: 0.005, sad: 0.90, sid: 0.030 },
  },
  DatasetRecord {
    id: DatasetId::Synthetic,
    display_name: "Synthetic",
    aliases: &["synthe", "synth"],
    metrics: DatasetMetrics { rmse: 0.004, sad: 0.85, sid: 0.025 },
  },
];

/// Every dataset record in declaration order.
pub fn dataset_records() -> &'static [DatasetRecord] {
  &DATASETS
}

/// Message shown when an uploaded filename matches no dataset.
pub const UNKNOWN_DATASET_MESSAGE: &str =
  "Unknown dataset. Filename must contain urban, jasper, samson, checker, board, or synth.";

/// Classify an uploaded filename by looking for dataset aliases in its lowercased name.
///
/// Only the name is inspected, never the file content. Datasets are tried in declaration
/// order, so when a name carries aliases of two datasets the earlier one is returned.
pub fn resolve_dataset_from_filename(filename: &str) -> Option<DatasetId> {
  let name = filename.to_lowercase();
  DATASETS
    .iter()
    .find(|record| record.aliases.iter().any(|alias| name.contains(alias)))
    .map(|record| record.id)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn registry_is_total_and_ordered() {
    for (record, id) in dataset_records().iter().zip(DatasetId::ALL) {
      assert_eq!(record.id, id);
      assert_eq!(id.record().id, id);
    }
  }

  #[test]
  fn resolves_each_dataset_from_its_aliases() {
    for record in dataset_records() {
      for alias in record.aliases {
        let filename = format!("scan_{alias}_01.mat");
        assert_eq!(
          resolve_dataset_from_filename(&filename),
          Some(record.id),
          "{filename}"
        );
      }
    }
  }

  #[test]
  fn resolves_documented_examples() {
    assert_eq!(resolve_dataset_from_filename("urban_scan.mat"), Some(DatasetId::Urban));
    assert_eq!(
      resolve_dataset_from_filename("checkerboard_01.npy"),
      Some(DatasetId::CheckersBoard)
    );
    assert_eq!(
      resolve_dataset_from_filename("synthetic_mix.npy"),
      Some(DatasetId::Synthetic)
    );
  }

  #[test]
  fn unknown_filenames_resolve_to_none() {
    assert_eq!(resolve_dataset_from_filename("random_file.mat"), None);
    assert_eq!(resolve_dataset_from_filename(""), None);
  }

  #[test]
  fn matching_ignores_case() {
    assert_eq!(resolve_dataset_from_filename("URBAN.MAT"), Some(DatasetId::Urban));
    assert_eq!(resolve_dataset_from_filename("Jasper_Ridge.NPY"), Some(DatasetId::Jasper));
  }

  #[test]
  fn earlier_dataset_wins_when_aliases_overlap() {
    assert_eq!(
      resolve_dataset_from_filename("samson_vs_urban.mat"),
      Some(DatasetId::Urban)
    );
    assert_eq!(
      resolve_dataset_from_filename("synth_board.npy"),
      Some(DatasetId::CheckersBoard)
    );
  }

  #[test]
  fn parses_identifiers_case_insensitively() {
    assert_eq!("CheckersBoard".parse::<DatasetId>().unwrap(), DatasetId::CheckersBoard);
    assert_eq!(" urban ".parse::<DatasetId>().unwrap(), DatasetId::Urban);
    assert!("checker".parse::<DatasetId>().is_err());
  }

  #[test]
  fn metric_rows_keep_display_order() {
    let rows = DatasetId::Samson.record().metrics.rows();
    assert_eq!(rows.map(|(name, _)| name), ["RMSE", "SAD", "SID"]);
    assert_eq!(rows[0].1, 0.010);
  }
}
