#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod content;
pub mod datasets;
pub mod models;
pub mod page;
pub mod project;
pub mod results;

pub use asset_paths::{Asset, AssetKind, AssetResolver};
pub use builder::{BuildResult, ShowcaseArtifacts, ShowcaseBuilder};
pub use config::ShowcaseConfig;
pub use datasets::{DatasetId, DatasetRecord, resolve_dataset_from_filename};
pub use project::{ShowcaseBuildContext, ShowcaseLayout};
pub use results::ResultsView;
