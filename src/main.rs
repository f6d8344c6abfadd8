use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hsu_showcase::datasets::UNKNOWN_DATASET_MESSAGE;
use hsu_showcase::{
  AssetKind, AssetResolver, DatasetId, ShowcaseBuildContext, ShowcaseBuilder, ShowcaseConfig,
  resolve_dataset_from_filename,
};

/// Render and inspect the hyperspectral unmixing showcase page.
#[derive(Debug, Parser)]
#[command(name = "hsu_showcase", version, about)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Render the page and write it to the output directory.
  Build {
    /// Configuration file; defaults to `showcase.config.json` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding images and documents.
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Directory the page is written to.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Markdown content file.
    #[arg(long)]
    content: Option<PathBuf>,
    /// Filename of the uploaded dataset (.mat or .npy) selecting the results.
    #[arg(long)]
    upload: Option<String>,
  },
  /// Print the dataset an uploaded filename resolves to.
  ResolveDataset {
    /// Uploaded filename.
    filename: String,
  },
  /// Print the result image of a kind for a dataset.
  FindAsset {
    /// Dataset identifier.
    #[arg(long)]
    dataset: DatasetId,
    /// `signature` or `abundance`.
    #[arg(long)]
    kind: AssetKind,
    /// Directory to scan.
    #[arg(long, default_value = ".")]
    assets: PathBuf,
  },
  /// Print the image found for a file stem.
  FindImage {
    /// File name without extension.
    stem: String,
    /// Directory to scan.
    #[arg(long, default_value = ".")]
    assets: PathBuf,
  },
}

fn main() -> Result<ExitCode> {
  env_logger::init();
  let cli = Cli::parse();

  match cli.command {
    Command::Build {
      config,
      assets,
      out,
      content,
      upload,
    } => {
      let config = match config {
        Some(path) => ShowcaseConfig::load(&path)?,
        None => ShowcaseConfig::discover(Path::new(".")),
      };
      let mut layout = config.into_layout();
      if let Some(assets) = assets {
        layout.asset_dir = assets;
      }
      if let Some(out) = out {
        layout.output_dir = out;
      }
      if let Some(content) = content {
        layout.content_file = content;
      }

      let context = ShowcaseBuildContext::new(&layout, upload.as_deref());
      let artifacts = ShowcaseBuilder::new(context).build()?;
      println!("{}", artifacts.index_path.display());
      Ok(ExitCode::SUCCESS)
    }
    Command::ResolveDataset { filename } => match resolve_dataset_from_filename(&filename) {
      Some(dataset) => {
        println!("{dataset}");
        Ok(ExitCode::SUCCESS)
      }
      None => {
        eprintln!("{UNKNOWN_DATASET_MESSAGE}");
        Ok(ExitCode::FAILURE)
      }
    },
    Command::FindAsset {
      dataset,
      kind,
      assets,
    } => Ok(print_found(
      AssetResolver::new(assets).resolve_dataset_asset(dataset, kind),
    )),
    Command::FindImage { stem, assets } => Ok(print_found(
      AssetResolver::new(assets).resolve_by_base_name(&stem),
    )),
  }
}

fn print_found(asset: Option<hsu_showcase::Asset>) -> ExitCode {
  match asset {
    Some(asset) => {
      println!("{}", asset.path.display());
      ExitCode::SUCCESS
    }
    None => {
      eprintln!("not found");
      ExitCode::FAILURE
    }
  }
}
