//! Showcase build orchestrator: loads content, renders the page and writes the outputs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use same_file::is_same_file;

use crate::asset_paths::AssetResolver;
use crate::content::load_content;
use crate::models::{ShowcaseContent, ShowcaseManifestSummary};
use crate::page::render_page;
use crate::project::ShowcaseBuildContext;
use crate::results::ResultsView;

/// Generic build result type used across the crate.
pub type BuildResult<T> = anyhow::Result<T>;

/// Outputs of a showcase build.
#[derive(Debug)]
pub struct ShowcaseArtifacts {
  /// Rendered HTML document.
  pub html: String,
  /// Summary of what the build resolved.
  pub manifest: ShowcaseManifestSummary,
  /// Manifest serialised as prettified JSON.
  pub manifest_json: String,
  /// Where the page was written.
  pub index_path: PathBuf,
  /// Where the manifest was written.
  pub manifest_path: PathBuf,
}

/// High-level helper that renders the page and writes it to the output directory.
pub struct ShowcaseBuilder<'a> {
  context: ShowcaseBuildContext<'a>,
}

impl<'a> ShowcaseBuilder<'a> {
  /// Create a builder for the provided build context.
  pub fn new(context: ShowcaseBuildContext<'a>) -> Self {
    Self { context }
  }

  /// Render the page, copy referenced documents and write the page and manifest.
  pub fn build(&self) -> BuildResult<ShowcaseArtifacts> {
    let layout = self.context.layout;
    let content = load_content(&layout.content_file)?;
    let resolver = AssetResolver::new(self.context.asset_dir());

    let results = self
      .context
      .upload
      .map(|upload| ResultsView::from_upload(&resolver, upload));

    fs::create_dir_all(&layout.output_dir)
      .with_context(|| format!("failed to create {}", layout.output_dir.display()))?;

    let documents = self.mirror_documents(&content)?;
    let page = render_page(layout, &content, &resolver, results.as_ref(), &documents);

    let manifest = ShowcaseManifestSummary {
      upload: self.context.upload.map(str::to_string),
      dataset: results
        .as_ref()
        .and_then(|view| view.dataset())
        .map(|record| record.id),
      result_images: results
        .as_ref()
        .map(|view| view.image_summaries(resolver.root()))
        .unwrap_or_default(),
      embedded_images: page.images.embedded,
      missing_images: page.images.missing,
      documents,
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;

    let index_path = layout.index_path();
    fs::write(&index_path, &page.html)
      .with_context(|| format!("failed to write {}", index_path.display()))?;
    let manifest_path = layout.manifest_path();
    fs::write(&manifest_path, &manifest_json)
      .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    log::info!("wrote {}", index_path.display());
    if !manifest.missing_images.is_empty() {
      log::warn!(
        "{} image reference(s) could not be resolved: {}",
        manifest.missing_images.len(),
        manifest.missing_images.join(", ")
      );
    }

    Ok(ShowcaseArtifacts {
      html: page.html,
      manifest,
      manifest_json,
      index_path,
      manifest_path,
    })
  }

  fn mirror_documents(&self, content: &ShowcaseContent) -> BuildResult<Vec<String>> {
    let layout = self.context.layout;
    let mut mirrored = Vec::new();

    for document in content
      .frontmatter
      .presentations
      .iter()
      .filter_map(|presentation| presentation.document.as_deref())
    {
      let relative = document.trim();
      if !is_plain_relative_path(Path::new(relative)) {
        log::warn!("skipping document `{relative}` outside the asset directory");
        continue;
      }

      let source = layout.asset_dir.join(relative);
      if !source.is_file() {
        log::warn!("document {} not found", source.display());
        continue;
      }

      let destination = layout.output_dir.join(relative);
      if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }

      install_document(&source, &destination).with_context(|| {
        format!(
          "failed to copy {} to {}",
          source.display(),
          destination.display()
        )
      })?;
      mirrored.push(relative.replace('\\', "/"));
    }

    Ok(mirrored)
  }
}

fn is_plain_relative_path(path: &Path) -> bool {
  !path.as_os_str().is_empty()
    && path
      .components()
      .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

fn install_document(source: &Path, destination: &Path) -> std::io::Result<()> {
  if destination.exists() {
    if is_same_file(source, destination)? {
      return Ok(());
    }
    fs::remove_file(destination)?;
  }

  match fs::hard_link(source, destination) {
    Ok(_) => Ok(()),
    Err(err) => {
      if err.kind() == ErrorKind::AlreadyExists {
        Ok(())
      } else {
        fs::copy(source, destination).map(|_| ())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ShowcaseConfig;
  use crate::datasets::DatasetId;
  use crate::project::ShowcaseLayout;
  use tempfile::tempdir;

  const CONTENT: &str = r#"---
title: Demo Showcase
logo: logo
presentations:
  - status: Accepted
    title: Conference talk
    document: talk slides.pdf
  - status: Presented
    title: Missing slides
    document: absent.pdf
  - status: Presented
    title: Escaping path
    document: ../secret.pdf
---

## Overview

![Cube](cube)
"#;

  fn layout(root: &Path) -> ShowcaseLayout {
    let mut layout = ShowcaseConfig::default().into_layout();
    layout.asset_dir = root.join("assets");
    layout.content_file = root.join("showcase.md");
    layout.output_dir = root.join("out");
    layout
  }

  fn fixture(root: &Path) {
    let assets = root.join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(root.join("showcase.md"), CONTENT).unwrap();
    fs::write(assets.join("logo.png"), b"logo").unwrap();
    fs::write(assets.join("cube.jpg"), b"cube").unwrap();
    fs::write(assets.join("samson_endmembers.png"), b"sig").unwrap();
    fs::write(assets.join("talk slides.pdf"), b"%PDF").unwrap();
    fs::write(root.join("secret.pdf"), b"secret").unwrap();
  }

  #[test]
  fn builds_page_and_manifest_for_matched_upload() {
    let temp = tempdir().unwrap();
    fixture(temp.path());
    let layout = layout(temp.path());

    let artifacts = ShowcaseBuilder::new(ShowcaseBuildContext::new(&layout, Some("Samson.mat")))
      .build()
      .unwrap();

    assert!(artifacts.index_path.exists());
    assert!(artifacts.html.contains("<h2>Overview</h2>"));
    assert!(artifacts.html.contains("href=\"talk%20slides.pdf\""));
    assert!(artifacts.html.contains("Missing slides</div>"));
    assert!(!artifacts.html.contains("href=\"absent.pdf\""));
    assert!(!artifacts.html.contains("secret.pdf"));
    assert_eq!(artifacts.manifest.dataset, Some(DatasetId::Samson));
    assert_eq!(
      artifacts.manifest.result_images[0].path.as_deref(),
      Some("samson_endmembers.png")
    );
    assert!(artifacts.manifest.result_images[1].path.is_none());
    assert_eq!(artifacts.manifest.documents, vec!["talk slides.pdf".to_string()]);
    assert!(layout.output_dir.join("talk slides.pdf").exists());
    assert!(!layout.output_dir.join("secret.pdf").exists());

    let written: ShowcaseManifestSummary =
      serde_json::from_str(&fs::read_to_string(&artifacts.manifest_path).unwrap()).unwrap();
    assert_eq!(written.dataset, Some(DatasetId::Samson));
    assert_eq!(written.upload.as_deref(), Some("Samson.mat"));
  }

  #[test]
  fn unknown_upload_still_builds() {
    let temp = tempdir().unwrap();
    fixture(temp.path());
    let layout = layout(temp.path());

    let artifacts = ShowcaseBuilder::new(ShowcaseBuildContext::new(&layout, Some("notes.npy")))
      .build()
      .unwrap();

    assert!(artifacts.html.contains("Unknown dataset."));
    assert!(artifacts.manifest.dataset.is_none());
    assert!(artifacts.manifest.result_images.is_empty());
  }

  #[test]
  fn rebuilding_is_idempotent() {
    let temp = tempdir().unwrap();
    fixture(temp.path());
    let layout = layout(temp.path());
    let context = ShowcaseBuildContext::new(&layout, Some("samson.npy"));

    let first = ShowcaseBuilder::new(context).build().unwrap();
    let second = ShowcaseBuilder::new(context).build().unwrap();

    assert_eq!(first.html, second.html);
    assert_eq!(first.manifest_json, second.manifest_json);
  }

  #[test]
  fn rejects_escaping_document_paths() {
    assert!(is_plain_relative_path(Path::new("docs/talk.pdf")));
    assert!(!is_plain_relative_path(Path::new("../secret.pdf")));
    assert!(!is_plain_relative_path(Path::new("/etc/passwd")));
    assert!(!is_plain_relative_path(Path::new("")));
  }

  #[test]
  fn install_document_reuses_existing_links() -> std::io::Result<()> {
    let temp = tempdir()?;
    let source = temp.path().join("paper.pdf");
    let destination = temp.path().join("copy.pdf");
    fs::write(&source, b"content")?;

    install_document(&source, &destination)?;
    assert!(destination.exists());
    install_document(&source, &destination)?;
    assert_eq!(fs::read(&destination)?, b"content");

    Ok(())
  }
}
