//! Inline images into the page as base64 data URIs.

use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::asset_paths::{Asset, AssetResolver, make_display_path};

/// MIME type announced for an image, chosen from its extension.
pub fn mime_type_for(asset: &Asset) -> &'static str {
  match asset.extension().as_deref() {
    Some("jpg") | Some("jpeg") => "image/jpeg",
    Some("webp") => "image/webp",
    Some("gif") => "image/gif",
    Some("svg") => "image/svg+xml",
    _ => "image/png",
  }
}

/// Read an image and encode it as a `data:` URI.
pub fn encode_data_uri(asset: &Asset) -> Result<String> {
  let bytes = fs::read(&asset.path)
    .with_context(|| format!("failed to read image {}", asset.path.display()))?;
  Ok(format!(
    "data:{};base64,{}",
    mime_type_for(asset),
    STANDARD.encode(bytes)
  ))
}

/// Images embedded into and missing from a rendered page.
#[derive(Debug, Default, Clone)]
pub struct EmbedReport {
  /// Embedded images, relative to the asset directory.
  pub embedded: Vec<String>,
  /// References that did not resolve to a readable image.
  pub missing: Vec<String>,
}

/// Resolves image references and encodes them, keeping track of what was found.
///
/// Failures never abort rendering: a missing or unreadable image is recorded and the
/// caller leaves its slot empty.
pub struct ImageEmbedder<'a> {
  resolver: &'a AssetResolver,
  embedded: BTreeSet<String>,
  missing: BTreeSet<String>,
}

impl<'a> ImageEmbedder<'a> {
  /// Create an embedder resolving against the provided asset directory.
  pub fn new(resolver: &'a AssetResolver) -> Self {
    Self {
      resolver,
      embedded: BTreeSet::new(),
      missing: BTreeSet::new(),
    }
  }

  /// Embed the image found for a file stem.
  pub fn embed_stem(&mut self, stem: &str) -> Option<String> {
    match self.resolver.resolve_by_base_name(stem) {
      Some(asset) => self.embed_asset(&asset),
      None => {
        self.record_missing(stem);
        None
      }
    }
  }

  /// Embed the image for a reference that may be an exact path or a stem.
  pub fn embed_reference(&mut self, reference: &str) -> Option<String> {
    match self.resolver.resolve_reference(reference) {
      Some(asset) => self.embed_asset(&asset),
      None => {
        self.record_missing(reference);
        None
      }
    }
  }

  /// Embed an already resolved asset.
  pub fn embed_asset(&mut self, asset: &Asset) -> Option<String> {
    let display = make_display_path(self.resolver.root(), &asset.path);
    match encode_data_uri(asset) {
      Ok(uri) => {
        self.embedded.insert(display);
        Some(uri)
      }
      Err(err) => {
        log::warn!("{err:#}");
        self.missing.insert(display);
        None
      }
    }
  }

  /// Record a slot whose image could not be found.
  pub fn record_missing(&mut self, reference: &str) {
    log::warn!(
      "image `{reference}` not found in {}",
      self.resolver.root().display()
    );
    self.missing.insert(reference.to_string());
  }

  /// Finish embedding and return what was found and what was missing.
  pub fn into_report(self) -> EmbedReport {
    EmbedReport {
      embedded: self.embedded.into_iter().collect(),
      missing: self.missing.into_iter().collect(),
    }
  }
}
