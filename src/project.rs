//! Layout and build context shared by the page renderer and the builder.

use std::path::{Path, PathBuf};

/// Resolved filesystem layout for a showcase build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseLayout {
  /// Directory holding the images and documents referenced by the page.
  pub asset_dir: PathBuf,
  /// Markdown file with frontmatter providing the page text.
  pub content_file: PathBuf,
  /// Directory the rendered page is written to.
  pub output_dir: PathBuf,
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

impl ShowcaseLayout {
  /// Path of the rendered page.
  pub fn index_path(&self) -> PathBuf {
    self.output_dir.join(&self.index_html_file)
  }

  /// Path of the JSON build manifest.
  pub fn manifest_path(&self) -> PathBuf {
    self.output_dir.join(&self.manifest_json)
  }
}

/// Inputs for a single build: the layout plus the optional uploaded dataset filename.
#[derive(Debug, Clone, Copy)]
pub struct ShowcaseBuildContext<'a> {
  /// Layout describing inputs and outputs.
  pub layout: &'a ShowcaseLayout,
  /// Filename of the uploaded dataset driving the results section.
  pub upload: Option<&'a str>,
}

impl<'a> ShowcaseBuildContext<'a> {
  /// Create a context for the provided layout.
  pub fn new(layout: &'a ShowcaseLayout, upload: Option<&'a str>) -> Self {
    Self { layout, upload }
  }

  /// Directory holding the page assets.
  pub fn asset_dir(&self) -> &Path {
    &self.layout.asset_dir
  }
}
