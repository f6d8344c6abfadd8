//! Data structures describing page content and the build manifest.

use serde::{Deserialize, Serialize};

use crate::asset_paths::AssetKind;
use crate::datasets::DatasetId;

/// Frontmatter fields of the showcase content file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseFrontmatterRecord {
  /// Page title rendered in the hero banner and the document title.
  pub title: String,
  /// Short line rendered below the title.
  pub tagline: Option<String>,
  /// Image stem of the logo shown above the hero.
  pub logo: Option<String>,
  /// Image stem of the hero background.
  pub hero_image: Option<String>,
  /// Heading of the results section.
  pub results_heading: Option<String>,
  /// Presentations and accepted papers.
  pub presentations: Vec<PresentationRecord>,
  /// Captioned images proving acceptance or presentation.
  pub proofs: Vec<ProofImageRecord>,
  /// Team roster.
  pub team: Vec<TeamMemberRecord>,
}

/// A talk or accepted paper listed on the page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresentationRecord {
  /// Badge text such as "Accepted" or "Presented".
  pub status: String,
  /// Venue and title line.
  pub title: String,
  /// Document path relative to the asset directory.
  pub document: Option<String>,
}

/// Captioned proof image.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProofImageRecord {
  /// Image stem or relative path.
  pub image: String,
  /// Caption rendered below the image.
  pub caption: String,
}

/// Member of the project team.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamMemberRecord {
  /// Image stem of the member's photo.
  pub photo: Option<String>,
  /// Full name.
  pub name: String,
  /// Role and responsibilities.
  pub role: String,
  /// Link to the member's public profile.
  pub profile_url: Option<String>,
}

/// Parsed content file: frontmatter plus the markdown body.
#[derive(Debug, Clone)]
pub struct ShowcaseContent {
  /// Structured page metadata.
  pub frontmatter: ShowcaseFrontmatterRecord,
  /// Markdown body holding the narrative sections.
  pub body: String,
}

/// Result image recorded in the build manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResultImageSummary {
  /// Kind of result image.
  pub kind: AssetKind,
  /// Path relative to the asset directory, absent when no file matched.
  pub path: Option<String>,
}

/// Serializable summary of a build written next to the rendered page.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ShowcaseManifestSummary {
  /// Uploaded dataset filename, when one was supplied.
  pub upload: Option<String>,
  /// Dataset the upload resolved to.
  pub dataset: Option<DatasetId>,
  /// Result images for the matched dataset.
  pub result_images: Vec<ResultImageSummary>,
  /// Images embedded into the page, relative to the asset directory.
  pub embedded_images: Vec<String>,
  /// Image references that could not be resolved.
  pub missing_images: Vec<String>,
  /// Documents copied next to the page.
  pub documents: Vec<String>,
}
