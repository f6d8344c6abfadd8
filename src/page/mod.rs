//! Render the showcase as one self-contained HTML document.

pub mod embed;
pub mod sections;
pub mod styles;

use crate::asset_paths::AssetResolver;
use crate::content::render_markdown_body;
use crate::models::ShowcaseContent;
use crate::project::ShowcaseLayout;
use crate::results::ResultsView;

use embed::{EmbedReport, ImageEmbedder};
use sections::{
  escape_html, render_hero, render_logo, render_presentations, render_proofs, render_results,
  render_team,
};
use styles::render_stylesheet;

/// Rendered page plus the record of which images it embedded.
#[derive(Debug, Clone)]
pub struct RenderedPage {
  /// Complete HTML document.
  pub html: String,
  /// Embedded and missing images.
  pub images: EmbedReport,
}

/// Render the page: logo, hero, narrative sections, results, presentations, proofs and
/// team, in that order. `documents` lists the presentation documents available next to
/// the page; only those are linked.
pub fn render_page(
  layout: &ShowcaseLayout,
  content: &ShowcaseContent,
  resolver: &AssetResolver,
  results: Option<&ResultsView>,
  documents: &[String],
) -> RenderedPage {
  let frontmatter = &content.frontmatter;
  let mut embedder = ImageEmbedder::new(resolver);

  let logo = render_logo(&mut embedder, frontmatter.logo.as_deref(), layout.logo_width);
  let hero = render_hero(&mut embedder, frontmatter);
  let body = render_markdown_body(&content.body, |reference| {
    embedder.embed_reference(reference)
  });
  let results_heading = frontmatter.results_heading.as_deref().unwrap_or("Results");
  let results = render_results(&mut embedder, results_heading, results);
  let presentations = render_presentations(&frontmatter.presentations, documents);
  let proofs = render_proofs(&mut embedder, &frontmatter.proofs);
  let team = render_team(&mut embedder, &frontmatter.team);

  let html = format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
{logo}{hero}<main>
<section class="section">
{body}</section>
<hr>
{results}<hr>
{presentations}{proofs}{team}</main>
</body>
</html>
"#,
    title = escape_html(&frontmatter.title),
    styles = render_stylesheet(layout),
  );

  RenderedPage {
    html,
    images: embedder.into_report(),
  }
}
