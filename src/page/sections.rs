//! HTML fragments for each page section.

use std::fmt::Write as _;

use crate::datasets::{DatasetRecord, UNKNOWN_DATASET_MESSAGE};
use crate::models::{
  PresentationRecord, ProofImageRecord, ShowcaseFrontmatterRecord, TeamMemberRecord,
};
use crate::page::embed::ImageEmbedder;
use crate::results::ResultsView;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());
  for ch in value.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      other => escaped.push(other),
    }
  }
  escaped
}

/// Escape a relative link target, percent-encoding every byte outside the unreserved set
/// so document names like `notes #1?.pdf` stay a single path.
pub fn escape_link(value: &str) -> String {
  let mut encoded = String::with_capacity(value.len());
  for byte in value.trim().bytes() {
    match byte {
      b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => {
        encoded.push(char::from(byte));
      }
      other => {
        let _ = write!(encoded, "%{other:02X}");
      }
    }
  }
  encoded
}

/// Centered logo above the hero, empty when the image is missing.
pub fn render_logo(embedder: &mut ImageEmbedder, stem: Option<&str>, width: u32) -> String {
  let Some(uri) = stem.and_then(|stem| embedder.embed_stem(stem)) else {
    return String::new();
  };
  format!("<div class=\"logo\"><img src=\"{uri}\" width=\"{width}\" alt=\"logo\"></div>\n")
}

/// Hero banner with the page title and tagline over the background image.
pub fn render_hero(embedder: &mut ImageEmbedder, frontmatter: &ShowcaseFrontmatterRecord) -> String {
  let background = frontmatter
    .hero_image
    .as_deref()
    .and_then(|stem| embedder.embed_stem(stem))
    .map(|uri| format!(" style=\"background-image: url('{uri}')\""))
    .unwrap_or_default();

  let tagline = frontmatter
    .tagline
    .as_deref()
    .map(|tagline| format!("\n    <p>{}</p>", escape_html(tagline)))
    .unwrap_or_default();

  format!(
    "<div class=\"hero\"{background}>\n  <div class=\"hero-content\">\n    <h1>{title}</h1>{tagline}\n  </div>\n</div>\n",
    title = escape_html(&frontmatter.title),
  )
}

/// Results section for the uploaded dataset, or a prompt when nothing was uploaded.
pub fn render_results(
  embedder: &mut ImageEmbedder,
  heading: &str,
  view: Option<&ResultsView>,
) -> String {
  let mut html = format!("<section class=\"result\">\n<h2>{}</h2>\n", escape_html(heading));

  match view {
    None => {
      html.push_str("<p>Provide a dataset file (.mat or .npy) to see its results.</p>\n");
    }
    Some(ResultsView::Unknown { .. }) => {
      let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(UNKNOWN_DATASET_MESSAGE));
    }
    Some(ResultsView::Matched(results)) => {
      let _ = writeln!(
        html,
        "<p>Dataset: <strong>{}</strong> (from <code>{}</code>)</p>",
        escape_html(results.dataset.display_name),
        escape_html(&results.upload)
      );

      html.push_str("<h3>Endmember Signatures</h3>\n");
      if let Some(uri) = results.signature.as_ref().and_then(|asset| embedder.embed_asset(asset)) {
        let _ = writeln!(html, "<img src=\"{uri}\" alt=\"endmember signatures\">");
      }

      html.push_str("<h3>Abundance Maps</h3>\n");
      if let Some(uri) = results.abundance.as_ref().and_then(|asset| embedder.embed_asset(asset)) {
        let _ = writeln!(html, "<img src=\"{uri}\" alt=\"abundance maps\">");
      }

      html.push_str("<h3>Metrics</h3>\n");
      html.push_str(&render_metrics_table(results.dataset));
    }
  }

  html.push_str("</section>\n");
  html
}

/// Two-column table of the dataset's metrics, formatted to three decimals.
pub fn render_metrics_table(record: &DatasetRecord) -> String {
  let mut html = String::from("<table class=\"metrics\">\n<tr><th>Metric</th><th>Value</th></tr>\n");
  for (name, value) in record.metrics.rows() {
    let _ = writeln!(html, "<tr><td>{name}</td><td>{value:.3}</td></tr>");
  }
  html.push_str("</table>\n");
  html
}

/// List of presentations with status badges.
///
/// A document link is only emitted when the document is listed in `documents`, the set
/// of files mirrored next to the page.
pub fn render_presentations(presentations: &[PresentationRecord], documents: &[String]) -> String {
  if presentations.is_empty() {
    return String::new();
  }

  let mut html = String::from("<section>\n<h2>Presentations &amp; Accepted Papers</h2>\n");
  for presentation in presentations {
    let link = presentation
      .document
      .as_deref()
      .map(|document| document.trim().replace('\\', "/"))
      .filter(|document| documents.contains(document))
      .map(|document| format!(" &mdash; <a href=\"{}\" target=\"_blank\">PDF</a>", escape_link(&document)))
      .unwrap_or_default();
    let _ = writeln!(
      html,
      "<div class=\"pub-row\"><span class=\"badge\">{}</span>&nbsp; {}{}</div>",
      escape_html(&presentation.status),
      escape_html(&presentation.title),
      link
    );
  }
  html.push_str("</section>\n");
  html
}

/// Grid of captioned proof images; images that cannot be found are skipped.
pub fn render_proofs(embedder: &mut ImageEmbedder, proofs: &[ProofImageRecord]) -> String {
  let figures: Vec<String> = proofs
    .iter()
    .filter_map(|proof| {
      let uri = embedder.embed_reference(&proof.image)?;
      Some(format!(
        "<figure><img src=\"{uri}\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>",
        caption = escape_html(&proof.caption)
      ))
    })
    .collect();

  if figures.is_empty() {
    return String::new();
  }

  format!(
    "<section>\n<h2>Proof of Acceptance / Presentation</h2>\n<div class=\"proofs\">\n{}\n</div>\n</section>\n",
    figures.join("\n")
  )
}

/// Team roster cards.
pub fn render_team(embedder: &mut ImageEmbedder, team: &[TeamMemberRecord]) -> String {
  if team.is_empty() {
    return String::new();
  }

  let mut html = String::from("<section>\n<h2>Project Team</h2>\n<div class=\"team\">\n");
  for member in team {
    let photo = member
      .photo
      .as_deref()
      .and_then(|stem| embedder.embed_stem(stem))
      .map(|uri| format!("<img src=\"{uri}\" alt=\"{}\">", escape_html(&member.name)))
      .unwrap_or_default();
    let profile = member
      .profile_url
      .as_deref()
      .map(|url| {
        format!(
          "<a class=\"team-btn\" href=\"{}\" target=\"_blank\">LinkedIn</a>",
          escape_html(url.trim())
        )
      })
      .unwrap_or_default();

    let _ = writeln!(
      html,
      "<div class=\"team-card\">{photo}<div class=\"team-name\">{}</div><div class=\"team-desc\">{}</div>{profile}</div>",
      escape_html(&member.name),
      escape_html(&member.role)
    );
  }
  html.push_str("</div>\n</section>\n");
  html
}
