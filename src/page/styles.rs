//! Stylesheet embedded in the page head.

use crate::project::ShowcaseLayout;

const BASE_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #0e1117; color: #e5e7eb; }
main { max-width: 1100px; margin: 0 auto; padding: 0 24px 48px; }
hr { border: 0; border-top: 1px solid #1f2937; margin: 32px 0; }
.logo { display: flex; justify-content: center; margin: 20px 0; }
.hero { height: 80vh; background: #111827 center/cover no-repeat; display: flex; align-items: center; justify-content: center; }
.hero-content { color: white; text-align: center; }
.hero-content h1 { font-size: 4rem; margin: 0; }
.hero-content p { font-size: 1.5rem; }
.badge { padding: 4px 10px; border-radius: 12px; background: #2563eb; color: white; font-size: 0.75rem; }
.pub-row { padding: 10px; border: 1px solid #1f2937; border-radius: 8px; margin-bottom: 8px; }
.error { padding: 12px 16px; border-radius: 8px; background: #3b1219; color: #fca5a5; }
.metrics { border-collapse: collapse; margin: 12px 0; }
.metrics th, .metrics td { border: 1px solid #1f2937; padding: 6px 14px; text-align: left; }
.proofs { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }
.proofs figure { margin: 0; }
.proofs img { width: 100%; }
.proofs figcaption { text-align: center; font-size: 0.9rem; color: #9ca3af; }
.team { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.team-card { background: #111827; border-radius: 16px; padding: 20px; text-align: center; }
.team-card img { border-radius: 12px; width: 140px; height: 140px; object-fit: cover; margin-bottom: 12px; }
.team-name { font-size: 1.2rem; font-weight: 600; color: white; }
.team-desc { font-size: 0.95rem; color: #cbd5f5; margin: 8px 0 12px 0; }
.team-btn { display: inline-block; padding: 6px 16px; border-radius: 8px; background: #1d4ed8; color: white; text-decoration: none; font-size: 0.9rem; }
"#;

/// Build the page stylesheet, sizing images according to the layout.
pub fn render_stylesheet(layout: &ShowcaseLayout) -> String {
  format!(
    "{BASE_STYLES}.section img {{ display: block; margin: 16px auto; max-width: min(100%, {section}px); }}\n.result img {{ display: block; margin: 16px auto; max-width: min(100%, {result}px); }}\n",
    section = layout.section_image_width,
    result = layout.result_image_width,
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::ShowcaseConfig;

  #[test]
  fn sizes_images_from_layout() {
    let mut config = ShowcaseConfig::default();
    config.section_image_width = 640;
    let css = render_stylesheet(&config.into_layout());

    assert!(css.contains(".section img { display: block; margin: 16px auto; max-width: min(100%, 640px); }"));
    assert!(css.contains("max-width: min(100%, 800px)"));
    assert!(css.contains(".hero {"));
  }
}
