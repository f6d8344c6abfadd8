//! Markdown parsing helpers for the showcase content file.

use gray_matter::{Matter, engine::YAML};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::asset_paths::should_ignore_asset_reference;
use crate::models::{ShowcaseContent, ShowcaseFrontmatterRecord};

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options
}

/// Split a content file into its frontmatter record and markdown body.
///
/// A file without frontmatter yields default metadata. When no title is given the first
/// heading of the body is used instead.
pub fn parse_showcase_markdown(source: &str) -> Result<ShowcaseContent, String> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<serde_yaml::Value>(source)
        .map_err(|err| err.to_string())?;

    let mut frontmatter: ShowcaseFrontmatterRecord = match parsed.data {
        Some(yaml) if !yaml.is_null() => {
            serde_yaml::from_value(yaml).map_err(|err| err.to_string())?
        }
        _ => ShowcaseFrontmatterRecord::default(),
    };

    if frontmatter.title.trim().is_empty() {
        frontmatter.title = extract_first_heading(&parsed.content).unwrap_or_default();
    }

    Ok(ShowcaseContent {
        frontmatter,
        body: parsed.content,
    })
}

/// Render the markdown body to HTML, rewriting local image references.
///
/// `resolve_image` receives every image destination that is not an external URL and
/// returns the `src` to emit. Images it cannot resolve are dropped along with their alt
/// text, so a missing file leaves no broken image behind.
pub fn render_markdown_body<F>(body: &str, mut resolve_image: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let parser = Parser::new_ext(body, markdown_options());
    let mut skipping_image = false;
    let mut events = Vec::new();

    for event in parser {
        if skipping_image {
            if matches!(event, Event::End(TagEnd::Image)) {
                skipping_image = false;
            }
            continue;
        }

        match event {
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) if !should_ignore_asset_reference(&*dest_url) => match resolve_image(&*dest_url) {
                Some(src) => events.push(Event::Start(Tag::Image {
                    link_type,
                    dest_url: CowStr::from(src),
                    title,
                    id,
                })),
                None => skipping_image = true,
            },
            other => events.push(other),
        }
    }

    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    output
}

fn extract_first_heading(body: &str) -> Option<String> {
    let parser = Parser::new_ext(body, markdown_options());
    let mut in_heading = false;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                in_heading = true;
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                if in_heading && !heading_text.trim().is_empty() {
                    return Some(heading_text.trim().to_string());
                }
                in_heading = false;
            }
            Event::Text(text) if in_heading => {
                heading_text.push_str(&text);
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frontmatter_lists() {
        let source = r#"---
title: Showcase
presentations:
  - status: Accepted
    title: Conference
    document: paper.pdf
team:
  - name: Ada
    role: Researcher
---
Body
"#;
        let content = parse_showcase_markdown(source).unwrap();
        assert_eq!(content.frontmatter.title, "Showcase");
        assert_eq!(content.frontmatter.presentations[0].status, "Accepted");
        assert_eq!(
            content.frontmatter.presentations[0].document.as_deref(),
            Some("paper.pdf")
        );
        assert_eq!(content.frontmatter.team[0].name, "Ada");
        assert!(content.frontmatter.team[0].photo.is_none());
        assert!(content.body.contains("Body"));
    }

    #[test]
    fn falls_back_to_first_heading_for_title() {
        let content = parse_showcase_markdown("# Spectral Lab\n\nIntro").unwrap();
        assert_eq!(content.frontmatter.title, "Spectral Lab");
    }

    #[test]
    fn rejects_malformed_frontmatter_records() {
        let source = "---\nteam:\n  - role: Missing name\n---\nBody\n";
        assert!(parse_showcase_markdown(source).is_err());
    }

    #[test]
    fn rewrites_resolved_images() {
        let html = render_markdown_body("![Cube](hsu-cube-data)", |reference| {
            assert_eq!(reference, "hsu-cube-data");
            Some("data:image/png;base64,AAAA".to_string())
        });
        assert!(html.contains(r#"src="data:image/png;base64,AAAA""#));
        assert!(html.contains(r#"alt="Cube""#));
    }

    #[test]
    fn drops_unresolved_images() {
        let html = render_markdown_body("Text\n\n![Missing figure](nothing)\n\nMore", |_| None);
        assert!(!html.contains("<img"));
        assert!(!html.contains("Missing figure"));
        assert!(html.contains("More"));
    }

    #[test]
    fn leaves_external_images_untouched() {
        let html = render_markdown_body("![Remote](https://example.com/a.png)", |_| {
            panic!("external images must not be resolved")
        });
        assert!(html.contains(r#"src="https://example.com/a.png""#));
    }

    #[test]
    fn supports_angle_bracket_destinations_with_spaces() {
        let mut seen = Vec::new();
        render_markdown_body("![Arch](<Architecture diagram attention>)", |reference| {
            seen.push(reference.to_string());
            None
        });
        assert_eq!(seen, vec!["Architecture diagram attention".to_string()]);
    }
}
