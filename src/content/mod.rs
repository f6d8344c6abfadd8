//! Loading and rendering of the authored page content.

mod markdown;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ShowcaseContent;

pub use markdown::{parse_showcase_markdown, render_markdown_body};

/// Page content compiled into the binary, used when no content file is present.
pub const DEFAULT_CONTENT: &str = include_str!("../../content/showcase.md");

/// Errors raised while loading the content file.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Failed to read the content file from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The frontmatter block could not be parsed.
    #[error("failed to parse frontmatter in {}: {message}", .path.display())]
    Frontmatter {
        /// Path that caused the error.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Load the content file, falling back to the compiled-in page when it does not exist.
pub fn load_content(path: &Path) -> Result<ShowcaseContent, ContentError> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!(
                "content file {} not found, using built-in content",
                path.display()
            );
            DEFAULT_CONTENT.to_string()
        }
        Err(err) => {
            return Err(ContentError::Io {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    parse_showcase_markdown(&source).map_err(|message| ContentError::Frontmatter {
        path: path.to_path_buf(),
        message,
    })
}
