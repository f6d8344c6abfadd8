use regex::Regex;

use crate::datasets::DatasetId;

fn asset_reference_ignores() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
            ]
        })
        .as_slice()
}

fn image_extension_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\.(png|jpe?g|webp)$").expect("invalid image regex"))
}

/// Determine whether an image reference in authored content points outside the asset
/// directory.
///
/// External URLs and data URIs are passed through untouched instead of being resolved
/// and embedded.
pub fn should_ignore_asset_reference(value: &str) -> bool {
    asset_reference_ignores()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// Returns `true` when the file name carries one of the supported image extensions.
pub fn has_image_extension(file_name: &str) -> bool {
    image_extension_pattern().is_match(file_name)
}

/// Apply the per-dataset filename filter to an already lowercased file name.
///
/// The checkerboard and synthetic datasets are published under several spellings, so
/// they match on shorter fragments. Every other dataset must appear by identifier.
pub fn matches_dataset(lowered_name: &str, dataset: DatasetId) -> bool {
    match dataset {
        DatasetId::CheckersBoard => {
            lowered_name.contains("checker") || lowered_name.contains("board")
        }
        DatasetId::Synthetic => lowered_name.contains("synthe") || lowered_name.contains("synth"),
        other => lowered_name.contains(other.as_str()),
    }
}
