use std::collections::BTreeSet;

/// Image extensions tried, in priority order, when resolving a bare file stem.
pub const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Expand a file stem into the candidate file names checked on disk.
///
/// The order follows [`IMAGE_EXTENSIONS`], so when the same stem exists with several
/// extensions the earliest extension wins.
pub fn generate_image_candidates(stem: &str) -> Vec<String> {
    if stem.is_empty() {
        return Vec::new();
    }

    IMAGE_EXTENSIONS
        .iter()
        .map(|extension| format!("{stem}{extension}"))
        .collect()
}

/// Generate candidate paths for an image reference written in authored content.
///
/// A reference can name a file exactly (`figures/HSI.png`) or by stem (`HSI`). The exact
/// path is tried first, followed by the stem expansions of the trimmed reference.
pub fn generate_reference_candidates(reference: &str) -> Vec<String> {
    if reference.is_empty() {
        return Vec::new();
    }

    let mut builder = CandidateBuilder::new(reference);

    builder.add_exact_candidate();
    builder.add_stem_candidates();

    builder.finish()
}

struct CandidateBuilder<'a> {
    trimmed: Option<&'a str>,
    seen: BTreeSet<String>,
    result: Vec<String>,
}

impl<'a> CandidateBuilder<'a> {
    fn new(reference: &'a str) -> Self {
        let without_dot = reference.trim().trim_start_matches("./");
        let trimmed_value = without_dot.trim_matches('/');
        let trimmed = if trimmed_value.is_empty() {
            None
        } else {
            Some(trimmed_value)
        };

        Self {
            trimmed,
            seen: BTreeSet::new(),
            result: Vec::new(),
        }
    }

    fn add_exact_candidate(&mut self) {
        if let Some(path) = self.trimmed {
            self.push(path.to_string());
        }
    }

    fn add_stem_candidates(&mut self) {
        let Some(path) = self.trimmed else {
            return;
        };

        for candidate in generate_image_candidates(path) {
            self.push(candidate);
        }
    }

    fn finish(self) -> Vec<String> {
        self.result
    }

    fn push(&mut self, candidate: String) {
        if self.seen.insert(candidate.clone()) {
            self.result.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_empty_for_blank_stems() {
        assert!(generate_image_candidates("").is_empty());
        assert!(generate_reference_candidates("").is_empty());
        assert!(generate_reference_candidates("/").is_empty());
    }

    #[test]
    fn expands_stems_in_extension_priority_order() {
        assert_eq!(generate_image_candidates("hsu-logo"), vec![
            "hsu-logo.jpg".to_string(),
            "hsu-logo.jpeg".to_string(),
            "hsu-logo.png".to_string(),
            "hsu-logo.webp".to_string(),
        ]);
    }

    #[test]
    fn keeps_spaces_in_stems() {
        let candidates = generate_image_candidates("Architecture diagram attention");
        assert_eq!(candidates[0], "Architecture diagram attention.jpg");
    }

    #[test]
    fn reference_candidates_try_exact_path_first() {
        let candidates = generate_reference_candidates("./figures/HSI");
        assert_eq!(candidates, vec![
            "figures/HSI".to_string(),
            "figures/HSI.jpg".to_string(),
            "figures/HSI.jpeg".to_string(),
            "figures/HSI.png".to_string(),
            "figures/HSI.webp".to_string(),
        ]);
    }
}
