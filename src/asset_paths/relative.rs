use std::path::Path;

/// Produce a forward-slash path for an asset relative to the asset root.
///
/// Manifests record paths in this form so they read the same on every platform. Paths
/// outside the root are kept as given.
pub fn make_display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}
