use std::path::Path;

/// Get file extension as a lowercase string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Check if a path has one of the given extensions
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[&str]) -> bool {
    get_extension(path).map_or(false, |e| extensions.contains(&e.as_str()))
}
