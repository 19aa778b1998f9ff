//! Feature file discovery.
//!
//! Walks the features directory recursively and returns every `.feature`
//! file in sorted order. Ordering matters: the global file counter and with
//! it the generated class names depend on a stable traversal.

use crate::generate::GenerateError;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Enumerate the feature files under `root`, sorted for deterministic
/// output.
///
/// # Errors
///
/// Returns an error when the directory cannot be traversed or an entry's
/// path is not valid UTF-8.
pub fn feature_files(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, GenerateError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| GenerateError::Discover {
            path: root.to_owned(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|path| GenerateError::NonUtf8Path { path })?;
        if path.extension() == Some("feature") {
            files.push(path);
        }
    }
    Ok(files)
}
