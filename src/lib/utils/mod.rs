use std::path::Path;

use crate::config::INDEX_FILE;

/// Render a path as a URL-style string, with separators normalized to `/`.
pub fn to_forward_slashes(p: &Path) -> String {
    p.to_string_lossy().replace('\\', "/")
}

/// Strip a trailing `index.html` segment from a URL, keeping the slash that
/// preceded it: `/foo/index.html` becomes `/foo/`. Only a whole final
/// segment is stripped; `/foo/xindex.html` and interior occurrences are
/// left alone.
pub fn strip_index_segment(url: &str) -> &str {
    if url == INDEX_FILE {
        return "";
    }
    if let Some(parent) = url.strip_suffix(INDEX_FILE) {
        if parent.ends_with('/') {
            return parent;
        }
    }
    url
}
