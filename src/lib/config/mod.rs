// Directory the site generator writes its output into.
pub const SITE_DIR: &str = "_site";

// Path convention of the generated tree: English pages at the root, Hebrew
// pages under this prefix.
pub const HEBREW_PREFIX: &str = "he/";

/// Placeholder carried by English pages, pointing at the Hebrew counterpart.
pub const TOKEN_HE: &str = "LANG_SWITCH_HE";
/// Placeholder carried by Hebrew pages, pointing at the English counterpart.
pub const TOKEN_EN: &str = "LANG_SWITCH_EN";

/// Directory index file name, stripped from the end of switch URLs.
pub const INDEX_FILE: &str = "index.html";

// Collections whose combined pages are regenerated by the merge step.
pub const COLLECTIONS: &[&str] = &["_places", "_posts"];

/// Subdirectory of a collection holding the author-maintained sources.
pub const CONTENT_DIR: &str = "_content";

/// File-stem suffix marking a Hebrew companion source (`about-he.md`).
pub const HEBREW_SUFFIX: &str = "-he";

/// Line separating the English and Hebrew bodies of a combined page.
pub const HEBREW_SEPARATOR: &str = "%%%HEBREW%%%";
