//! Page language detection and switch-URL derivation.
//!
//! The generated site keeps English pages at the root and Hebrew pages under
//! `he/`, so a page's language and the URL of its counterpart both follow
//! from its path relative to the site root.

use std::fmt;

use crate::{
    config::{HEBREW_PREFIX, TOKEN_EN, TOKEN_HE},
    types::{RelPath, SwitchUrl},
    utils::{strip_index_segment, to_forward_slashes},
};

/// Language of a generated page, by path convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    En,
    He,
}

impl Lang {
    /// Short language code, as used in diagnostics.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::He => "he",
        }
    }

    /// The placeholder token pages of this language carry. It names the
    /// *other* language, since that is where the switcher leads.
    pub fn switch_token(self) -> &'static str {
        match self {
            Lang::En => TOKEN_HE,
            Lang::He => TOKEN_EN,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Detect a page's language and compute its counterpart URL from the page's
/// path relative to the site root.
pub fn switch_target(rel: &RelPath) -> (Lang, SwitchUrl) {
    let path = to_forward_slashes(rel.as_path());
    let (lang, url) = match path.strip_prefix(HEBREW_PREFIX) {
        Some(rest) => (Lang::He, format!("/{rest}")),
        None => (Lang::En, format!("/{HEBREW_PREFIX}{path}")),
    };
    let url = strip_index_segment(&url).to_string();
    (lang, SwitchUrl::new(url))
}

#[cfg(test)]
mod tests;
