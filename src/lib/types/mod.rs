//! Shared data types for the build helpers.
//! Implemented as newtypes to enforce invariants.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Path of a page relative to the site root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RelPath(PathBuf);

impl RelPath {
    pub fn new(p: PathBuf) -> Option<Self> {
        if p.is_absolute() { None } else { Some(Self(p)) }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

/// Site-absolute URL of the counterpart-language page: always starts with
/// `/`, uses forward slashes, and never ends in an `index.html` segment.
///
/// Only ever constructed by [`crate::lang::switch_target`], which upholds
/// those invariants.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwitchUrl(String);

impl SwitchUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SwitchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
