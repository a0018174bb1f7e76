//! Build helpers for a bilingual static site: merging English/Hebrew page
//! sources before the site build, and fixing language-switcher placeholders
//! in the generated HTML after it.

pub mod config;
pub mod front_matter;
pub mod lang;
pub mod pages;
pub mod switcher;
pub mod types;
pub mod utils;
