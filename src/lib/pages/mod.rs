use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use tracing::{debug, info, warn};

use crate::{
    config::{COLLECTIONS, CONTENT_DIR, HEBREW_SEPARATOR, HEBREW_SUFFIX},
    front_matter,
};

/// Counters reported after a merge run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Collections whose pages were regenerated.
    pub collections: usize,
    /// Combined pages written.
    pub pages: usize,
}

/// Regenerate the combined bilingual pages of every collection under `root`.
///
/// Each collection keeps its sources in a `_content/` subdirectory and its
/// generated pages at the top level. `<base>.md` is the English source; an
/// optional `<base>-he.md` companion supplies the Hebrew body. The combined
/// page carries the English front matter and both bodies, divided by the
/// `%%%HEBREW%%%` separator line. Collections without sources are skipped.
pub fn merge_at(root: &Path) -> color_eyre::Result<MergeSummary> {
    debug!("Starting bilingual page merge under {}", root.display());

    let mut summary = MergeSummary::default();
    for &collection in COLLECTIONS {
        let dest_dir = root.join(collection);
        let source_dir = dest_dir.join(CONTENT_DIR);

        if !source_dir.is_dir() {
            warn!(
                "Skipped collection {}: source directory {} not found",
                collection,
                source_dir.display()
            );
            continue;
        }

        debug!("Processing collection {}", collection);
        summary.collections += 1;
        summary.pages += merge_collection(&source_dir, &dest_dir)
            .with_note(|| format!("While merging collection {collection}"))?;
    }

    info!(
        "Bilingual page merge complete: {} pages across {} collections",
        summary.pages, summary.collections
    );
    Ok(summary)
}

fn merge_collection(source_dir: &Path, dest_dir: &Path) -> color_eyre::Result<usize> {
    clear_generated(dest_dir)?;

    let mut written = 0;
    for source in markdown_files(source_dir)? {
        let Some(base) = source.file_stem().and_then(|stem| stem.to_str()) else {
            return Err(eyre!("Non-UTF-8 file name: {}", source.display()));
        };
        if base.ends_with(HEBREW_SUFFIX) {
            continue;
        }

        let combined = combine_page(source_dir, base)?;
        let dest = dest_dir.join(format!("{base}.md"));
        fs::write(&dest, combined).with_note(|| format!("While writing {}", dest.display()))?;
        debug!("Generated {}", dest.display());
        written += 1;
    }
    Ok(written)
}

/// Delete previous merge output, so pages removed from the sources do not
/// linger in the collection.
fn clear_generated(dest_dir: &Path) -> color_eyre::Result<()> {
    for stale in markdown_files(dest_dir)? {
        fs::remove_file(&stale).with_note(|| format!("While deleting {}", stale.display()))?;
    }
    Ok(())
}

/// Markdown files directly inside `dir`, sorted. Non-recursive: the sources
/// under `_content/` must survive the stale sweep of their collection.
fn markdown_files(dir: &Path) -> color_eyre::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_note(|| format!("While listing {}", dir.display()))? {
        let path = entry
            .with_note(|| format!("While listing {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn combine_page(source_dir: &Path, base: &str) -> color_eyre::Result<String> {
    let en_path = source_dir.join(format!("{base}.md"));
    let en = fs::read_to_string(&en_path)
        .with_note(|| format!("While reading {}", en_path.display()))?;
    let Some((front, body_en)) = front_matter::split(&en) else {
        return Err(eyre!("Missing front matter in {}", en_path.display()));
    };

    let he_path = source_dir.join(format!("{base}{HEBREW_SUFFIX}.md"));
    let body_he = if he_path.is_file() {
        let he = fs::read_to_string(&he_path)
            .with_note(|| format!("While reading {}", he_path.display()))?;
        match front_matter::split(&he) {
            // The companion's own front matter is discarded; the English
            // page's applies to the combined page.
            Some((_, body)) => body.to_string(),
            None => he,
        }
    } else {
        String::new()
    };

    Ok(format!(
        "---\n{}\n---\n{}\n\n{}\n\n{}\n",
        front.trim(),
        body_en.trim(),
        HEBREW_SEPARATOR,
        body_he.trim()
    ))
}
