use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Section, eyre::eyre};
use itertools::{Either, Itertools};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    lang::{Lang, switch_target},
    types::{RelPath, SwitchUrl},
};

/// Counters reported after a fix run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixSummary {
    /// HTML pages visited.
    pub pages: usize,
    /// Pages where at least one placeholder was replaced.
    pub replaced: usize,
}

/// One page's planned substitution.
struct PageFix {
    path: PathBuf,
    rel: RelPath,
    lang: Lang,
    switch_url: SwitchUrl,
}

/// Rewrite language-switcher placeholders under `site_dir`, in place.
///
/// Every `.html` file below the root is visited; the token matching the
/// page's detected language is replaced with the counterpart URL. Files
/// the substitution leaves unchanged are not rewritten.
pub fn fix_at(site_dir: &Path) -> color_eyre::Result<FixSummary> {
    debug!(
        "Fixing language switcher placeholders under {}",
        site_dir.display()
    );

    let ctx = FixCtx {
        site_dir: site_dir.to_path_buf(),
    };
    let summary = Fix::new(ctx).discover()?.plan().apply()?;

    if summary.pages == 0 {
        warn!("No HTML files found under {}", site_dir.display());
    } else {
        info!(
            "Fixed switcher placeholders: {} of {} pages rewritten",
            summary.replaced, summary.pages
        );
    }
    Ok(summary)
}

struct FixCtx {
    site_dir: PathBuf,
}

/// Collect every HTML page under the site root, sorted for deterministic
/// runs. Any traversal error aborts before a single file is touched.
fn discover_pages(ctx: &FixCtx) -> color_eyre::Result<Vec<(PathBuf, RelPath)>> {
    let (entries, errors): (Vec<DirEntry>, Vec<walkdir::Error>) = WalkDir::new(&ctx.site_dir)
        .into_iter()
        .partition_map(|r| match r {
            Ok(v) => Either::Left(v),
            Err(e) => Either::Right(e),
        });

    if !errors.is_empty() {
        return Err(eyre!("Failed to open some directory entries: {errors:?}"));
    }

    let mut pages = Vec::new();
    for entry in entries {
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.path().extension().is_some_and(|ext| ext == "html") {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(&ctx.site_dir)
            .with_note(|| format!("While resolving {}", entry.path().display()))?;
        let rel = RelPath::new(rel.to_path_buf())
            .ok_or_else(|| eyre!("Page path must be relative: {}", entry.path().display()))?;

        pages.push((entry.path().to_path_buf(), rel));
    }

    pages.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pages)
}

fn plan_switches(pages: Vec<(PathBuf, RelPath)>) -> Vec<PageFix> {
    pages
        .into_iter()
        .map(|(path, rel)| {
            let (lang, switch_url) = switch_target(&rel);
            PageFix {
                path,
                rel,
                lang,
                switch_url,
            }
        })
        .collect()
}

fn apply_switches(plans: Vec<PageFix>) -> color_eyre::Result<FixSummary> {
    let mut summary = FixSummary {
        pages: plans.len(),
        replaced: 0,
    };

    for plan in &plans {
        let rel = plan.rel.as_path().display();
        debug!(
            "Detected {} page: {} -> switch URL {}",
            plan.lang, rel, plan.switch_url
        );

        let content = fs::read_to_string(&plan.path)
            .with_note(|| format!("While reading {}", plan.path.display()))?;

        let token = plan.lang.switch_token();
        if !content.contains(token) {
            continue;
        }

        debug!("Replacing {} in {} with {}", token, rel, plan.switch_url);
        let fixed = content.replace(token, plan.switch_url.as_str());
        fs::write(&plan.path, fixed)
            .with_note(|| format!("While writing {}", plan.path.display()))?;
        summary.replaced += 1;
    }

    Ok(summary)
}

trait FixStage {}
/// Fix typestate driver
struct Fix<S: FixStage> {
    ctx: FixCtx,
    state: S,
}

// initial state
impl Fix<()> {
    fn new(ctx: FixCtx) -> Self {
        Self { ctx, state: () }
    }

    fn discover(self) -> color_eyre::Result<Fix<Discovered>> {
        let pages = discover_pages(&self.ctx)?;
        Ok(Fix {
            ctx: self.ctx,
            state: Discovered(pages),
        })
    }
}

struct Discovered(Vec<(PathBuf, RelPath)>);
impl FixStage for Discovered {}
struct Planned(Vec<PageFix>);
impl FixStage for Planned {}
impl FixStage for () {}

impl Fix<Discovered> {
    fn plan(self) -> Fix<Planned> {
        Fix {
            ctx: self.ctx,
            state: Planned(plan_switches(self.state.0)),
        }
    }
}

impl Fix<Planned> {
    fn apply(self) -> color_eyre::Result<FixSummary> {
        apply_switches(self.state.0)
    }
}
