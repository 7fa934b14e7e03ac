//! Writes page contexts where the renderer picks them up

use super::context::UnitSystemContexts;
use super::nav::{ABOUT_SLUG, INDEX_SLUG, NEWS_SLUG};
use crate::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write every page context as `{output_dir}/{system}/{slug}.json`
///
/// Directories are created as needed and existing files are replaced.
/// Returns the written paths in write order.
pub fn write_contexts(contexts: &[UnitSystemContexts], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for system in contexts {
        let dir = output_dir.join(system.unit_system.as_str());
        fs::create_dir_all(&dir)?;

        for page in &system.forecast_pages {
            written.push(write_json(&dir, &page.slug, page)?);
        }
        if let Some(index) = &system.index {
            written.push(write_json(&dir, INDEX_SLUG, index)?);
        }
        written.push(write_json(&dir, ABOUT_SLUG, &system.about)?);
        written.push(write_json(&dir, NEWS_SLUG, &system.news)?);
    }

    info!(files = written.len(), dir = %output_dir.display(), "Wrote page contexts");
    Ok(written)
}

fn write_json<T: Serialize>(dir: &Path, slug: &str, context: &T) -> Result<PathBuf> {
    let path = dir.join(format!("{slug}.json"));
    fs::write(&path, serde_json::to_vec_pretty(context)?)?;
    Ok(path)
}
