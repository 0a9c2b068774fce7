//! Rewrites the version tag inside the files listed under `replaceVersion`.
//!
//! Substitution is plain text: every occurrence of the old tag (`v1.2.3`) is
//! replaced, wherever it appears and whatever the file format.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::domain::Tag;
use crate::error::{BumpError, Result};

/// Outcome of rewriting a single template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateChange {
    pub path: PathBuf,
    pub replacements: usize,
}

/// Replace the old version tag with the new one in every listed file.
///
/// Paths are resolved against `root` and processed in parallel; duplicate
/// entries are handled once. Failures from all files are collected and
/// reported together. Files already rewritten are not restored.
pub fn update_templates(
    root: &Path,
    old_version: &str,
    new_version: &str,
    paths: &[String],
) -> Result<Vec<TemplateChange>> {
    let from = Tag::for_version(old_version).name;
    let to = Tag::for_version(new_version).name;

    let mut seen = HashSet::new();
    let targets: Vec<PathBuf> = paths
        .iter()
        .map(|relative| root.join(relative))
        .filter(|path| seen.insert(path.clone()))
        .collect();

    let results: Vec<Result<TemplateChange>> = targets
        .par_iter()
        .map(|path| update_template(path, &from, &to))
        .collect();

    let mut changes = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(change) => changes.push(change),
            Err(err) => failures.push(err),
        }
    }

    BumpError::aggregate(failures)?;
    Ok(changes)
}

/// Rewrite one file, replacing every occurrence of `from` with `to`.
///
/// The file is only written back when something was replaced.
pub fn update_template(path: &Path, from: &str, to: &str) -> Result<TemplateChange> {
    let content = fs::read_to_string(path).map_err(|e| BumpError::io("read", path, e))?;
    let (rewritten, replacements) = substitute(&content, from, to);

    if replacements > 0 {
        fs::write(path, rewritten).map_err(|e| BumpError::io("write", path, e))?;
    }

    tracing::debug!(path = %path.display(), replacements, "updated template");

    Ok(TemplateChange {
        path: path.to_path_buf(),
        replacements,
    })
}

/// Replace every occurrence of `from` in `content`, returning the new text
/// and the number of replacements
pub fn substitute(content: &str, from: &str, to: &str) -> (String, usize) {
    let replacements = content.matches(from).count();
    if replacements == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(from, to), replacements)
}
