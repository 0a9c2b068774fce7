//! Pre-flight checks run before anything is written.

use crate::domain::Tag;
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Refuse to bump unless the working tree is clean and `tag` is unused.
///
/// The dirty-tree check runs first since it is the more actionable failure.
pub fn validate<R: Repository + ?Sized>(repo: &R, tag: &Tag) -> Result<()> {
    let status = repo.status()?;
    if !status.is_empty() {
        tracing::debug!(%status, "working tree is dirty");
        return Err(BumpError::DirtyWorkingTree);
    }

    if repo.list_tags(&tag.name)?.iter().any(|existing| *existing == tag.name) {
        return Err(BumpError::VersionExists(tag.name.clone()));
    }

    Ok(())
}
