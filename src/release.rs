//! Release commit and tag creation.

use std::path::PathBuf;

use crate::domain::Tag;
use crate::error::Result;
use crate::git::Repository;

/// Stage `pathspecs` and commit them as `release: <project>@<tag>`
pub fn commit<R: Repository + ?Sized>(
    repo: &R,
    pathspecs: &[PathBuf],
    project_name: &str,
    tag: &Tag,
) -> Result<()> {
    repo.add(pathspecs)?;
    repo.commit(&tag.commit_message(project_name))
}

/// Create the annotated release tag, signed when requested
pub fn tag<R: Repository + ?Sized>(repo: &R, tag: &Tag, signed: bool) -> Result<()> {
    repo.create_tag(&tag.name, &tag.release_message(), signed)
}
