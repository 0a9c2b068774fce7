//! Main bump workflow orchestration
//!
//! Runs the pipeline in order: resolve the next version, check the repository
//! is safe to release from, rewrite the descriptor and templates, then commit
//! and tag. The repository root is passed in explicitly; nothing here reads
//! the process working directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, StageMode};
use crate::descriptor::ProjectDescriptor;
use crate::domain::{BumpKind, Tag, VersionTriple};
use crate::error::{BumpError, Result};
use crate::git::Repository;
use crate::templates::{self, TemplateChange};
use crate::{release, safety};

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Which version component to bump
    pub kind: BumpKind,

    /// Working tree root; descriptor and template paths are relative to it
    pub root: PathBuf,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Project name from the descriptor
    pub project: String,

    /// Version before the bump
    pub previous: VersionTriple,

    /// Version after the bump
    pub version: VersionTriple,

    /// The tag that was created
    pub tag: Tag,

    /// Whether the tag was GPG-signed
    pub signed: bool,

    /// Per-template replacement counts, in descriptor order. When the
    /// descriptor lists itself, its own entry comes first.
    pub templates: Vec<TemplateChange>,

    /// Non-fatal conditions worth telling the user about
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// Any failure before the files are rewritten leaves both the working tree and
/// git state untouched. A failure while rewriting files can leave some of them
/// already rewritten; the returned error names every file that failed.
pub fn run_bump<R: Repository + ?Sized>(
    args: &BumpWorkflowArgs,
    config: &Config,
    repo: &R,
) -> Result<BumpOutcome> {
    let descriptor_path = args.root.join(&config.descriptor);
    let descriptor = ProjectDescriptor::load(&descriptor_path)?;

    let previous = descriptor.current_version()?;
    let version = previous.bump(args.kind)?;
    let tag = Tag::for_version(&version.to_string());
    let old_tag = Tag::for_version(descriptor.version());

    safety::validate(repo, &tag)?;

    // A descriptor listed under replaceVersion is rewritten by the descriptor
    // task only, so no file has two writers.
    let (listed_self, template_paths): (Vec<String>, Vec<String>) = descriptor
        .replace_version()
        .iter()
        .cloned()
        .partition(|path| args.root.join(path) == descriptor_path);

    let untracked = match config.git.stage {
        StageMode::Touched => untracked_templates(repo, &args.root, &template_paths)?,
        StageMode::All => HashSet::new(),
    };

    tracing::debug!(project = descriptor.name(), %previous, %version, "bumping");

    let updated = descriptor.with_version(&version);
    let new_version = version.to_string();
    let (written, rewritten) = rayon::join(
        || {
            if listed_self.is_empty() {
                updated.write(&descriptor_path).map(|()| None)
            } else {
                updated
                    .write_replacing(&descriptor_path, &old_tag.name, &tag.name)
                    .map(Some)
            }
        },
        || {
            templates::update_templates(
                &args.root,
                descriptor.version(),
                &new_version,
                &template_paths,
            )
        },
    );

    let mut failures = Vec::new();
    let descriptor_change = written.unwrap_or_else(|err| {
        failures.push(err);
        None
    });
    let mut templates = rewritten.unwrap_or_else(|err| {
        failures.push(err);
        Vec::new()
    });
    BumpError::aggregate(failures)?;

    if let Some(replacements) = descriptor_change {
        templates.insert(
            0,
            TemplateChange {
                path: descriptor_path.clone(),
                replacements,
            },
        );
    }

    let mut warnings: Vec<BoundaryWarning> = templates
        .iter()
        .filter(|change| change.replacements == 0)
        .map(|change| BoundaryWarning::TemplateUnchanged {
            path: change.path.clone(),
            tag: old_tag.name.clone(),
        })
        .collect();

    let pathspecs = match config.git.stage {
        StageMode::Touched => {
            let mut pathspecs = vec![config.descriptor.clone()];
            for change in &templates {
                if change.replacements == 0 || change.path == descriptor_path {
                    continue;
                }
                let relative = change
                    .path
                    .strip_prefix(&args.root)
                    .unwrap_or(&change.path)
                    .to_path_buf();
                if untracked.contains(&change.path) {
                    warnings.push(BoundaryWarning::TemplateNotStaged { path: relative });
                } else {
                    pathspecs.push(relative);
                }
            }
            pathspecs
        }
        StageMode::All => {
            warnings.push(BoundaryWarning::UnscopedStaging);
            vec![PathBuf::from(".")]
        }
    };

    release::commit(repo, &pathspecs, descriptor.name(), &tag)?;
    release::tag(repo, &tag, descriptor.sign_git_tag())?;

    Ok(BumpOutcome {
        project: descriptor.name().to_string(),
        previous,
        version,
        tag,
        signed: descriptor.sign_git_tag(),
        templates,
        warnings,
    })
}

/// Paths, joined onto `root`, of the templates git does not track (ignored or
/// untracked).
///
/// Queried before anything is rewritten so a git failure leaves the tree as-is.
fn untracked_templates<R: Repository + ?Sized>(
    repo: &R,
    root: &Path,
    template_paths: &[String],
) -> Result<HashSet<PathBuf>> {
    let mut untracked = HashSet::new();
    let mut seen = HashSet::new();
    for relative in template_paths.iter().map(Path::new) {
        if seen.insert(relative) && !repo.is_tracked(relative)? {
            untracked.insert(root.join(relative));
        }
    }
    Ok(untracked)
}
