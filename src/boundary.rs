use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions noticed during a bump that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A configured template contains no occurrence of the old version tag
    TemplateUnchanged { path: PathBuf, tag: String },
    /// A rewritten template is not tracked by git (ignored or untracked), so it
    /// was left out of the release commit
    TemplateNotStaged { path: PathBuf },
    /// Every pending change in the working tree was staged, not just the bumped files
    UnscopedStaging,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TemplateUnchanged { path, tag } => {
                write!(
                    f,
                    "'{}' does not mention {}; left unchanged",
                    path.display(),
                    tag
                )
            }
            BoundaryWarning::TemplateNotStaged { path } => {
                write!(
                    f,
                    "'{}' was updated but is not tracked by git; not staged",
                    path.display()
                )
            }
            BoundaryWarning::UnscopedStaging => {
                write!(
                    f,
                    "staged all pending changes for the release commit (git.stage = \"all\")"
                )
            }
        }
    }
}
