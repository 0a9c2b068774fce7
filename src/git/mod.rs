//! Version-control abstraction layer
//!
//! The bump workflow only needs a handful of git operations. They are
//! expressed through the [Repository] trait so the workflow can run against
//! the real `git` executable or against a recording mock in tests.
//!
//! - [system::SystemGit]: shells out to the `git` executable
//! - [mock::MockRepository]: in-memory implementation that records calls
//!
//! ```rust
//! # use bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> bump::Result<()> {
//! if repo.status()?.is_empty() && repo.list_tags("v1.0.0")?.is_empty() {
//!     repo.commit("release: demo@v1.0.0")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::{GitCall, MockRepository};
pub use system::SystemGit;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Git operations used by the bump workflow
///
/// Implementations are invoked strictly sequentially; each call observes the
/// working tree left behind by the previous one.
pub trait Repository: Send + Sync {
    /// Machine-readable working tree status (`git status --porcelain`).
    ///
    /// Empty output means the tree is clean.
    fn status(&self) -> Result<String>;

    /// Tags matching `pattern` (`git tag --list <pattern>`)
    fn list_tags(&self, pattern: &str) -> Result<Vec<String>>;

    /// Whether git tracks `path`, relative to the repository root
    /// (`git ls-files -- <path>` is non-empty).
    ///
    /// Ignored and untracked files report `false`.
    fn is_tracked(&self, path: &Path) -> Result<bool>;

    /// Stage the given pathspecs, relative to the repository root
    fn add(&self, pathspecs: &[PathBuf]) -> Result<()>;

    /// Record a commit of the staged changes
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag on HEAD, GPG-signed when `signed` is true
    fn create_tag(&self, name: &str, message: &str, signed: bool) -> Result<()>;
}
