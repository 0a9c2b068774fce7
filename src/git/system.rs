use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default executable used for git operations
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Repository backed by the system `git` executable
///
/// Every command runs with `-C <root>`, so the process working directory is
/// never consulted.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: OsString,
    root: PathBuf,
}

impl SystemGit {
    /// Operate on the repository whose working tree is `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SystemGit {
            program: OsString::from(DEFAULT_GIT_PROGRAM),
            root: root.into(),
        }
    }

    /// Use a different git executable
    pub fn with_program(mut self, program: impl AsRef<OsStr>) -> Self {
        self.program = program.as_ref().to_os_string();
        self
    }

    /// Run git with `args`, returning stdout on success.
    ///
    /// A non-zero exit becomes [BumpError::Subprocess] carrying the captured
    /// stderr (or stdout when stderr is empty), folded onto a single line.
    fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        let command = self.describe(&args);

        tracing::debug!(%command, root = %self.root.display(), "running git");

        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.root)
            .args(&args)
            .output()
            .map_err(|source| BumpError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                single_line(&stdout)
            } else {
                single_line(&stderr)
            };

            tracing::debug!(%command, status = %output.status, "git failed");

            return Err(BumpError::Subprocess {
                command,
                status: output.status.to_string(),
                stderr: detail,
            });
        }

        Ok(stdout)
    }

    fn describe(&self, args: &[OsString]) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Repository for SystemGit {
    fn status(&self) -> Result<String> {
        self.run(["status", "--porcelain"])
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let stdout = self.run(["tag", "--list", pattern])?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn is_tracked(&self, path: &Path) -> Result<bool> {
        let args = [OsStr::new("ls-files"), OsStr::new("--"), path.as_os_str()];
        let stdout = self.run(args)?;
        Ok(!stdout.trim().is_empty())
    }

    fn add(&self, pathspecs: &[PathBuf]) -> Result<()> {
        let mut args = vec![OsString::from("add"), OsString::from("--")];
        args.extend(pathspecs.iter().map(|path| path.as_os_str().to_os_string()));
        self.run(args)?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(["commit", "-m", message])?;
        Ok(())
    }

    fn create_tag(&self, name: &str, message: &str, signed: bool) -> Result<()> {
        let mut args = vec!["tag", "-a"];
        if signed {
            args.push("-s");
        }
        args.extend(["-m", message, name]);
        self.run(args)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_folds_output() {
        assert_eq!(
            single_line("error: pathspec 'x' did not match\n\nhint: check\n"),
            "error: pathspec 'x' did not match hint: check"
        );
    }

    #[test]
    fn test_describe_includes_program_and_args() {
        let git = SystemGit::new("/tmp/repo");
        let args = vec![OsString::from("tag"), OsString::from("--list")];
        assert_eq!(git.describe(&args), "git tag --list");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let git = SystemGit::new(".").with_program("/nonexistent/bin/git-does-not-exist");
        let err = git.status().unwrap_err();
        assert!(matches!(err, BumpError::Spawn { .. }));
        assert!(err.to_string().contains("git-does-not-exist"));
    }
}
