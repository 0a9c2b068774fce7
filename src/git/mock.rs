use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// A git operation recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Status,
    ListTags(String),
    LsFiles(PathBuf),
    Add(Vec<PathBuf>),
    Commit(String),
    Tag {
        name: String,
        message: String,
        signed: bool,
    },
}

impl GitCall {
    /// Operation name as used by [MockRepository::fail_on]
    pub fn operation(&self) -> &'static str {
        match self {
            GitCall::Status => "status",
            GitCall::ListTags(_) => "tag --list",
            GitCall::LsFiles(_) => "ls-files",
            GitCall::Add(_) => "add",
            GitCall::Commit(_) => "commit",
            GitCall::Tag { .. } => "tag",
        }
    }
}

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    status: String,
    tags: Mutex<Vec<String>>,
    untracked: Vec<PathBuf>,
    calls: Mutex<Vec<GitCall>>,
    failing: Option<&'static str>,
}

impl MockRepository {
    /// Create a clean mock repository without tags
    pub fn new() -> Self {
        MockRepository {
            status: String::new(),
            tags: Mutex::new(Vec::new()),
            untracked: Vec::new(),
            calls: Mutex::new(Vec::new()),
            failing: None,
        }
    }

    /// Report `status` as the porcelain status output
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Add an existing tag
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        lock(&self.tags).push(name.into());
        self
    }

    /// Report `path` as not tracked by git; every other path is tracked
    pub fn with_untracked(mut self, path: impl Into<PathBuf>) -> Self {
        self.untracked.push(path.into());
        self
    }

    /// Make the named operation (see [GitCall::operation]) exit non-zero
    pub fn fail_on(mut self, operation: &'static str) -> Self {
        self.failing = Some(operation);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<GitCall> {
        lock(&self.calls).clone()
    }

    /// Tags currently known, including ones created through the trait
    pub fn tags(&self) -> Vec<String> {
        lock(&self.tags).clone()
    }

    fn record(&self, call: GitCall) -> Result<()> {
        let operation = call.operation();
        lock(&self.calls).push(call);

        if self.failing == Some(operation) {
            return Err(BumpError::Subprocess {
                command: format!("git {}", operation),
                status: "exit status: 128".to_string(),
                stderr: format!("fatal: mock {} failure", operation),
            });
        }

        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn status(&self) -> Result<String> {
        self.record(GitCall::Status)?;
        Ok(self.status.clone())
    }

    fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        self.record(GitCall::ListTags(pattern.to_string()))?;
        Ok(lock(&self.tags)
            .iter()
            .filter(|tag| tag.as_str() == pattern)
            .cloned()
            .collect())
    }

    fn is_tracked(&self, path: &Path) -> Result<bool> {
        self.record(GitCall::LsFiles(path.to_path_buf()))?;
        Ok(!self.untracked.iter().any(|untracked| untracked == path))
    }

    fn add(&self, pathspecs: &[PathBuf]) -> Result<()> {
        self.record(GitCall::Add(pathspecs.to_vec()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(GitCall::Commit(message.to_string()))
    }

    fn create_tag(&self, name: &str, message: &str, signed: bool) -> Result<()> {
        self.record(GitCall::Tag {
            name: name.to_string(),
            message: message.to_string(),
            signed,
        })?;
        lock(&self.tags).push(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_default_is_clean() {
        let repo = MockRepository::default();
        assert!(repo.status().unwrap().is_empty());
        assert!(repo.list_tags("v1.0.0").unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_tags() {
        let repo = MockRepository::new().with_tag("v1.0.0").with_tag("v2.0.0");

        assert_eq!(repo.list_tags("v1.0.0").unwrap(), vec!["v1.0.0".to_string()]);
        assert!(repo.list_tags("v3.0.0").unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new().with_status("?? newfile.txt\n");

        assert_eq!(repo.status().unwrap(), "?? newfile.txt\n");
        repo.add(&[PathBuf::from("project.json")]).unwrap();
        repo.commit("release: demo@v1.0.1").unwrap();
        repo.create_tag("v1.0.1", "release: v1.0.1", true).unwrap();

        assert_eq!(
            repo.calls(),
            vec![
                GitCall::Status,
                GitCall::Add(vec![PathBuf::from("project.json")]),
                GitCall::Commit("release: demo@v1.0.1".to_string()),
                GitCall::Tag {
                    name: "v1.0.1".to_string(),
                    message: "release: v1.0.1".to_string(),
                    signed: true,
                },
            ]
        );
        assert_eq!(repo.tags(), vec!["v1.0.1".to_string()]);
    }

    #[test]
    fn test_mock_repository_untracked_paths() {
        let repo = MockRepository::new().with_untracked("dist/banner.txt");

        assert!(repo.is_tracked(Path::new("README.md")).unwrap());
        assert!(!repo.is_tracked(Path::new("dist/banner.txt")).unwrap());
        assert_eq!(
            repo.calls(),
            vec![
                GitCall::LsFiles(PathBuf::from("README.md")),
                GitCall::LsFiles(PathBuf::from("dist/banner.txt")),
            ]
        );
    }

    #[test]
    fn test_mock_repository_failure() {
        let repo = MockRepository::new().fail_on("commit");

        assert!(repo.add(&[]).is_ok());
        let err = repo.commit("msg").unwrap_err();
        assert!(matches!(err, BumpError::Subprocess { .. }));
        assert!(err.to_string().contains("mock commit failure"));
        // the failing call is still recorded
        assert_eq!(repo.calls().len(), 2);
    }
}
