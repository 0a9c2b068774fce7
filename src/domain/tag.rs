use std::fmt;

const TAG_PREFIX: char = 'v';

/// Represents a release tag such as "v1.2.3"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Tag name for a version: used as-is when it already starts with `v`,
    /// otherwise `v` is prepended.
    pub fn for_version(version: &str) -> Self {
        let name = if version.starts_with(TAG_PREFIX) {
            version.to_string()
        } else {
            format!("{}{}", TAG_PREFIX, version)
        };

        Tag { name }
    }

    /// Annotation message of the release tag
    pub fn release_message(&self) -> String {
        format!("release: {}", self.name)
    }

    /// Message of the release commit for a project
    pub fn commit_message(&self, project_name: &str) -> String {
        format!("release: {}@{}", project_name, self.name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
