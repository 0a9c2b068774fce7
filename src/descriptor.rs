//! Project descriptor handling.
//!
//! The descriptor is kept as a raw, order-preserving JSON map so that fields
//! this tool does not understand survive a rewrite untouched. The handful of
//! fields the bump workflow needs are validated through a typed view.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::VersionTriple;
use crate::error::{BumpError, Result};
use crate::templates;

/// Conventional descriptor location relative to the repository root
pub const DEFAULT_DESCRIPTOR_FILE: &str = "project.json";

const VERSION_KEY: &str = "version";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnownFields {
    name: String,
    version: String,
    replace_version: Option<Vec<String>>,
    sign_git_tag: Option<bool>,
}

/// Project metadata loaded from the descriptor file
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
    name: String,
    version: String,
    replace_version: Vec<String>,
    sign_git_tag: bool,
    fields: Map<String, Value>,
}

impl ProjectDescriptor {
    /// Read and validate the descriptor at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| BumpError::io("read", path, e))?;
        Self::parse(path, &source)
    }

    /// Parse descriptor text; `path` is only used for error messages
    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(source)
            .map_err(|e| BumpError::descriptor(path, e.to_string()))?;

        let Value::Object(fields) = value else {
            return Err(BumpError::descriptor(path, "expected a JSON object"));
        };

        let known: KnownFields = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| BumpError::descriptor(path, e.to_string()))?;

        Ok(ProjectDescriptor {
            name: known.name,
            version: known.version,
            replace_version: known.replace_version.unwrap_or_default(),
            sign_git_tag: known.sign_git_tag.unwrap_or(false),
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version string exactly as stored in the descriptor
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parsed form of [`Self::version`]
    pub fn current_version(&self) -> Result<VersionTriple> {
        VersionTriple::parse(&self.version)
    }

    /// Files, relative to the repository root, that mention the version
    pub fn replace_version(&self) -> &[String] {
        &self.replace_version
    }

    pub fn sign_git_tag(&self) -> bool {
        self.sign_git_tag
    }

    /// All descriptor fields in their original order
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Copy of this descriptor with only the `version` field replaced.
    ///
    /// The key keeps its original position in the map.
    pub fn with_version(&self, version: &VersionTriple) -> Self {
        let version = version.to_string();
        let mut fields = self.fields.clone();
        fields.insert(VERSION_KEY.to_string(), Value::String(version.clone()));

        ProjectDescriptor {
            version,
            fields,
            ..self.clone()
        }
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields)?;
        out.push('\n');
        Ok(out)
    }

    /// Serialize and write the descriptor to `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.render(path)?;
        self.write_text(path, content)
    }

    /// Serialize the descriptor, replace every occurrence of `from` with `to`
    /// in the serialized text, then write it to `path`.
    ///
    /// Used when the descriptor also lists itself under `replaceVersion`, so
    /// that the file is written exactly once. Returns the replacement count.
    pub fn write_replacing(&self, path: &Path, from: &str, to: &str) -> Result<usize> {
        let (content, replacements) = templates::substitute(&self.render(path)?, from, to);
        self.write_text(path, content)?;
        Ok(replacements)
    }

    fn render(&self, path: &Path) -> Result<String> {
        self.to_pretty_string()
            .map_err(|e| BumpError::descriptor(path, e.to_string()))
    }

    fn write_text(&self, path: &Path, content: String) -> Result<()> {
        fs::write(path, content).map_err(|e| BumpError::io("write", path, e))?;
        tracing::debug!(path = %path.display(), version = %self.version, "wrote project descriptor");
        Ok(())
    }
}
