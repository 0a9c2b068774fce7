use crate::error::{BumpError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("version pattern is a valid regex")
    })
}

/// Strict `MAJOR.MINOR.PATCH` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTriple {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string such as "1.2.3".
    ///
    /// Prefixes, pre-release and build metadata are rejected, as are components
    /// too large for a `u64`.
    pub fn parse(input: &str) -> Result<Self> {
        let captures = version_pattern()
            .captures(input)
            .ok_or_else(|| BumpError::parse(input))?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse::<u64>()
                .map_err(|_| BumpError::parse(input))
        };

        Ok(VersionTriple {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Compute the next version for the given bump kind
    pub fn bump(&self, kind: BumpKind) -> Result<Self> {
        let overflow = || BumpError::Overflow {
            version: self.to_string(),
        };

        let next = match kind {
            BumpKind::Major => VersionTriple {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => VersionTriple {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            BumpKind::Patch => VersionTriple {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };

        Ok(next)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTriple {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        VersionTriple::parse(s)
    }
}

/// Which version component to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpError::usage(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = VersionTriple::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_large_components() {
        let v = VersionTriple::parse("4294967296.0.18446744073709551615").unwrap();
        assert_eq!(v.major, 4_294_967_296);
        assert_eq!(v.patch, u64::MAX);
    }

    #[test]
    fn test_version_parse_invalid() {
        for input in [
            "",
            "1.2",
            "1.2.3.4",
            "v1.2.3",
            "1.x.3",
            "1.2.3-beta.1",
            "1.2.3+build",
            " 1.2.3",
            "-1.2.3",
            "18446744073709551616.0.0",
        ] {
            let err = VersionTriple::parse(input).unwrap_err();
            assert!(
                matches!(&err, BumpError::Parse { input: offending } if offending == input),
                "expected parse error for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_version_bump_major() {
        let v = VersionTriple::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Major).unwrap(), VersionTriple::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = VersionTriple::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Minor).unwrap(), VersionTriple::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = VersionTriple::new(1, 2, 3);
        assert_eq!(v.bump(BumpKind::Patch).unwrap(), VersionTriple::new(1, 2, 4));
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = VersionTriple::new(1, u64::MAX, 0);
        assert!(matches!(
            v.bump(BumpKind::Minor),
            Err(BumpError::Overflow { .. })
        ));
        // the overflowing component is reset by a major bump
        assert_eq!(v.bump(BumpKind::Major).unwrap(), VersionTriple::new(2, 0, 0));
    }

    #[test]
    fn test_version_ordering() {
        assert!(VersionTriple::new(1, 10, 0) > VersionTriple::new(1, 9, 99));
        assert!(VersionTriple::new(2, 0, 0) > VersionTriple::new(1, 99, 99));
        assert!(VersionTriple::new(1, 0, 1) > VersionTriple::new(1, 0, 0));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(VersionTriple::new(1, 2, 3).to_string(), "1.2.3");
    }

    #[test]
    fn test_bump_kind_from_str() {
        assert_eq!("major".parse::<BumpKind>().unwrap(), BumpKind::Major);
        assert_eq!("minor".parse::<BumpKind>().unwrap(), BumpKind::Minor);
        assert_eq!("patch".parse::<BumpKind>().unwrap(), BumpKind::Patch);

        let err = "Major".parse::<BumpKind>().unwrap_err();
        assert_eq!(err.to_string(), "invalid version argument: Major");
    }
}
