//! Package identification - WHAT package, and WHERE it comes from.
//!
//! A PackageSpec is the parsed form of one identifier in an install plan:
//! either a plain registry name (`aiohttp`) or a pip-style VCS entry
//! (`git+https://github.com/user/repo.git@ref#name`).

use std::fmt;

use thiserror::Error;
use url::Url;

/// Error raised while parsing a package identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("empty package identifier")]
    Empty,

    #[error("package identifier `{identifier}` contains whitespace")]
    Whitespace { identifier: String },

    #[error("invalid package name `{name}`")]
    InvalidName { name: String },

    #[error("invalid URL in `{identifier}`")]
    InvalidUrl {
        identifier: String,
        #[source]
        source: url::ParseError,
    },

    #[error("missing package name in `{identifier}`")]
    MissingName { identifier: String },
}

/// Where a package is installed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    /// The default package index, looked up by name.
    Registry,
    /// A git repository, cloned and installed by the backing tool.
    Git { url: Url, reference: GitReference },
}

/// Git reference specification.
///
/// Pip-style identifiers cannot distinguish a branch from a tag or a
/// commit hash, so a pinned `@ref` suffix is stored as an opaque ref.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GitReference {
    /// Default branch (usually main/master)
    #[default]
    DefaultBranch,
    /// Pinned branch, tag, or revision
    Ref(String),
}

/// A parsed package identifier.
///
/// Specs are read-only literals: parsing never mutates its input, and a
/// spec never changes after construction. `Display` renders the canonical
/// authored syntax, and `parse` of that rendering yields an equal spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    name: String,
    source: SourceLocator,
}

impl PackageSpec {
    /// Parse a package identifier string.
    ///
    /// Accepted forms:
    /// - `name` - a registry package
    /// - `git+URL#name` - a git package; the fragment names the package
    /// - `git+URL@ref#name` - same, pinned to a branch/tag/revision
    ///
    /// A git entry without a `#name` fragment takes its name from the
    /// final URL path segment, with any `.git` suffix stripped.
    pub fn parse(identifier: &str) -> Result<Self, SpecError> {
        if identifier.is_empty() {
            return Err(SpecError::Empty);
        }
        if identifier.chars().any(char::is_whitespace) {
            return Err(SpecError::Whitespace {
                identifier: identifier.to_string(),
            });
        }

        if let Some(rest) = identifier.strip_prefix("git+") {
            Self::parse_git(identifier, rest)
        } else {
            Self::parse_registry(identifier)
        }
    }

    fn parse_registry(name: &str) -> Result<Self, SpecError> {
        if !is_valid_name(name) {
            return Err(SpecError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(PackageSpec {
            name: name.to_string(),
            source: SourceLocator::Registry,
        })
    }

    fn parse_git(identifier: &str, rest: &str) -> Result<Self, SpecError> {
        // Split off the `#name` fragment first, then look for an `@ref`
        // suffix on the last path segment. The `@` of any URL userinfo
        // sits before the last `/`, so it is never mistaken for a ref.
        let (url_part, fragment) = match rest.rsplit_once('#') {
            Some((u, f)) => (u, Some(f)),
            None => (rest, None),
        };

        let (url_str, reference) = split_git_ref(url_part);

        let url = Url::parse(url_str).map_err(|source| SpecError::InvalidUrl {
            identifier: identifier.to_string(),
            source,
        })?;

        let name = match fragment {
            Some("") => {
                return Err(SpecError::MissingName {
                    identifier: identifier.to_string(),
                })
            }
            Some(f) => f.to_string(),
            None => derive_name(&url).ok_or_else(|| SpecError::MissingName {
                identifier: identifier.to_string(),
            })?,
        };

        if !is_valid_name(&name) {
            return Err(SpecError::InvalidName { name });
        }

        Ok(PackageSpec {
            name,
            source: SourceLocator::Git { url, reference },
        })
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the source locator.
    pub fn source(&self) -> &SourceLocator {
        &self.source
    }

    /// Check if this is a registry package.
    pub fn is_registry(&self) -> bool {
        matches!(self.source, SourceLocator::Registry)
    }

    /// Check if this is a git package.
    pub fn is_git(&self) -> bool {
        matches!(self.source, SourceLocator::Git { .. })
    }

    /// Get the git reference if this is a git package.
    pub fn git_reference(&self) -> Option<&GitReference> {
        match &self.source {
            SourceLocator::Git { reference, .. } => Some(reference),
            SourceLocator::Registry => None,
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            SourceLocator::Registry => write!(f, "{}", self.name),
            SourceLocator::Git { url, reference } => {
                write!(f, "git+{}", url)?;
                if let GitReference::Ref(r) = reference {
                    write!(f, "@{}", r)?;
                }
                write!(f, "#{}", self.name)
            }
        }
    }
}

/// Split a `@ref` suffix off the last path segment of a raw URL string.
fn split_git_ref(url_part: &str) -> (&str, GitReference) {
    let segment_start = url_part.rfind('/').map(|i| i + 1).unwrap_or(0);
    match url_part[segment_start..].find('@') {
        Some(at) => {
            let split = segment_start + at;
            let reference = &url_part[split + 1..];
            if reference.is_empty() {
                (url_part, GitReference::DefaultBranch)
            } else {
                (&url_part[..split], GitReference::Ref(reference.to_string()))
            }
        }
        None => (url_part, GitReference::DefaultBranch),
    }
}

/// Derive a package name from the final URL path segment.
fn derive_name(url: &Url) -> Option<String> {
    let segment = url
        .path_segments()?
        .filter(|s| !s.is_empty())
        .next_back()?;
    let name = segment.strip_suffix(".git").unwrap_or(segment);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Check a package name against the pip name charset.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
