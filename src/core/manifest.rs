//! Stevedore.toml manifest parsing and schema.
//!
//! The manifest is the declarative authoring surface: an ordered package
//! list plus optional installer configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::core::package_spec::PackageSpec;
use crate::core::plan::InstallPlan;
use crate::util::fs;

/// Canonical manifest file name.
pub const MANIFEST_NAME: &str = "Stevedore.toml";

/// Error locating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("no Stevedore.toml found in `{}` or any parent directory", .dir.display())]
    NotFound { dir: PathBuf },
}

/// Raw TOML schema, validated into [`Manifest`].
#[derive(Debug, Deserialize)]
struct ManifestSchema {
    plan: PlanSchema,
    #[serde(default)]
    installer: InstallerSchema,
}

#[derive(Debug, Deserialize)]
struct PlanSchema {
    #[serde(default)]
    packages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct InstallerSchema {
    program: Option<String>,
    args: Option<Vec<String>>,
}

/// The backing tool invoked per package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    /// Program name, looked up on PATH.
    pub program: String,

    /// Arguments placed before the package identifier.
    pub args: Vec<String>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        InstallerConfig {
            program: "pip".to_string(),
            args: vec!["install".to_string()],
        }
    }
}

/// The parsed Stevedore.toml manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Packages to install, in declaration order.
    pub plan: InstallPlan,

    /// Installer configuration.
    pub installer: InstallerConfig,
}

impl Manifest {
    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse manifest content, validating every package identifier.
    pub fn parse(content: &str) -> Result<Self> {
        let schema: ManifestSchema =
            toml::from_str(content).context("invalid manifest syntax")?;

        let mut packages = Vec::with_capacity(schema.plan.packages.len());
        for entry in &schema.plan.packages {
            let spec = PackageSpec::parse(entry)
                .with_context(|| format!("invalid package identifier `{}`", entry))?;
            packages.push(spec);
        }

        let defaults = InstallerConfig::default();
        let installer = InstallerConfig {
            program: schema.installer.program.unwrap_or(defaults.program),
            args: schema.installer.args.unwrap_or(defaults.args),
        };

        Ok(Manifest {
            plan: InstallPlan::new(packages),
            installer,
        })
    }
}

/// Find the manifest starting from `dir` and searching upward.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = dir.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: dir.to_path_buf(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse(
            r#"
[plan]
packages = ["aiohttp", "flask"]
"#,
        )
        .unwrap();

        assert_eq!(manifest.plan.len(), 2);
        assert_eq!(manifest.plan.packages()[0].name(), "aiohttp");
        assert_eq!(manifest.installer, InstallerConfig::default());
    }

    #[test]
    fn test_parse_empty_plan() {
        let manifest = Manifest::parse("[plan]\npackages = []\n").unwrap();

        assert!(manifest.plan.is_empty());
    }

    #[test]
    fn test_parse_custom_installer() {
        let manifest = Manifest::parse(
            r#"
[plan]
packages = ["attrs"]

[installer]
program = "uv"
args = ["pip", "install"]
"#,
        )
        .unwrap();

        assert_eq!(manifest.installer.program, "uv");
        assert_eq!(manifest.installer.args, ["pip", "install"]);
    }

    #[test]
    fn test_parse_git_identifier() {
        let manifest = Manifest::parse(
            r#"
[plan]
packages = ["git+https://github.com/Tinche/cattrs.git#cattrs"]
"#,
        )
        .unwrap();

        assert!(manifest.plan.packages()[0].is_git());
    }

    #[test]
    fn test_parse_rejects_invalid_identifier() {
        let result = Manifest::parse("[plan]\npackages = [\"not a name\"]\n");

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("invalid package identifier `not a name`"));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(Manifest::parse("[plan").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();

        assert!(Manifest::load(&tmp.path().join(MANIFEST_NAME)).is_err());
    }

    #[test]
    fn test_find_manifest_walks_upward() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest, "[plan]\npackages = []\n").unwrap();

        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_manifest(&nested).unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_not_found() {
        let tmp = TempDir::new().unwrap();

        let result = find_manifest(tmp.path());
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }
}
