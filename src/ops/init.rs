//! Implementation of `stevedore init`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::manifest::MANIFEST_NAME;
use crate::util::fs;

/// Starter manifest written by `stevedore init`.
const MANIFEST_TEMPLATE: &str = r#"[plan]
packages = []

# [installer]
# program = "pip"
# args = ["install"]
"#;

/// Create a starter Stevedore.toml in `dir`.
pub fn init_manifest(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_NAME);
    if path.exists() {
        bail!("{} already exists in {}", MANIFEST_NAME, dir.display());
    }

    fs::write_string(&path, MANIFEST_TEMPLATE)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::Manifest;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_parsable_manifest() {
        let tmp = TempDir::new().unwrap();

        let path = init_manifest(tmp.path()).unwrap();

        assert!(path.exists());
        let manifest = Manifest::load(&path).unwrap();
        assert!(manifest.plan.is_empty());
    }

    #[test]
    fn test_init_fails_if_manifest_exists() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(MANIFEST_NAME), "[plan]\npackages = []\n").unwrap();

        let result = init_manifest(tmp.path());

        assert!(result.unwrap_err().to_string().contains("already exists"));
    }
}
