//! Core data structures for Stevedore.
//!
//! This module contains the foundational types used throughout Stevedore:
//! - Package identifiers (name + source locator)
//! - Ordered install plans
//! - The Stevedore.toml manifest

pub mod manifest;
pub mod package_spec;
pub mod plan;

pub use manifest::{find_manifest, InstallerConfig, Manifest, ManifestError, MANIFEST_NAME};
pub use package_spec::{GitReference, PackageSpec, SourceLocator, SpecError};
pub use plan::InstallPlan;
