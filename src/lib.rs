//! Stevedore - a declarative package installation sequencer
//!
//! This crate provides the core library functionality for Stevedore,
//! including package identifier parsing, ordered install plans, and
//! sequential dispatch against a pluggable installer.

pub mod core;
pub mod install;
pub mod ops;
pub mod util;

/// Test utilities and fakes for Stevedore unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides installer fakes that record calls or fail
/// on command.
#[cfg(test)]
pub mod test_support;

pub use core::{manifest::Manifest, package_spec::PackageSpec, plan::InstallPlan};

pub use install::{InstallError, Installer};
pub use ops::install_all;
