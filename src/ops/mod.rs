//! High-level operations.
//!
//! This module contains the implementation of Stevedore commands.

pub mod init;
pub mod install;

pub use init::init_manifest;
pub use install::{install_all, InstallReport};
