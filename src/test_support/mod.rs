//! Test utilities and fakes for Stevedore unit tests.

pub mod installers;

pub use installers::{FailingInstaller, RecordingInstaller};
