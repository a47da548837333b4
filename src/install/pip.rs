//! Process-backed installer that shells out to a pip-style tool.

use std::path::PathBuf;

use tracing::debug;

use crate::core::manifest::InstallerConfig;
use crate::core::package_spec::PackageSpec;
use crate::install::{InstallError, Installer};
use crate::util::process::{find_executable, ProcessBuilder};
use crate::util::shell::{Shell, Status};

/// Installer that runs an external program once per package.
///
/// The invocation is `<program> <args...> <identifier>`, with output
/// captured. A nonzero exit maps to [`InstallError::Failed`] carrying the
/// tool's stderr; packages installed by earlier calls are left as-is.
pub struct PipInstaller<'a> {
    program: PathBuf,
    args: Vec<String>,
    display_name: String,
    shell: &'a Shell,
}

impl<'a> PipInstaller<'a> {
    /// Locate the configured program on PATH and build an installer.
    pub fn from_config(config: &InstallerConfig, shell: &'a Shell) -> Result<Self, InstallError> {
        let program =
            find_executable(&config.program).ok_or_else(|| InstallError::ProgramNotFound {
                program: config.program.clone(),
            })?;

        Ok(PipInstaller {
            program,
            args: config.args.clone(),
            display_name: config.program.clone(),
            shell,
        })
    }
}

impl Installer for PipInstaller<'_> {
    fn name(&self) -> &str {
        &self.display_name
    }

    fn install(&mut self, spec: &PackageSpec) -> Result<(), InstallError> {
        self.shell.status(Status::Installing, spec);

        let builder = ProcessBuilder::new(&self.program)
            .args(&self.args)
            .arg(spec.to_string());
        debug!("running `{}`", builder.display_command());

        let spinner = self
            .shell
            .spinner(format!("{} {}", self.display_name, spec.name()));

        let result = builder.exec();

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        let output = result.map_err(|source| InstallError::Spawn {
            command: builder.display_command(),
            source,
        })?;

        if !output.status.success() {
            return Err(InstallError::Failed {
                package: spec.to_string(),
                command: builder.display_command(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        self.shell.status(Status::Installed, spec.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::shell::{ColorChoice, Shell};

    fn quiet_shell() -> Shell {
        Shell::from_flags(true, false, ColorChoice::Never)
    }

    fn config(program: &str) -> InstallerConfig {
        InstallerConfig {
            program: program.to_string(),
            args: vec![],
        }
    }

    #[test]
    fn test_from_config_missing_program() {
        let shell = quiet_shell();
        let result = PipInstaller::from_config(&config("no-such-installer-tool"), &shell);

        assert!(matches!(result, Err(InstallError::ProgramNotFound { .. })));
    }

    #[test]
    fn test_install_success_with_real_program() {
        let shell = quiet_shell();
        let mut installer = PipInstaller::from_config(&config("echo"), &shell).unwrap();
        let spec = PackageSpec::parse("aiohttp").unwrap();

        assert!(installer.install(&spec).is_ok());
    }

    #[test]
    fn test_install_failure_maps_exit_code() {
        let shell = quiet_shell();
        let mut installer = PipInstaller::from_config(&config("false"), &shell).unwrap();
        let spec = PackageSpec::parse("aiohttp").unwrap();

        match installer.install(&spec) {
            Err(InstallError::Failed { package, code, .. }) => {
                assert_eq!(package, "aiohttp");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected Failed, got {:?}", other.map(|_| ())),
        }
    }
}
