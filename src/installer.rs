// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One-time OCI CLI bootstrap guarded by a sentinel file.

use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, instrument};

use crate::actions::Group;
use crate::constants::installer::{ARGS, PROGRAM, SENTINEL_CONTENT, SENTINEL_FILE};
use crate::error::{ProvisionError, Result};

/// Runs external programs; a non-zero exit is an error
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> impl Future<Output = Result<()>> + Send;
}

/// Runs commands on the local host with inherited stdio
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let resolved = which::which(program)
            .map_err(|e| ProvisionError::Install(format!("{} not found on PATH: {}", program, e)))?;
        debug!("Running {} {}", resolved.display(), args.join(" "));

        let status = Command::new(&resolved)
            .args(args)
            .status()
            .await
            .map_err(|e| ProvisionError::Install(format!("Failed to execute {}: {}", program, e)))?;

        if !status.success() {
            return Err(ProvisionError::Install(format!(
                "'{} {}' failed with {}",
                program,
                args.join(" "),
                status
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    AlreadyInstalled,
    Installed,
}

pub fn sentinel_path(home: &Path) -> PathBuf {
    home.join(SENTINEL_FILE)
}

/// Install the OCI CLI unless the sentinel says a previous run already did
#[instrument(skip(runner))]
pub async fn ensure_cli_installed<R: CommandRunner>(runner: &R, home: &Path) -> Result<InstallStatus> {
    let sentinel = sentinel_path(home);
    if tokio::fs::try_exists(&sentinel).await? {
        debug!("OCI CLI already installed ({} present)", sentinel.display());
        return Ok(InstallStatus::AlreadyInstalled);
    }

    let _group = Group::start("Installing Oracle Cloud Infrastructure CLI");
    info!("Installing OCI CLI");
    runner.run(PROGRAM, ARGS).await?;

    tokio::fs::write(&sentinel, SENTINEL_CONTENT).await?;
    info!("OCI CLI installed");
    Ok(InstallStatus::Installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingRunner;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_sentinel_present_skips_install() {
        let home = TempDir::new().unwrap();
        std::fs::write(home.path().join(".oci-cli-installed"), "success").unwrap();
        let runner = RecordingRunner::succeeding();

        let status = ensure_cli_installed(&runner, home.path()).await.unwrap();

        assert_eq!(status, InstallStatus::AlreadyInstalled);
        assert!(runner.commands().is_empty());
    }

    #[tokio::test]
    async fn test_install_writes_sentinel() {
        let home = TempDir::new().unwrap();
        let runner = RecordingRunner::succeeding();

        let status = ensure_cli_installed(&runner, home.path()).await.unwrap();

        assert_eq!(status, InstallStatus::Installed);
        assert_eq!(
            runner.commands(),
            vec!["python -m pip install oci-cli".to_string()]
        );
        assert_eq!(
            std::fs::read_to_string(home.path().join(".oci-cli-installed")).unwrap(),
            "success"
        );

        // A second invocation on the same host is a no-op
        let status = ensure_cli_installed(&runner, home.path()).await.unwrap();
        assert_eq!(status, InstallStatus::AlreadyInstalled);
        assert_eq!(runner.commands().len(), 1);
    }

    #[tokio::test]
    async fn test_install_failure_leaves_no_sentinel() {
        let home = TempDir::new().unwrap();
        let runner = RecordingRunner::failing();

        let err = ensure_cli_installed(&runner, home.path()).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Install(_)));
        assert!(!home.path().join(".oci-cli-installed").exists());
    }

    #[tokio::test]
    async fn test_system_runner_missing_program() {
        let err = SystemCommandRunner
            .run("definitely-not-a-real-program-4f1c", &[])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found on PATH"));
    }
}
