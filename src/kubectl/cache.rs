// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Version keyed tool cache, laid out like the GitHub Actions runner cache:
//! `<root>/<tool>/<version>/<arch>/` with an `<arch>.complete` marker next to it.

use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ToolCache {
    root: PathBuf,
}

impl ToolCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn version_dir(&self, tool: &str, version: &str) -> PathBuf {
        self.root.join(tool).join(clean_version(version))
    }

    fn entry_dir(&self, tool: &str, version: &str, arch: &str) -> PathBuf {
        self.version_dir(tool, version).join(arch)
    }

    fn marker(&self, tool: &str, version: &str, arch: &str) -> PathBuf {
        self.version_dir(tool, version)
            .join(format!("{}.complete", arch))
    }

    /// Directory of a completed cache entry
    pub async fn find(&self, tool: &str, version: &str, arch: &str) -> Option<PathBuf> {
        let dir = self.entry_dir(tool, version, arch);
        let complete = fs::try_exists(self.marker(tool, version, arch))
            .await
            .unwrap_or(false)
            && fs::try_exists(&dir).await.unwrap_or(false);

        if complete {
            debug!("Tool cache hit: {}", dir.display());
            Some(dir)
        } else {
            debug!("Tool cache miss: {} {} {}", tool, version, arch);
            None
        }
    }

    /// Store a single file as a cache entry and mark it complete.
    ///
    /// Any partial entry left behind by an interrupted run is replaced.
    pub async fn store_file(
        &self,
        contents: &[u8],
        tool: &str,
        file_name: &str,
        version: &str,
        arch: &str,
    ) -> Result<PathBuf> {
        let dir = self.entry_dir(tool, version, arch);
        let marker = self.marker(tool, version, arch);

        if fs::try_exists(&marker).await? {
            fs::remove_file(&marker).await?;
        }
        if fs::try_exists(&dir).await? {
            fs::remove_dir_all(&dir).await?;
        }
        fs::create_dir_all(&dir).await?;

        let partial = dir.join(format!("{}.partial", file_name));
        fs::write(&partial, contents).await?;
        fs::rename(&partial, dir.join(file_name)).await?;

        fs::write(&marker, b"").await?;
        debug!("Cached {} {} at {}", tool, version, dir.display());
        Ok(dir)
    }
}

/// Strip the `v` prefix and surrounding noise from a version string
pub fn clean_version(version: &str) -> String {
    version
        .trim()
        .trim_start_matches('=')
        .trim_start_matches('v')
        .to_string()
}
