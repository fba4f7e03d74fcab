// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig persistence

use kube::config::Kubeconfig;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

use crate::constants::kubeconfig::{DIR, FILE, FILE_MODE};
use crate::error::Result;

pub fn kubeconfig_path(home: &Path) -> PathBuf {
    home.join(DIR).join(FILE)
}

/// Write the kubeconfig to `~/.kube/config`, replacing any previous content
#[instrument(skip(home, kubeconfig))]
pub async fn write_kubeconfig(home: &Path, kubeconfig: &str) -> Result<PathBuf> {
    let dir = home.join(DIR);
    fs::create_dir_all(&dir).await?;

    let path = dir.join(FILE);
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(&path).await?;
    file.write_all(kubeconfig.as_bytes()).await?;
    file.flush().await?;
    drop(file);

    // `mode` only applies on creation; tighten a pre-existing file too
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, std::fs::Permissions::from_mode(FILE_MODE)).await?;
    }

    match describe(kubeconfig) {
        Some(summary) => info!("Wrote kubeconfig to {} ({})", path.display(), summary),
        None => warn!(
            "Wrote kubeconfig to {}, but it could not be parsed as a kubeconfig document",
            path.display()
        ),
    }

    Ok(path)
}

/// Short human readable summary of the current context and API server
fn describe(kubeconfig: &str) -> Option<String> {
    let parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).ok()?;

    let context_name = parsed.current_context.clone().unwrap_or_default();
    let cluster_name = parsed
        .contexts
        .iter()
        .find(|c| c.name == context_name)
        .and_then(|c| c.context.as_ref())
        .map(|c| c.cluster.clone());
    let server = parsed
        .clusters
        .iter()
        .find(|c| Some(&c.name) == cluster_name.as_ref())
        .or_else(|| parsed.clusters.first())
        .and_then(|c| c.cluster.as_ref())
        .and_then(|c| c.server.clone())
        .unwrap_or_else(|| "unknown server".to_string());

    Some(format!("context '{}', server {}", context_name, server))
}
