// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! End to end provisioning: install the CLI, fetch credentials, resolve
//! kubectl and write the kubeconfig.

use std::path::PathBuf;
use tracing::{info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::installer::{ensure_cli_installed, CommandRunner, InstallStatus};
use crate::kubeconfig::write_kubeconfig;
use crate::kubectl::{provision_kubectl, Platform, ProvisionedTool, ToolCache};
use crate::oci::{ClusterDescriptor, ContainerEngineClient};
use crate::resolver::fetch_credentials;
use crate::transport::HttpService;

/// Everything a successful run produced. The caller decides how to expose
/// `kubectl.dir` to subsequent steps.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub cli: InstallStatus,
    pub cluster: ClusterDescriptor,
    pub kubectl: ProvisionedTool,
    pub kubeconfig_path: PathBuf,
}

#[instrument(skip_all, fields(cluster = %config.request.cluster_id, platform = %platform))]
pub async fn run<S, R>(config: &Config, platform: &Platform, transport: S, runner: &R) -> Result<Outcome>
where
    S: HttpService,
    R: CommandRunner,
{
    let cli = ensure_cli_installed(runner, &config.home_dir).await?;

    let client = ContainerEngineClient::new(
        transport.clone(),
        config.api_endpoint.clone(),
        &config.profile,
    )?;
    let (kubeconfig, cluster) = fetch_credentials(&client, &config.request).await?;

    let cache = ToolCache::new(&config.tool_cache_dir);
    let kubectl = provision_kubectl(
        &transport,
        &cache,
        &config.download_base_url,
        platform,
        &cluster.kubernetes_version,
    )
    .await?;

    let kubeconfig_path = write_kubeconfig(&config.home_dir, &kubeconfig).await?;

    info!(
        "kubectl {} available at {}",
        cluster.kubernetes_version,
        kubectl.binary.display()
    );

    Ok(Outcome {
        cli,
        cluster,
        kubectl,
        kubeconfig_path,
    })
}
