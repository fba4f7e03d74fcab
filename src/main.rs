// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use oke_kubectl::actions;
use oke_kubectl::config::Config;
use oke_kubectl::installer::SystemCommandRunner;
use oke_kubectl::kubectl::Platform;
use oke_kubectl::transport::ReqwestTransport;
use oke_kubectl::workflow::{self, Outcome};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // RUST_LOG wins; RUNNER_DEBUG=1 is set when a workflow is re-run with debug logging
    let default_level = if std::env::var("RUNNER_DEBUG").as_deref() == Ok("1") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    Ok(finish(provision().await))
}

/// Expose kubectl to later steps and map the run to an exit code
fn finish(result: oke_kubectl::error::Result<Outcome>) -> ExitCode {
    let outcome = result.map_err(anyhow::Error::from).and_then(|outcome| {
        actions::add_path(&outcome.kubectl.dir).with_context(|| {
            format!("Failed to add {} to PATH", outcome.kubectl.dir.display())
        })?;
        Ok(outcome)
    });

    match outcome {
        Ok(outcome) => {
            info!(
                "Cluster {} configured, kubeconfig written to {}",
                outcome.cluster.id,
                outcome.kubeconfig_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            actions::set_failed(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn provision() -> oke_kubectl::error::Result<Outcome> {
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster={}, region={}, private_endpoint={}",
        config.request.cluster_id, config.profile.region, config.request.enable_private_endpoint
    );

    let platform = Platform::current()?;
    let transport = ReqwestTransport::new()?;
    workflow::run(&config, &platform, transport, &SystemCommandRunner).await
}
