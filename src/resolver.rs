// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster resolution, connectivity decision and kubeconfig retrieval.

use tracing::{info, instrument, warn};

use crate::config::ProvisioningRequest;
use crate::error::{ProvisionError, Result};
use crate::oci::{ClusterDescriptor, ContainerEngineClient, Endpoint};
use crate::transport::HttpService;

/// Decide which endpoint the kubeconfig should target.
///
/// Only proceeds when the cluster has a public endpoint or the caller opted
/// into private endpoint mode; the caller's preference picks the variant.
pub fn connectivity_decision(
    descriptor: &ClusterDescriptor,
    request: &ProvisioningRequest,
) -> Result<Endpoint> {
    if request.enable_private_endpoint {
        if !descriptor.private_endpoint_enabled {
            warn!(
                "Private endpoint requested but cluster {} does not report one",
                descriptor.id
            );
        }
        Ok(Endpoint::PrivateEndpoint)
    } else if descriptor.public_endpoint_enabled {
        Ok(Endpoint::PublicEndpoint)
    } else {
        Err(ProvisionError::Unreachable)
    }
}

/// Fetch the cluster, apply the connectivity decision and download its kubeconfig
#[instrument(skip(client, request), fields(cluster = %request.cluster_id))]
pub async fn fetch_credentials<S: HttpService>(
    client: &ContainerEngineClient<S>,
    request: &ProvisioningRequest,
) -> Result<(String, ClusterDescriptor)> {
    let cluster = client.get_cluster(&request.cluster_id).await?;

    let Some(descriptor) = cluster.descriptor() else {
        warn!("Cluster document is missing its id or Kubernetes version");
        return Err(ProvisionError::Unreachable);
    };

    info!(
        "Found cluster {} ({}), public endpoint: {}",
        cluster.name.as_deref().unwrap_or(&descriptor.id),
        descriptor.kubernetes_version,
        descriptor.public_endpoint_enabled
    );

    let endpoint = connectivity_decision(&descriptor, request)?;
    info!("Requesting kubeconfig for {:?}", endpoint);

    let kubeconfig = client.create_kubeconfig(&descriptor.id, endpoint).await?;
    Ok((kubeconfig, descriptor))
}
