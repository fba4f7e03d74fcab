// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Cluster document returned by `GET /clusters/{clusterId}`.
/// Only the fields this action reads are modelled.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_config: Option<ClusterEndpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<ClusterEndpoints>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterEndpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public_ip_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterEndpoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_endpoint: Option<String>,
}

/// The subset of a cluster needed to provision access to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterDescriptor {
    pub id: String,
    /// Kubernetes version, also the kubectl version to install (e.g. `v1.30.1`)
    pub kubernetes_version: String,
    pub public_endpoint_enabled: bool,
    pub private_endpoint_enabled: bool,
}

impl Cluster {
    /// Reduce to a descriptor; `None` when the id or version is missing
    pub fn descriptor(&self) -> Option<ClusterDescriptor> {
        let id = self.id.as_deref().filter(|s| !s.is_empty())?;
        let kubernetes_version = self.kubernetes_version.as_deref().filter(|s| !s.is_empty())?;

        Some(ClusterDescriptor {
            id: id.to_string(),
            kubernetes_version: kubernetes_version.to_string(),
            public_endpoint_enabled: self
                .endpoint_config
                .as_ref()
                .and_then(|c| c.is_public_ip_enabled)
                .unwrap_or(false),
            private_endpoint_enabled: self
                .endpoints
                .as_ref()
                .is_some_and(|e| e.private_endpoint.is_some()),
        })
    }
}

/// Which control plane endpoint the generated kubeconfig points at
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Endpoint {
    PublicEndpoint,
    PrivateEndpoint,
}

/// Body of `POST /clusters/{clusterId}/kubeconfig/content`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateKubeconfigDetails {
    pub token_version: String,
    pub endpoint: Endpoint,
}

/// Error document returned by the OCI API on non-2xx responses
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
