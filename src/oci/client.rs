// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Container Engine for Kubernetes API client

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::config::AuthProfile;
use crate::constants::api;
use crate::error::{ProvisionError, Result};
use crate::oci::signer::RequestSigner;
use crate::oci::types::{ApiErrorBody, Cluster, CreateKubeconfigDetails, Endpoint};
use crate::transport::{send, HttpService};

pub struct ContainerEngineClient<S> {
    transport: S,
    endpoint: Url,
    signer: RequestSigner,
}

impl<S: HttpService> ContainerEngineClient<S> {
    pub fn new(transport: S, endpoint: Url, profile: &AuthProfile) -> Result<Self> {
        Ok(Self {
            transport,
            endpoint,
            signer: RequestSigner::new(profile)?,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_cluster(&self, cluster_id: &str) -> Result<Cluster> {
        let path = format!("{}/clusters/{}", api::VERSION_PATH, cluster_id);
        let response = self.call(Method::GET, &path, Bytes::new()).await?;

        serde_json::from_slice(response.body()).map_err(|e| ProvisionError::Api {
            status: response.status().as_u16(),
            code: "InvalidResponse".to_string(),
            message: format!("Failed to parse cluster {}: {}", cluster_id, e),
        })
    }

    /// Request a kubeconfig document and drain the body into text
    #[instrument(skip(self))]
    pub async fn create_kubeconfig(&self, cluster_id: &str, endpoint: Endpoint) -> Result<String> {
        let path = format!("{}/clusters/{}/kubeconfig/content", api::VERSION_PATH, cluster_id);
        let details = CreateKubeconfigDetails {
            token_version: api::TOKEN_VERSION.to_string(),
            endpoint,
        };
        let body = serde_json::to_vec(&details)
            .map_err(|e| ProvisionError::Transport(format!("Failed to encode request body: {}", e)))?;

        let response = self.call(Method::POST, &path, Bytes::from(body)).await?;

        String::from_utf8(response.into_body().to_vec()).map_err(|e| ProvisionError::Api {
            status: StatusCode::OK.as_u16(),
            code: "InvalidResponse".to_string(),
            message: format!("Kubeconfig for cluster {} is not valid UTF-8: {}", cluster_id, e),
        })
    }

    async fn call(&self, method: Method, path: &str, body: Bytes) -> Result<Response<Bytes>> {
        // Appended rather than joined so a path prefix on the endpoint survives
        let raw = format!("{}{}", self.endpoint.as_str().trim_end_matches('/'), path);
        let url = Url::parse(&raw)
            .map_err(|e| ProvisionError::Config(format!("Invalid API path {}: {}", raw, e)))?;

        let mut request = Request::builder()
            .method(method)
            .uri(url.as_str())
            .header(http::header::ACCEPT, "application/json")
            .body(body)
            .map_err(|e| ProvisionError::Transport(e.to_string()))?;
        self.signer.sign(&mut request)?;

        let response = send(&self.transport, request).await?;

        if let Some(request_id) = response.headers().get(api::REQUEST_ID_HEADER) {
            debug!("{} {} opc-request-id={:?}", response.status(), path, request_id);
        }

        if !response.status().is_success() {
            return Err(api_error(&response));
        }
        Ok(response)
    }
}

fn api_error(response: &Response<Bytes>) -> ProvisionError {
    let status = response.status();
    let body: ApiErrorBody = serde_json::from_slice(response.body()).unwrap_or_else(|_| ApiErrorBody {
        code: status.canonical_reason().unwrap_or("Unknown").to_string(),
        message: String::from_utf8_lossy(response.body()).into_owned(),
    });

    if status == StatusCode::UNAUTHORIZED {
        ProvisionError::Authentication(format!("{} ({})", body.message, body.code))
    } else {
        ProvisionError::Api {
            status: status.as_u16(),
            code: body.code,
            message: body.message,
        }
    }
}
