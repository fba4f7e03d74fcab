// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the OCI API, the kubectl download host and
//! external commands.

use bytes::Bytes;
use http::{Request, Response};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use std::task::{Context, Poll};
use tower::Service;

use crate::config::AuthProfile;
use crate::error::{ProvisionError, Result};
use crate::installer::CommandRunner;
use crate::transport::ResponseFuture;

/// A request seen by [`MockService`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub host: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A mock HTTP service that returns predefined responses based on request
/// paths and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("GET".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(("POST".to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Bytes>> for MockService {
    type Response = Response<Bytes>;
    type Error = tower::BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Bytes>) -> Self::Future {
        let recorded = RecordedRequest {
            method: req.method().to_string(),
            host: req.uri().host().unwrap_or_default().to_string(),
            path: req.uri().path().to_string(),
            authorization: req
                .headers()
                .get(http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: req.body().clone(),
        };

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&(recorded.method.clone(), recorded.path.clone()))
            .cloned();
        self.requests.lock().unwrap().push(recorded);

        Box::pin(async move {
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json()));
            Ok::<_, tower::BoxError>(Response::builder()
                .status(status)
                .header("opc-request-id", "mock-request-id")
                .body(Bytes::from(body))
                .unwrap())
        })
    }
}

/// OCI style 404 error document
pub fn not_found_json() -> String {
    serde_json::json!({
        "code": "NotAuthorizedOrNotFound",
        "message": "Authorization failed or requested resource not found."
    })
    .to_string()
}

/// Create a mock cluster JSON response
pub fn cluster_json(id: &str, version: &str, public: bool) -> String {
    let public_endpoint = public.then_some("129.1.2.3:6443");
    let kubernetes = public_endpoint.unwrap_or("10.0.0.3:6443");
    serde_json::json!({
        "id": id,
        "name": "test-cluster",
        "kubernetesVersion": version,
        "lifecycleState": "ACTIVE",
        "endpointConfig": {
            "isPublicIpEnabled": public,
            "subnetId": "ocid1.subnet.oc1.iad.ssss"
        },
        "endpoints": {
            "kubernetes": kubernetes,
            "publicEndpoint": public_endpoint,
            "privateEndpoint": "10.0.0.3:6443"
        }
    })
    .to_string()
}

/// An authentication profile with a freshly generated RSA key, shared by all tests
pub fn test_profile() -> AuthProfile {
    static KEY: OnceLock<String> = OnceLock::new();
    let private_key = KEY
        .get_or_init(|| {
            let rsa = openssl::rsa::Rsa::generate(2048).unwrap();
            let key = openssl::pkey::PKey::from_rsa(rsa).unwrap();
            String::from_utf8(key.private_key_to_pem_pkcs8().unwrap()).unwrap()
        })
        .clone();

    AuthProfile {
        tenancy: "ocid1.tenancy.oc1..tttt".to_string(),
        user: "ocid1.user.oc1..uuuu".to_string(),
        fingerprint: "20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34".to_string(),
        private_key,
        region: "us-ashburn-1".to_string(),
    }
}

/// Command runner that records invocations instead of executing them
#[derive(Clone, Default)]
pub struct RecordingRunner {
    commands: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let mut line = vec![program];
        line.extend_from_slice(args);
        self.commands.lock().unwrap().push(line.join(" "));

        if self.fail {
            return Err(ProvisionError::Install(format!("{} exited with status 1", program)));
        }
        Ok(())
    }
}
