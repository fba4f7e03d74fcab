// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport shared by the OCI client and the kubectl downloader.
//!
//! Everything that talks to the network goes through a tower [`Service`]
//! over buffered `http` requests and responses, so tests can swap in a
//! mock without touching the callers.

use bytes::Bytes;
use http::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Service, ServiceExt};

use crate::error::{ProvisionError, Result};

pub type ResponseFuture =
    Pin<Box<dyn Future<Output = std::result::Result<Response<Bytes>, BoxError>> + Send>>;

/// A cloneable HTTP service with fully buffered bodies
pub trait HttpService:
    Service<Request<Bytes>, Response = Response<Bytes>, Error = BoxError, Future = ResponseFuture>
    + Clone
    + Send
    + Sync
    + 'static
{
}

impl<T> HttpService for T where
    T: Service<Request<Bytes>, Response = Response<Bytes>, Error = BoxError, Future = ResponseFuture>
        + Clone
        + Send
        + Sync
        + 'static
{
}

/// Send a single request through the transport
pub async fn send<S: HttpService>(transport: &S, request: Request<Bytes>) -> Result<Response<Bytes>> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    transport
        .clone()
        .oneshot(request)
        .await
        .map_err(|e| ProvisionError::Transport(format!("{} {}: {}", method, uri, e)))
}

/// Production transport backed by reqwest
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProvisionError::Transport(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Service<Request<Bytes>> for ReqwestTransport {
    type Response = Response<Bytes>;
    type Error = BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Bytes>) -> Self::Future {
        let client = self.client.clone();

        Box::pin(async move {
            let request = reqwest::Request::try_from(req)?;
            let response = client.execute(request).await?;

            let mut builder = Response::builder()
                .status(response.status())
                .version(response.version());
            if let Some(headers) = builder.headers_mut() {
                headers.extend(response.headers().clone());
            }
            let body = response.bytes().await?;

            Ok::<_, BoxError>(builder.body(body)?)
        })
    }
}
