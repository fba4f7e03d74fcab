// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OCI HTTP request signing (signature version 1, rsa-sha256).

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use http::header::{HeaderValue, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST};
use http::{Method, Request};
use openssl::hash::{hash, MessageDigest};
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;

use crate::config::AuthProfile;
use crate::error::{ProvisionError, Result};

const CONTENT_SHA256: &str = "x-content-sha256";
const REQUEST_TARGET: &str = "(request-target)";

const GENERIC_HEADERS: &[&str] = &["date", REQUEST_TARGET, "host"];
const BODY_HEADERS: &[&str] = &["content-length", "content-type", CONTENT_SHA256];

pub struct RequestSigner {
    key_id: String,
    key: PKey<Private>,
}

impl RequestSigner {
    pub fn new(profile: &AuthProfile) -> Result<Self> {
        let key = PKey::private_key_from_pem(profile.private_key.as_bytes())
            .map_err(|e| ProvisionError::Signing(format!("Failed to parse private key: {}", e)))?;

        Ok(Self {
            key_id: profile.key_id(),
            key,
        })
    }

    /// Add the `date`, body digest and `authorization` headers to a request
    pub fn sign(&self, request: &mut Request<Bytes>) -> Result<()> {
        let date = chrono::Utc::now()
            .format("%a, %d %b %Y %H:%M:%S GMT")
            .to_string();
        self.sign_at(request, &date)
    }

    pub(crate) fn sign_at(&self, request: &mut Request<Bytes>, date: &str) -> Result<()> {
        let host = request
            .uri()
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| ProvisionError::Signing(format!("Request URI has no host: {}", request.uri())))?;

        let headers = request.headers_mut();
        headers.insert(DATE, header_value(date)?);
        headers.insert(HOST, header_value(&host)?);

        let mut signed: Vec<&str> = GENERIC_HEADERS.to_vec();
        if has_body(request.method()) {
            let digest = STANDARD.encode(&*hash(MessageDigest::sha256(), request.body())?);
            let length = request.body().len().to_string();

            let headers = request.headers_mut();
            headers.insert(CONTENT_SHA256, header_value(&digest)?);
            headers.insert(CONTENT_LENGTH, header_value(&length)?);
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            signed.extend_from_slice(BODY_HEADERS);
        }

        let signing_string = signing_string(request, &signed)?;

        let mut signer = Signer::new(MessageDigest::sha256(), &self.key)?;
        signer.update(signing_string.as_bytes())?;
        let signature = STANDARD.encode(signer.sign_to_vec()?);

        let authorization = format!(
            "Signature version=\"1\",headers=\"{}\",keyId=\"{}\",algorithm=\"rsa-sha256\",signature=\"{}\"",
            signed.join(" "),
            self.key_id,
            signature
        );
        request
            .headers_mut()
            .insert(AUTHORIZATION, header_value(&authorization)?);

        Ok(())
    }
}

fn has_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Build the newline separated string covered by the signature
pub(crate) fn signing_string(request: &Request<Bytes>, signed: &[&str]) -> Result<String> {
    let lines = signed
        .iter()
        .map(|name| {
            if *name == REQUEST_TARGET {
                let target = request
                    .uri()
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or("/");
                return Ok(format!(
                    "{}: {} {}",
                    REQUEST_TARGET,
                    request.method().as_str().to_lowercase(),
                    target
                ));
            }

            let value = request
                .headers()
                .get(*name)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ProvisionError::Signing(format!("Missing header to sign: {}", name)))?;
            Ok(format!("{}: {}", name, value))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(lines.join("\n"))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ProvisionError::Signing(format!("Invalid header value '{}': {}", value, e)))
}
