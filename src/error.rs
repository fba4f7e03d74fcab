// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

use crate::constants::UNREACHABLE_CLUSTER_MESSAGE;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("OCI CLI installation failed: {0}")]
    Install(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("OCI API error (HTTP {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("{}", UNREACHABLE_CLUSTER_MESSAGE)]
    Unreachable,

    #[error("Failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("Unsupported platform: os={os}, arch={arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Failed to sign request: {0}")]
    Signing(String),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<openssl::error::ErrorStack> for ProvisionError {
    fn from(e: openssl::error::ErrorStack) -> Self {
        ProvisionError::Signing(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
