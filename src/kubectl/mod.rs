// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! kubectl resolution: platform mapping, tool cache and download.

pub mod cache;
pub mod platform;

pub use cache::ToolCache;
pub use platform::{resolve_platform, Platform};

use bytes::Bytes;
use http::Request;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use url::Url;

use crate::constants::kubectl::{EXECUTABLE_MODE, TOOL_NAME};
use crate::error::{ProvisionError, Result};
use crate::transport::{send, HttpService};

/// A kubectl binary ready to be invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedTool {
    /// Directory to expose on the executable search path
    pub dir: PathBuf,
    pub binary: PathBuf,
    /// Whether this run downloaded the binary
    pub downloaded: bool,
}

/// Release URL for a kubectl build
pub fn download_url(base: &Url, version: &str, platform: &Platform) -> Result<Url> {
    let raw = format!(
        "{}/{}/bin/{}/{}/{}{}",
        base.as_str().trim_end_matches('/'),
        version,
        platform.os,
        platform.arch,
        TOOL_NAME,
        platform.executable_suffix()
    );
    Url::parse(&raw).map_err(|e| ProvisionError::Download {
        url: raw.clone(),
        reason: e.to_string(),
    })
}

/// Resolve kubectl for `version` from the cache, downloading it on a miss
#[instrument(skip(transport, cache, base_url))]
pub async fn provision_kubectl<S: HttpService>(
    transport: &S,
    cache: &ToolCache,
    base_url: &Url,
    platform: &Platform,
    version: &str,
) -> Result<ProvisionedTool> {
    let file_name = format!("{}{}", TOOL_NAME, platform.executable_suffix());

    let (dir, downloaded) = match cache.find(TOOL_NAME, version, platform.arch).await {
        Some(dir) => {
            info!("Using cached kubectl {} from {}", version, dir.display());
            (dir, false)
        }
        None => {
            let url = download_url(base_url, version, platform)?;
            info!("Downloading kubectl {} for {} from {}", version, platform, url);
            let contents = download(transport, &url).await?;
            let dir = cache
                .store_file(&contents, TOOL_NAME, &file_name, version, platform.arch)
                .await?;
            (dir, true)
        }
    };

    let binary = dir.join(&file_name);
    make_executable(&binary).await?;

    Ok(ProvisionedTool {
        dir,
        binary,
        downloaded,
    })
}

async fn download<S: HttpService>(transport: &S, url: &Url) -> Result<Bytes> {
    let request = Request::get(url.as_str())
        .body(Bytes::new())
        .map_err(|e| ProvisionError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response = send(transport, request)
        .await
        .map_err(|e| ProvisionError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(ProvisionError::Download {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        });
    }
    Ok(response.into_body())
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn make_executable(path: &Path) -> Result<()> {
    // Executability follows the file extension on non-unix hosts
    tokio::fs::metadata(path).await?;
    Ok(())
}
