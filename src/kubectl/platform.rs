// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::error::{ProvisionError, Result};

/// Host platform in the naming used by the Kubernetes release bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: &'static str,
    pub arch: &'static str,
}

impl Platform {
    /// The platform this binary is running on
    pub fn current() -> Result<Self> {
        resolve_platform(std::env::consts::OS, std::env::consts::ARCH)
    }

    pub fn executable_suffix(&self) -> &'static str {
        if self.os == "windows" {
            ".exe"
        } else {
            ""
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

/// Map an operating system and CPU architecture to release naming.
///
/// Accepts both Node.js (`win32`, `x64`) and Rust (`windows`, `x86_64`) spellings.
pub fn resolve_platform(os: &str, arch: &str) -> Result<Platform> {
    let unsupported = || ProvisionError::UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    };

    let os_name = match os {
        "darwin" | "macos" => "darwin",
        "win32" | "windows" => "windows",
        "linux" => "linux",
        _ => return Err(unsupported()),
    };

    let arch_name = match arch {
        "x64" | "x86_64" | "amd64" => "amd64",
        "arm" | "arm64" | "aarch64" => "arm64",
        _ => return Err(unsupported()),
    };

    Ok(Platform {
        os: os_name,
        arch: arch_name,
    })
}
