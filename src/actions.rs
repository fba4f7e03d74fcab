// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GitHub Actions workflow commands and runner file protocol.

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_GITHUB_PATH: &str = "GITHUB_PATH";

/// Collapsible log group; closed when dropped
pub struct Group;

impl Group {
    pub fn start(title: &str) -> Self {
        println!("::group::{}", escape_data(title));
        Group
    }
}

impl Drop for Group {
    fn drop(&mut self) {
        println!("::endgroup::");
    }
}

/// Report the run as failed with a single annotated message
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

/// Expose `dir` to later steps and to this process.
///
/// Appended to the `$GITHUB_PATH` file when running on a runner, and
/// prepended to `PATH` of the current process either way.
pub fn add_path(dir: &Path) -> std::io::Result<()> {
    if let Some(github_path) = env::var_os(ENV_GITHUB_PATH).filter(|p| !p.is_empty()) {
        append_path_file(Path::new(&github_path), dir)?;
    }

    let mut paths: Vec<PathBuf> = vec![dir.to_path_buf()];
    if let Some(current) = env::var_os("PATH") {
        paths.extend(env::split_paths(&current));
    }
    let joined: OsString = env::join_paths(paths)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    env::set_var("PATH", joined);
    debug!("Added {} to PATH", dir.display());
    Ok(())
}

fn append_path_file(file: &Path, dir: &Path) -> std::io::Result<()> {
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)?;
    writeln!(f, "{}", dir.display())
}

/// Workflow command data must not contain raw `%`, CR or LF
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
