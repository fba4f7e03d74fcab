// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod installer;
pub mod kubeconfig;
pub mod kubectl;
pub mod oci;
pub mod resolver;
pub mod transport;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_utils;
