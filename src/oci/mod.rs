// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Oracle Cloud Infrastructure API access: request signing, wire types and the
//! Container Engine client.

pub mod client;
pub mod signer;
pub mod types;

pub use client::ContainerEngineClient;
pub use signer::RequestSigner;
pub use types::{Cluster, ClusterDescriptor, Endpoint};
