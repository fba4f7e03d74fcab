// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Reported when a cluster cannot be reached with the requested endpoint class
pub const UNREACHABLE_CLUSTER_MESSAGE: &str =
    "Unable to connect to Oracle Container Engine for Kubernetes.";

/// OCI CLI bootstrap
pub mod installer {
    /// Marker file in the home directory written after a successful install
    pub const SENTINEL_FILE: &str = ".oci-cli-installed";
    pub const SENTINEL_CONTENT: &str = "success";
    pub const PROGRAM: &str = "python";
    pub const ARGS: &[&str] = &["-m", "pip", "install", "oci-cli"];
}

/// Container Engine for Kubernetes REST API
pub mod api {
    pub const VERSION_PATH: &str = "/20180222";
    /// Kubeconfig token version; 2.0.0 uses the `oci ce cluster generate-token` exec plugin
    pub const TOKEN_VERSION: &str = "2.0.0";
    pub const REQUEST_ID_HEADER: &str = "opc-request-id";
}

/// kubectl distribution and caching
pub mod kubectl {
    pub const TOOL_NAME: &str = "kubectl";
    pub const DEFAULT_DOWNLOAD_BASE_URL: &str =
        "https://storage.googleapis.com/kubernetes-release/release";
    pub const EXECUTABLE_MODE: u32 = 0o755;
}

/// Kubeconfig output location, relative to the home directory
pub mod kubeconfig {
    pub const DIR: &str = ".kube";
    pub const FILE: &str = "config";
    pub const FILE_MODE: u32 = 0o600;
}

/// Second-level domains of OCI realms other than the commercial one
pub mod realm {
    pub const DEFAULT_DOMAIN: &str = "oraclecloud.com";

    pub const REGION_DOMAINS: &[(&str, &str)] = &[
        // oc2, oc3
        ("us-langley-1", "oraclegovcloud.com"),
        ("us-luke-1", "oraclegovcloud.com"),
        ("us-gov-ashburn-1", "oraclegovcloud.com"),
        ("us-gov-chicago-1", "oraclegovcloud.com"),
        ("us-gov-phoenix-1", "oraclegovcloud.com"),
        // oc4
        ("uk-gov-london-1", "oraclegovcloud.uk"),
        ("uk-gov-cardiff-1", "oraclegovcloud.uk"),
        // oc8
        ("ap-chiyoda-1", "oraclecloud8.com"),
        ("ap-ibaraki-1", "oraclecloud8.com"),
        // oc9
        ("me-dcc-muscat-1", "oraclecloud9.com"),
        // oc10
        ("ap-dcc-canberra-1", "oraclecloud10.com"),
        // oc14
        ("eu-dcc-milan-1", "oraclecloud14.com"),
        ("eu-dcc-milan-2", "oraclecloud14.com"),
        ("eu-dcc-dublin-1", "oraclecloud14.com"),
        ("eu-dcc-dublin-2", "oraclecloud14.com"),
        ("eu-dcc-rating-1", "oraclecloud14.com"),
        ("eu-dcc-rating-2", "oraclecloud14.com"),
        // oc19
        ("eu-frankfurt-2", "oraclecloud.eu"),
        ("eu-madrid-2", "oraclecloud.eu"),
        // oc20
        ("eu-jovanovac-1", "oraclecloud20.com"),
    ];
}
