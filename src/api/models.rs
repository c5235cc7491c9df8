use serde::{Deserialize, Serialize};

/// A package record as returned by the `packages` search endpoint.
///
/// Most fields default when absent so one odd record does not fail the
/// whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    #[serde(default)]
    pub archive_type: String,
    pub distribution: String,
    #[serde(default)]
    pub major_version: u32,
    pub java_version: String,
    #[serde(default)]
    pub distribution_version: String,
    #[serde(default)]
    pub latest_build_available: bool,
    #[serde(default)]
    pub release_status: String,
    #[serde(default)]
    pub term_of_support: String,
    #[serde(default)]
    pub operating_system: String,
    #[serde(default)]
    pub lib_c_type: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub fpu: String,
    #[serde(default)]
    pub package_type: String,
    #[serde(default)]
    pub javafx_bundled: bool,
    #[serde(default)]
    pub directly_downloadable: bool,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub ephemeral_id: String,
    #[serde(default)]
    pub free_use_in_production: bool,
    #[serde(default)]
    pub tck_tested: String,
    #[serde(default)]
    pub tck_cert_uri: String,
    #[serde(default)]
    pub aqavit_certified: String,
    #[serde(default)]
    pub aqavit_cert_uri: String,
    #[serde(default = "unknown_size")]
    pub size: i64,
}

fn unknown_size() -> i64 {
    -1
}

/// Detail record from the `ids/{id}` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub direct_download_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_site_uri: Option<String>,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub checksum_type: String,
    #[serde(default)]
    pub checksum_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_uri: Option<String>,
}

/// Every v3 response wraps its payload in a `result` field.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub result: T,
    #[serde(default)]
    pub message: String,
}
