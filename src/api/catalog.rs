// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::api::client::API_VERSION;
use crate::api::models::{ApiResponse, Package, PackageInfo};
use crate::api::query::PackageQuery;
use crate::api::transport::{CatalogResponse, CatalogTransport};
use crate::error::{DiscoError, Result};
use crate::models::Pkg;
use log::{debug, trace, warn};
use serde::de::DeserializeOwned;

const PACKAGES_ENDPOINT: &str = "packages";
const IDS_ENDPOINT: &str = "ids";

/// Typed view of the catalog on top of a [`CatalogTransport`].
pub struct Catalog<'a> {
    transport: &'a dyn CatalogTransport,
}

impl<'a> Catalog<'a> {
    pub fn new(transport: &'a dyn CatalogTransport) -> Self {
        Self { transport }
    }

    /// Runs a package search.
    ///
    /// A 400 reply means nothing matched and yields an empty list. Records
    /// whose version cannot be parsed are skipped.
    pub fn search_packages(&self, query: &PackageQuery) -> Result<Vec<Pkg>> {
        debug!("Searching packages: {query}");
        let response = self.transport.get(PACKAGES_ENDPOINT, query)?;

        match response.status {
            200 => {}
            400 => {
                debug!("Catalog reported no match for {query}");
                return Ok(Vec::new());
            }
            status => return Err(status_error(status, &response)),
        }

        let packages: Vec<Package> = parse_result(&response.body)?;
        let total = packages.len();

        let pkgs: Vec<Pkg> = packages
            .into_iter()
            .filter_map(|package| {
                let id = package.id.clone();
                match Pkg::try_from(package) {
                    Ok(pkg) => Some(pkg),
                    Err(e) => {
                        warn!("Skipping package {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        debug!("Catalog returned {} packages ({total} records)", pkgs.len());
        Ok(pkgs)
    }

    /// Fetches the download details of one package.
    pub fn package_info(&self, package_id: &str) -> Result<PackageInfo> {
        debug!("Fetching package info for ID: {package_id}");
        let endpoint = format!("{IDS_ENDPOINT}/{package_id}");
        let response = self.transport.get(&endpoint, &PackageQuery::new())?;

        if response.status != 200 {
            return Err(status_error(response.status, &response));
        }

        let infos: Vec<PackageInfo> = parse_result(&response.body)?;
        infos.into_iter().next().ok_or_else(|| {
            debug!("No package info found for ID: {package_id}");
            DiscoError::MissingDownloadInfo(package_id.to_string())
        })
    }
}

/// Extracts the `result` field every v3 response wraps its payload in.
fn parse_result<T: DeserializeOwned>(body: &str) -> Result<T> {
    let response: ApiResponse<T> = serde_json::from_str(body).map_err(|e| {
        debug!("Failed to parse API response: {e}");
        trace!("Response body: {body}");
        DiscoError::InvalidResponse(format!("Failed to parse API {API_VERSION} response: {e}"))
    })?;

    if !response.message.is_empty() {
        debug!("Catalog message: {}", response.message);
    }
    Ok(response.result)
}

fn status_error(status: u16, response: &CatalogResponse) -> DiscoError {
    trace!("Error body: {}", response.body);
    let message = match status {
        404 => format!(
            "The requested resource was not found on foojay.io API {API_VERSION}. The API endpoint may have changed."
        ),
        500..=599 => format!(
            "Server error ({status}) occurred on foojay.io API {API_VERSION}. Please try again later."
        ),
        _ => format!("HTTP error ({status}) from foojay.io API {API_VERSION}"),
    };
    DiscoError::Transport(message)
}
