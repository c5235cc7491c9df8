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

use crate::api::{ApiClient, Catalog, CatalogTransport};
use crate::config::DiscoConfig;
use crate::download::{DownloadOutcome, download_package};
use crate::error::{DiscoError, Result};
use crate::platform::HostPlatform;
use crate::search::{
    self, Defaults, Mode, RawCriteria, resolve_download, select_for_download,
    show_available_instead,
};
use colored::Colorize;
use log::debug;
use std::path::Path;

pub struct DownloadCommand<'a> {
    config: &'a DiscoConfig,
    transport: Box<dyn CatalogTransport>,
    host: HostPlatform,
}

impl<'a> DownloadCommand<'a> {
    pub fn new(config: &'a DiscoConfig) -> Result<Self> {
        Ok(Self {
            config,
            transport: Box::new(ApiClient::from_config(config)),
            host: HostPlatform::detect(),
        })
    }

    pub fn with_transport(mut self, transport: Box<dyn CatalogTransport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_host(mut self, host: HostPlatform) -> Self {
        self.host = host;
        self
    }

    /// Resolves one package and downloads it into `output_dir`.
    ///
    /// An archive that is already present is reported through
    /// [`DownloadOutcome::AlreadyExists`] and left untouched.
    pub fn execute(
        &self,
        raw: &RawCriteria,
        output_dir: &Path,
        no_progress: bool,
    ) -> Result<DownloadOutcome> {
        let defaults = Defaults::from_config(self.config, self.host)?;
        let criteria = raw.resolve(Mode::Download, &defaults)?;
        let catalog = Catalog::new(self.transport.as_ref());

        let candidates = catalog.search_packages(&search::build(&criteria))?;
        let pkg = match select_for_download(candidates, &criteria) {
            Ok(pkg) => pkg,
            Err(e @ DiscoError::NoPackageFound(_)) => {
                show_available_instead(&catalog, &criteria);
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let resolved = resolve_download(&catalog, pkg)?;
        debug!("Downloading from {}", resolved.uri);
        println!("Downloading {}:", resolved.filename);

        let outcome = download_package(
            &resolved,
            output_dir,
            self.config.download_timeout(),
            no_progress,
        )?;

        match &outcome {
            DownloadOutcome::Downloaded { path, bytes } => {
                println!(
                    "{} Successfully downloaded {} ({bytes} bytes)",
                    "✓".green().bold(),
                    path.display()
                );
            }
            DownloadOutcome::AlreadyExists { path } => {
                println!(
                    "{} {} already exists, nothing to download",
                    "Note:".yellow().bold(),
                    path.display()
                );
            }
        }

        Ok(outcome)
    }
}
