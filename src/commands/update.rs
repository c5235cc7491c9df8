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
use crate::error::Result;
use crate::models::Pkg;
use crate::platform::HostPlatform;
use crate::search::{self, Defaults, Mode, dedupe};
use crate::update::{criteria_for, find_updates, parse_descriptor};
use colored::Colorize;

pub struct UpdateCommand<'a> {
    config: &'a DiscoConfig,
    transport: Box<dyn CatalogTransport>,
    host: HostPlatform,
}

impl<'a> UpdateCommand<'a> {
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

    pub fn execute(&self, descriptor: &str) -> Result<()> {
        let updates = self.check(descriptor)?;

        if updates.is_empty() {
            println!("No updates found for {descriptor}");
            return Ok(());
        }

        println!("{}", "Updates available".green().bold());
        for pkg in &updates {
            println!("{}", pkg.to_cli_string());
        }
        Ok(())
    }

    /// Catalog packages newer than the installation `descriptor` names.
    pub fn check(&self, descriptor: &str) -> Result<Vec<Pkg>> {
        let installed = parse_descriptor(descriptor)?;
        let defaults = Defaults::from_config(self.config, self.host)?;
        let criteria = criteria_for(&installed).resolve(Mode::UpdateCheck, &defaults)?;

        let catalog = Catalog::new(self.transport.as_ref());
        let candidates = dedupe(catalog.search_packages(&search::build(&criteria))?);
        Ok(find_updates(&installed, &candidates))
    }
}
