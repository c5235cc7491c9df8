use crate::api::{ApiClient, Catalog, CatalogTransport};
use crate::config::DiscoConfig;
use crate::error::{DiscoError, Result};
use crate::models::Pkg;
use crate::platform::HostPlatform;
use crate::search::{self, Defaults, Mode, RawCriteria, rank_for_find, show_available_instead};
use colored::Colorize;

pub struct FindCommand<'a> {
    config: &'a DiscoConfig,
    transport: Box<dyn CatalogTransport>,
    host: HostPlatform,
}

impl<'a> FindCommand<'a> {
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

    pub fn execute(&self, raw: &RawCriteria) -> Result<()> {
        let pkgs = self.find(raw)?;
        print!("{}", render(&pkgs));
        Ok(())
    }

    /// Returns every matching package in listing order.
    pub fn find(&self, raw: &RawCriteria) -> Result<Vec<Pkg>> {
        let defaults = Defaults::from_config(self.config, self.host)?;
        let criteria = raw.resolve(Mode::Find, &defaults)?;
        let catalog = Catalog::new(self.transport.as_ref());

        let candidates = catalog.search_packages(&search::build(&criteria))?;
        match rank_for_find(candidates, &criteria) {
            Err(e @ DiscoError::NoPackageFound(_)) => {
                show_available_instead(&catalog, &criteria);
                Err(e)
            }
            ranked => ranked,
        }
    }
}

/// One command line per package, grouped under an operating system heading.
fn render(pkgs: &[Pkg]) -> String {
    let mut out = String::new();
    let mut current_os = None;

    for pkg in pkgs {
        if current_os != Some(pkg.operating_system) {
            if current_os.is_some() {
                out.push('\n');
            }
            let heading = pkg
                .operating_system
                .map_or_else(|| "unknown".to_string(), |os| os.to_string());
            out.push_str(&format!("{}\n", heading.cyan().bold()));
            current_os = Some(pkg.operating_system);
        }
        out.push_str(&pkg.to_cli_string());
        out.push('\n');
    }

    out
}
