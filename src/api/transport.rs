use crate::api::query::PackageQuery;
use crate::error::Result;

/// Raw reply from the catalog. Any status counts as a reply; only a
/// missing response is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: String,
}

impl CatalogResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues GET requests against the catalog.
///
/// `endpoint` is relative to the versioned API root, e.g. `packages` or
/// `ids/{id}`.
pub trait CatalogTransport {
    fn get(&self, endpoint: &str, query: &PackageQuery) -> Result<CatalogResponse>;
}
