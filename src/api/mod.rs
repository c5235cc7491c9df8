pub mod catalog;
pub mod client;
pub mod models;
pub mod query;
pub mod transport;

pub use catalog::Catalog;
pub use client::{API_VERSION, ApiClient};
pub use models::{ApiResponse, Package, PackageInfo};
pub use query::PackageQuery;
pub use transport::{CatalogResponse, CatalogTransport};
