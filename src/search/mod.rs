//! Package resolution: turns user criteria into catalog queries and picks
//! packages from the results.

mod builder;
mod criteria;
mod selector;

pub use builder::{build, major_version_query};
pub use criteria::{Criteria, Defaults, Mode, RawCriteria};
pub use selector::{
    ResolvedDownload, available_instead, dedupe, rank_for_find, resolve_download,
    select_for_download, show_available_instead,
};
