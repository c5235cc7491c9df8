pub mod distribution;
pub mod package;
pub mod pkg;
pub mod platform;
pub mod registry;

pub use distribution::Distribution;
pub use package::{ArchiveType, PackageType, ReleaseStatus, TermOfSupport};
pub use pkg::Pkg;
pub use platform::{Architecture, LibCType, OperatingSystem};
pub use registry::{CanonicalValue, FieldKind, lenient, normalize};
