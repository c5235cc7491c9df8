//! Host platform detection and platform-specific constants.

mod constants;
mod detection;

pub use constants::{default_search_paths, executable_extension, java_executable_name};
pub use detection::HostPlatform;
