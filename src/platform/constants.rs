//! Platform-specific constants and utility functions.

use std::path::PathBuf;

/// Get the executable file extension for the current platform
pub fn executable_extension() -> &'static str {
    #[cfg(windows)]
    return ".exe";
    #[cfg(not(windows))]
    return "";
}

pub fn java_executable_name() -> String {
    format!("java{}", executable_extension())
}

/// Directories JDKs are usually installed under on this platform, plus the
/// SDKMAN candidates folder when it exists.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "macos")]
    paths.push(PathBuf::from(
        "/System/Volumes/Data/Library/Java/JavaVirtualMachines/",
    ));

    #[cfg(windows)]
    paths.push(PathBuf::from("C:\\Program Files\\Java\\"));

    #[cfg(all(unix, not(target_os = "macos")))]
    paths.push(PathBuf::from("/usr/lib/jvm"));

    if let Some(home) = dirs::home_dir() {
        let sdkman = home.join(".sdkman").join("candidates").join("java");
        if sdkman.is_dir() {
            paths.push(sdkman);
        }
    }

    paths
}
