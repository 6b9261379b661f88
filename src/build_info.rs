//! Version metadata stamped in by `build.rs`.

/// Short git hash of the build, or "unknown" outside a checkout.
pub const BUILD_COMMIT: &str = env!("CRAWLER_BUILD_COMMIT");
/// UTC build date as YYYY-MM-DD.
pub const BUILD_DATE: &str = env!("CRAWLER_BUILD_DATE");

/// Version line printed by `crawler --version`.
pub fn version_string() -> String {
    format!(
        "crawler {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
