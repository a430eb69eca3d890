//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string printed by `--version`.
pub fn version_line(program: &str) -> String {
    format!(
        "{} {} ({}, {})",
        program,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
