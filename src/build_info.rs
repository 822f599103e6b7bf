//! Compile-time build information, generated by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line printed by `--version`, e.g. `stonecut 0.1.0 (a1b2c3d, 2026-01-31)`.
pub fn version_line() -> String {
    format!(
        "stonecut {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_is_short_hash_or_unknown() {
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_date_is_iso_day() {
        assert_eq!(BUILD_DATE.len(), 10);
        assert_eq!(BUILD_DATE.matches('-').count(), 2);
    }

    #[test]
    fn test_version_line_mentions_package_version() {
        let line = version_line();
        assert!(line.starts_with("stonecut "));
        assert!(line.contains(env!("CARGO_PKG_VERSION")));
    }
}
