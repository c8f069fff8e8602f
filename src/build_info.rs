//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// Version line shown by `arcade --version` and on the menu.
/// Non-release builds are tagged with their profile.
pub fn version_string() -> String {
    let mut version = format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    );
    if BUILD_PROFILE != "release" {
        version.push_str(&format!(" [{}]", BUILD_PROFILE));
    }
    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
        assert!(!BUILD_PROFILE.is_empty());
    }

    #[test]
    fn test_version_string_contains_parts() {
        let version = version_string();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(BUILD_COMMIT));
        assert!(version.contains(BUILD_DATE));
    }

    #[test]
    fn test_version_string_tags_non_release_builds() {
        let tagged = version_string().ends_with(&format!("[{}]", BUILD_PROFILE));
        assert_eq!(tagged, BUILD_PROFILE != "release");
    }
}
