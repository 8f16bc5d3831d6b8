//! Release comparison for the update check.
//!
//! Parses the GitHub "latest release" JSON and compares version numbers.
//! The HTTP request itself lives in the platform crate
//! (`magnet-windows::version_check`).

use serde::Deserialize;

/// The fields of a GitHub release that the update check uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Release tag, e.g. `"v1.2.0"`.
    pub tag_name: String,
    /// Release page to send the user to.
    #[serde(default)]
    pub html_url: String,
}

/// Parses a GitHub release JSON body. Returns `None` when `tag_name` is
/// missing or the body is not JSON.
pub fn parse_release(json: &str) -> Option<Release> {
    serde_json::from_str(json).ok()
}

/// Parses `major.minor[.patch[.revision]]`, with an optional `v` prefix.
///
/// A missing patch counts as 0; the revision is accepted but ignored.
pub fn parse_version(s: &str) -> Option<(u32, u32, u32)> {
    let s = s.trim();
    let s = s.strip_prefix(['v', 'V']).unwrap_or(s);
    let parts = s
        .split('.')
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [major, minor] => Some((*major, *minor, 0)),
        [major, minor, patch] | [major, minor, patch, _] => Some((*major, *minor, *patch)),
        _ => None,
    }
}

/// Returns `true` when `remote` is a higher version than `local`.
///
/// Malformed versions on either side count as "not newer".
pub fn is_newer(remote: &str, local: &str) -> bool {
    match (parse_version(remote), parse_version(local)) {
        (Some(r), Some(l)) => r > l,
        _ => false,
    }
}

/// Returns the release if it is newer than `local_version`.
pub fn check_for_update(json: &str, local_version: &str) -> Option<Release> {
    let release = parse_release(json)?;
    is_newer(&release.tag_name, local_version).then_some(release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_major() {
        assert!(is_newer("1.0.0", "0.9.9"));
    }

    #[test]
    fn newer_minor() {
        assert!(is_newer("0.2.0", "0.1.9"));
    }

    #[test]
    fn newer_patch() {
        assert!(is_newer("v0.1.1", "0.1.0"));
    }

    #[test]
    fn same_version_is_not_newer() {
        assert!(!is_newer("v1.0.0", "1.0.0"));
        assert!(!is_newer("1.0", "1.0.0"));
    }

    #[test]
    fn older_version_is_not_newer() {
        assert!(!is_newer("0.1.0", "0.2.0"));
    }

    #[test]
    fn revision_is_ignored() {
        assert!(!is_newer("1.0.0.7", "1.0.0"));
        assert!(is_newer("1.0.1.0", "1.0.0"));
    }

    #[test]
    fn malformed_returns_false() {
        assert!(!is_newer("abc", "0.1.0"));
        assert!(!is_newer("1", "0.1.0"));
        assert!(!is_newer("1.2.3.4.5", "0.1.0"));
        assert!(!is_newer("2.0.0", ""));
    }

    #[test]
    fn parse_release_reads_tag_and_url() {
        // Arrange
        let json = r#"{"tag_name":"v1.3.0","html_url":"https://github.com/voidksa/WindowMagnet/releases/tag/v1.3.0","name":"1.3"}"#;

        // Act
        let release = parse_release(json).unwrap();

        // Assert
        assert_eq!(release.tag_name, "v1.3.0");
        assert!(release.html_url.ends_with("/v1.3.0"));
    }

    #[test]
    fn parse_release_without_tag_is_none() {
        assert_eq!(parse_release(r#"{"name":"foo"}"#), None);
        assert_eq!(parse_release("rate limited"), None);
    }

    #[test]
    fn check_finds_update() {
        let json = r#"{"tag_name":"v0.2.0","html_url":"https://example.invalid/r"}"#;

        let release = check_for_update(json, "0.1.0").unwrap();

        assert_eq!(release.tag_name, "v0.2.0");
    }

    #[test]
    fn check_no_update_when_same() {
        let json = r#"{"tag_name":"v0.1.0"}"#;
        assert_eq!(check_for_update(json, "0.1.0"), None);
    }

    #[test]
    fn check_no_update_when_local_is_newer() {
        let json = r#"{"tag_name":"v0.1.0"}"#;
        assert_eq!(check_for_update(json, "0.2.0"), None);
    }
}
