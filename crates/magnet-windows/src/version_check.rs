//! Checks GitHub for a newer WindowMagnet release.
//!
//! The request lives here; parsing and comparison are in
//! [`magnet_core::version`].

use std::time::Duration;

use magnet_core::log_debug;
use magnet_core::version::{self, Release};

use crate::http;

const GITHUB_HOST: &str = "api.github.com";
const RELEASES_PATH: &str = "/repos/voidksa/WindowMagnet/releases/latest";
const TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the latest release if it is newer than `local_version`.
///
/// Network failures, rate limiting and malformed responses all yield
/// `None`: the check is advisory.
pub fn check_for_update(local_version: &str) -> Option<Release> {
    match http::get(GITHUB_HOST, RELEASES_PATH, TIMEOUT) {
        Ok(body) => version::check_for_update(&body, local_version),
        Err(e) => {
            log_debug!("update check failed: {e}");
            None
        }
    }
}
