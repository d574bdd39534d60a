//! User-agent device sniffing.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::models::Device;
use crate::utils::dom;

/// One compiled pattern per entry of [`Device::ALL`].
static DEVICE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    Device::ALL
        .iter()
        .map(|device| {
            RegexBuilder::new(device.pattern())
                .case_insensitive(true)
                .build()
                .expect("Failed to compile user-agent regex")
        })
        .collect()
});

/// Whether `user_agent` identifies `device`.
pub fn matches_user_agent(user_agent: &str, device: Device) -> bool {
    DEVICE_RES[device.index()].is_match(user_agent)
}

/// Whether the browser's user agent identifies the named device.
///
/// `device` is matched case-insensitively against `android`, `webos`,
/// `iphone`, `ipad`, `ios`, `ios7`, `blackberry`, `ie` and `opera`; any
/// other name, or `None`, checks for any mobile device. Returns `false`
/// when there is no navigator.
pub fn is_mobile_device(device: Option<&str>) -> bool {
    dom::user_agent().is_some_and(|ua| matches_user_agent(&ua, Device::from(device)))
}
