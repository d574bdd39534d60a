//! Library configuration.
//!
//! Centralizes the constants the DOM helpers and string utilities share:
//! attribute values written by the element factories, the patterns used by
//! linkification, and the user-agent table used for device sniffing.

// =============================================================================
// Element Factories
// =============================================================================

/// Anchor target that opens the link in a new browsing context.
pub const NEW_CONTEXT_TARGET: &str = "_blank";

/// Stylesheet link attributes.
pub mod stylesheet {
    /// MIME type written on `<link>` tags.
    pub const TYPE: &str = "text/css";
    /// Relationship written on `<link>` tags.
    pub const REL: &str = "stylesheet";
}

/// MIME type written on `<script>` tags.
pub const SCRIPT_TYPE: &str = "text/javascript";

/// Tracking pixel style. The image is kept in the layout but never shown.
pub mod pixel {
    pub const VISIBILITY: &str = "hidden";
    pub const WIDTH: &str = "0px";
    pub const HEIGHT: &str = "0px";
}

/// Tag name of the throwaway container used to serialize an element.
pub const SCRATCH_TAG: &str = "div";

// =============================================================================
// Events
// =============================================================================

/// Event fired when a script, stylesheet or image finishes loading.
pub const LOAD_EVENT: &str = "load";

/// Event fired when a script, stylesheet or image fails to load.
pub const ERROR_EVENT: &str = "error";

// =============================================================================
// Linkification
// =============================================================================

/// Patterns used to find tokens in free text.
pub mod patterns {
    /// `#tag` runs.
    pub const HASHTAG: &str = r"[#]+[A-Za-z0-9\-_]+";
    /// `@user` runs.
    pub const USERNAME: &str = r"[@]+[A-Za-z0-9\-_]+";
    /// Scheme-qualified absolute URLs.
    pub const URL: &str = r"[A-Za-z]+://[A-Za-z0-9\-_]+\.[A-Za-z0-9\-_:%&~?/.=]+";
    /// `{{name}}` placeholders inside URL templates.
    pub const PLACEHOLDER: &str = r"\{\{[A-Za-z0-9_]+\}\}";
    /// Angle-bracket tags.
    pub const TAG: &str = r"(<([^>]+)>)";
}

/// Percent-encoded form of `#`, used when a hashtag lands in a URL.
pub const ENCODED_HASH: &str = "%23";

// =============================================================================
// Device Sniffing
// =============================================================================

/// User-agent patterns, matched case-insensitively.
pub mod user_agents {
    pub const ANDROID: &str = "Android";
    pub const WEBOS: &str = "webOS";
    pub const IPHONE: &str = "iPhone";
    pub const IPAD: &str = "iPad";
    pub const IOS: &str = "(iPhone|iPad)";
    pub const IOS7: &str = r"(iPad|iPhone);.*CPU.*OS 7_\d";
    pub const BLACKBERRY: &str = "BlackBerry";
    pub const IE_MOBILE: &str = "IEMobile";
    pub const OPERA_MINI: &str = "Opera Mini";
    /// Any of the above, plus iPod.
    pub const ANY_MOBILE: &str = "(Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini)";
}

// =============================================================================
// Mixin
// =============================================================================

/// Names never copied into a consumer namespace by [`crate::Registry::mixin`].
pub const RESERVED_EXPORTS: &[&str] = &["domu", "validate", "_"];
