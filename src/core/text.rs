//! Text linkification and tag stripping.
//!
//! All functions return new strings and never touch a live document.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::config::{ENCODED_HASH, patterns};

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::HASHTAG).expect("Failed to compile hashtag regex"));
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::USERNAME).expect("Failed to compile username regex"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::URL).expect("Failed to compile URL regex"));
static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(patterns::PLACEHOLDER).expect("Failed to compile placeholder regex")
});
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(patterns::TAG).expect("Failed to compile tag regex"));

/// Wrap `text` in an anchor pointing at `href`.
///
/// Double quotes in `href` are escaped; `text` is inserted as is.
pub fn link(text: &str, href: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href.replace('"', "&quot;"), text)
}

/// Put `value` into the first `{{name}}` placeholder of `template`.
fn fill_template(template: &str, value: &str) -> String {
    PLACEHOLDER_RE
        .replacen(template, 1, NoExpand(value))
        .into_owned()
}

/// Turn every `#tag` in `text` into a link built from `url_template`.
///
/// The tag (with its leading `#` encoded as `%23`) fills the first
/// `{{...}}` placeholder of the template.
///
/// ```ignore
/// let html = domu::parse_hashtag("some content #foo", "http://example.com/?search={{hashtag}}");
/// assert_eq!(html, r#"some content <a href="http://example.com/?search=%23foo">#foo</a>"#);
/// ```
pub fn parse_hashtag(text: &str, url_template: &str) -> String {
    HASHTAG_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let tag = token.replacen('#', ENCODED_HASH, 1);
            link(token, &fill_template(url_template, &tag))
        })
        .into_owned()
}

/// Turn every `@user` in `text` into a link built from `url_template`.
///
/// The username without its leading `@` fills the first placeholder.
pub fn parse_username(text: &str, url_template: &str) -> String {
    USERNAME_RE
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            let username = token.replacen('@', "", 1);
            link(token, &fill_template(url_template, &username))
        })
        .into_owned()
}

/// Turn every absolute URL in `text` into a link to itself.
pub fn parse_url(text: &str) -> String {
    URL_RE
        .replace_all(text, |caps: &Captures| link(&caps[0], &caps[0]))
        .into_owned()
}

/// Remove every `<...>` tag from `text`.
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_escapes_quotes() {
        assert_eq!(
            link("x", "http://a.com/?q=\"y\""),
            "<a href=\"http://a.com/?q=&quot;y&quot;\">x</a>"
        );
    }

    #[test]
    fn test_parse_hashtag() {
        let html = parse_hashtag("text #foo", "http://x.com/?q={{tag}}");
        assert_eq!(html, "text <a href=\"http://x.com/?q=%23foo\">#foo</a>");
    }

    #[test]
    fn test_parse_hashtag_each_tag_gets_own_url() {
        let html = parse_hashtag(
            "loremipsum http://example.com/ #foo #bar",
            "http://twitter.com/search?q={{tag}}",
        );
        assert!(html.contains("<a href=\"http://twitter.com/search?q=%23foo\">#foo</a>"));
        assert!(html.contains("<a href=\"http://twitter.com/search?q=%23bar\">#bar</a>"));
    }

    #[test]
    fn test_parse_hashtag_fills_first_placeholder_only() {
        let html = parse_hashtag("#a", "http://x.com/{{t}}/{{t}}");
        assert_eq!(html, "<a href=\"http://x.com/%23a/{{t}}\">#a</a>");
    }

    #[test]
    fn test_parse_username() {
        let html = parse_username("text @bar", "http://x.com/{{u}}");
        assert_eq!(html, "text <a href=\"http://x.com/bar\">@bar</a>");
    }

    #[test]
    fn test_parse_username_stops_at_punctuation() {
        let html = parse_username("hi @a_b!", "http://x.com/{{u}}");
        assert_eq!(html, "hi <a href=\"http://x.com/a_b\">@a_b</a>!");
    }

    #[test]
    fn test_parse_url() {
        let html = parse_url("see http://example.com/ now");
        assert_eq!(
            html,
            "see <a href=\"http://example.com/\">http://example.com/</a> now"
        );
    }

    #[test]
    fn test_parse_url_leaves_plain_text() {
        assert_eq!(parse_url("no links here"), "no links here");
        assert_eq!(parse_url("example.com"), "example.com");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p><strong>foo</strong></p>"), "foo");
        assert_eq!(strip_tags(""), "");
        assert_eq!(strip_tags("a < b"), "a < b");
    }
}
