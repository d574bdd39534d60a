//! Query-string utilities.
//!
//! Both functions treat URLs as opaque text. Nothing is percent-encoded or
//! decoded.

use regex::{Captures, RegexBuilder};

use crate::core::error::ParamsError;
use crate::models::Params;
use crate::utils::dom;

/// Read the query parameters of `url`, or of the current location when
/// `url` is `None` or empty.
///
/// Only the text between the first and second `?` is considered, and a
/// fragment is not stripped.
pub fn get_params(url: Option<&str>) -> Result<Params, ParamsError> {
    let query = match url.filter(|u| !u.is_empty()) {
        Some(url) => url.split('?').nth(1).ok_or(ParamsError::NoQuery)?.to_string(),
        None => dom::location_query().ok_or(ParamsError::NoLocation)?,
    };
    parse_params(&query)
}

/// Split a query string (without the leading `?`) into parameters.
///
/// Pairs are separated by `&`; each pair is split on `=` and only the
/// first two pieces are kept. A query whose first pair is empty yields
/// [`ParamsError::Empty`].
pub fn parse_params(query: &str) -> Result<Params, ParamsError> {
    let mut pairs = query.split('&').peekable();
    if pairs.peek().is_none_or(|first| first.is_empty()) {
        return Err(ParamsError::Empty);
    }

    let mut params = Params::new();
    for pair in pairs {
        let mut pieces = pair.split('=');
        let key = pieces.next().unwrap_or_default();
        params.insert(key, pieces.next().map(str::to_string));
    }
    Ok(params)
}

/// Set `key` to `value` in the query string of `url`.
///
/// An existing `key` (matched case-insensitively after `?` or `&`) has its
/// value replaced in place; otherwise `key=value` is appended with `&` or
/// `?` as appropriate. `value` is inserted verbatim.
pub fn set_query_string_param(url: &str, key: &str, value: &str) -> String {
    let pattern = format!("([?|&]){}=.*?(&|#|$)", regex::escape(key));
    if let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build()
        && re.is_match(url)
    {
        return re
            .replace(url, |caps: &Captures| {
                format!("{}{}={}{}", &caps[1], key, value, &caps[2])
            })
            .into_owned();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, key, value)
}
