//! Guest Token
//!
//! Personal links carry the guest token as `?t=...`; links routed through a
//! hash router carry it as `#/...?t=...`.

use percent_encoding::percent_decode_str;

const TOKEN_PARAM: &str = "t";

/// Token from `location.search`, falling back to a query inside `location.hash`
pub fn guest_token(search: &str, hash: &str) -> Option<String> {
    query_param(search.trim_start_matches('?'), TOKEN_PARAM)
        .or_else(|| {
            hash.split_once('?')
                .and_then(|(_, query)| query_param(query, TOKEN_PARAM))
        })
}

/// First non-blank value of `name` in a query string, decoded like `URLSearchParams`
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
        .next()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
