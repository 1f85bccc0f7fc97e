//! Cookie header parsing and building.

use axum::http::{HeaderMap, header};

/// The value of the named cookie in the request's `Cookie` header, if any.
#[must_use]
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// A `Set-Cookie` value scoped to the whole site and pinned to same-site
/// requests.
#[must_use]
pub fn site_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; Path=/; SameSite=Strict")
}
