//! Location Bindings
//!
//! Deep links (`#<slug>`) and the query string, read from and written to
//! `window.location`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::JsValue;

/// Characters escaped in the fragment
const FRAGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Slug named by a location hash, if any
pub fn slug_from_hash(hash: &str) -> Option<String> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    let slug = decoded.trim();
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

pub fn hash_for_slug(slug: &str) -> String {
    format!("#{}", utf8_percent_encode(slug, FRAGMENT_ENCODE_SET))
}

// ========================
// Browser access
// ========================

fn location() -> Result<web_sys::Location, String> {
    web_sys::window()
        .map(|w| w.location())
        .ok_or_else(|| "no window".to_string())
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

pub fn current_hash() -> Result<String, String> {
    location()?.hash().map_err(js_err)
}

pub fn current_query() -> Result<String, String> {
    location()?.search().map_err(js_err)
}

/// Replace the URL without adding a history entry or firing `hashchange`.
/// `None` drops the fragment.
pub fn replace_hash(slug: Option<&str>) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let location = window.location();
    let mut url = format!(
        "{}{}",
        location.pathname().map_err(js_err)?,
        location.search().map_err(js_err)?
    );
    if let Some(slug) = slug {
        url.push_str(&hash_for_slug(slug));
    }
    window
        .history()
        .map_err(js_err)?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_hash() {
        assert_eq!(slug_from_hash("#kv").as_deref(), Some("kv"));
        assert_eq!(slug_from_hash("kv").as_deref(), Some("kv"));
        assert_eq!(slug_from_hash("#a%20b").as_deref(), Some("a b"));
        assert_eq!(slug_from_hash("#"), None);
        assert_eq!(slug_from_hash(""), None);
        assert_eq!(slug_from_hash("#%20%20"), None);
    }

    #[test]
    fn test_hash_for_slug() {
        assert_eq!(hash_for_slug("rg"), "#rg");
        assert_eq!(hash_for_slug("a b#c"), "#a%20b%23c");
    }
}
