//! Country and locale derivation from page URLs
//!
//! Localized marketing URLs carry the market as the first path segment
//! after the host, either `cc` (two-letter country, locale identical) or
//! `cc_ll` (country and language). Anything else falls through to using
//! the raw segment for both values; URLs with no recognized host boundary
//! degrade to empty strings rather than failing the row.

/// Derive `(country, locale)` from a page URL.
pub fn country_and_locale(url: &str) -> (String, String) {
    let segment = url
        .split_once(".com/")
        .map(|(_, rest)| rest.split('/').next().unwrap_or(""))
        .unwrap_or("");

    if let Some((country, locale)) = segment.split_once('_') {
        (country.to_string(), locale.to_string())
    } else {
        // Two-letter segments double as both; so does anything else.
        (segment.to_string(), segment.to_string())
    }
}
