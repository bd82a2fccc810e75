//! src/util/data_generator.rs
//! Random cookies for the demo host and for tests.

use std::path::Path;

use compact_str::CompactString;

use crate::{error::AppError, model::cookie::CookieItem};

const NAME_ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DOMAINS: [&str; 6] = [
    "example.com",
    ".example.com",
    "api.example.org",
    "localhost",
    "shop.test",
    "static.cdn.net",
];

const PATHS: [&str; 4] = ["/", "/api", "/account", "/static/assets"];

/// `count` cookies with random names and values. Domains and paths cycle
/// through a fixed pool so filtering by location has something to match.
pub fn generate_cookies(count: usize) -> Vec<CookieItem> {
    (0..count)
        .map(|i| {
            let name: CompactString = nanoid::nanoid!(8, &NAME_ALPHABET).into();
            let value: CompactString = nanoid::nanoid!(24).into();
            let domain = DOMAINS[i % DOMAINS.len()];
            let path = PATHS[(i / DOMAINS.len()) % PATHS.len()];
            CookieItem::new(name, value, domain, path)
        })
        .collect()
}

/// Reads a JSON array of cookies as exported by the demo host.
pub fn load_cookies(path: &Path) -> Result<Vec<CookieItem>, AppError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
