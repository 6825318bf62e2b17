//! Cookie header wire format, shared by every `document.cookie` backend.

/// Entry written on `set`: root path scope, browser-default lifetime.
pub fn format_pair(name: &str, value: &str) -> String {
    format!("{}={}; path=/", name, value)
}

/// Entry written on `erase`: epoch expiry removes the cookie.
pub fn format_expired(name: &str) -> String {
    format!("{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT;", name)
}

/// Find `name` in a raw jar string ("a=1; b=2"). Segments are trimmed,
/// the first exact-name match wins, and the value runs to the end of the
/// segment (values may themselves contain '=').
pub fn lookup(jar: &str, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    jar.split(';')
        .map(str::trim)
        .find(|entry| entry.starts_with(&prefix))
        .map(|entry| entry[prefix.len()..].to_string())
}
