//! Key-tag grammar.
//!
//! A key tag is either `-` followed by exactly one non-dash character or `--`
//! followed by two or more characters. Everything else is a value.

/// Returns `true` if `token` is written like a key.
///
/// ```
/// use kwparse::is_key_tag;
///
/// assert!(is_key_tag("-n"));
/// assert!(is_key_tag("--name"));
/// assert!(!is_key_tag("--n"));
/// assert!(!is_key_tag("-ne"));
/// assert!(!is_key_tag("-"));
/// assert!(!is_key_tag("value"));
/// ```
pub fn is_key_tag(token: &str) -> bool {
    key_name(token).is_some()
}

/// Strips the dash prefix of a key tag, `None` if `token` is not one.
pub fn key_name(token: &str) -> Option<&str> {
    if let Some(long) = token.strip_prefix("--") {
        return if long.chars().count() >= 2 { Some(long) } else { None };
    }
    let short = token.strip_prefix('-')?;
    let mut chars = short.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '-' => Some(short),
        _ => None,
    }
}

pub(crate) fn is_help(token: &str) -> bool {
    token == "-h" || token == "--help"
}

/// Returns `true` if `-h` or `--help` appears anywhere in `tokens`.
pub fn contains_help<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|it| is_help(it.as_ref()))
}
