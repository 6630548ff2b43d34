//! Argument value parsing

/// Parse a repeatable `key=value` property argument.
/// The value may itself contain `=`; only the first one splits.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected <key>=<value>, got '{}'", s)),
    }
}
