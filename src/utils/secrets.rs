const VISIBLE_EDGE: usize = 4;
const MASK: &str = "****";

/// Mask a secret for display, keeping a few leading and trailing characters
/// so two keys can still be told apart. Short secrets are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= VISIBLE_EDGE * 3 {
        return MASK.to_string();
    }

    let head: String = chars[..VISIBLE_EDGE].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_EDGE..].iter().collect();
    format!("{head}{MASK}{tail}")
}

/// Strip an optional `0x`/`0X` prefix from a hex string.
pub fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
