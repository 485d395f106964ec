/// `[label](href)` links.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';

    /// Schemes that are never emitted as a clickable target.
    pub const UNSAFE_SCHEMES: &'static [&'static str] = &["javascript:", "vbscript:", "data:"];

    /// Returns true if `href` may be rendered as an anchor target.
    pub fn is_safe_target(href: &str) -> bool {
        let normalized: String = href
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect::<String>()
            .to_ascii_lowercase();
        !Self::UNSAFE_SCHEMES
            .iter()
            .any(|scheme| normalized.starts_with(scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_targets_are_safe() {
        assert!(Link::is_safe_target("https://example.com"));
        assert!(Link::is_safe_target("/relative/path"));
    }

    #[test]
    fn script_targets_are_rejected() {
        assert!(!Link::is_safe_target("javascript:alert(1)"));
        assert!(!Link::is_safe_target(" JavaScript:alert(1)"));
        assert!(!Link::is_safe_target("java\tscript:alert(1)"));
        assert!(!Link::is_safe_target("data:text/html;base64,AAAA"));
    }
}
