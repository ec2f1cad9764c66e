/// Escape text for use inside SVG elements and attribute values.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate with one decimal. Never prints `-0.0`.
pub(crate) fn px(value: f64) -> String {
    let s = format!("{:.1}", value);
    if s == "-0.0" {
        "0.0".to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
        assert_eq!(escape("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn test_px() {
        assert_eq!(px(12.345), "12.3");
        assert_eq!(px(-0.0), "0.0");
        assert_eq!(px(-0.04), "0.0");
        assert_eq!(px(-3.0), "-3.0");
    }
}
