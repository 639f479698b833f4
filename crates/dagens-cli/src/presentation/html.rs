/// Escape text for use in element content and double-quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link that opens in a new browsing context without leaking the opener
pub fn external_link(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape(href),
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_external_link_escapes_both_parts() {
        assert_eq!(
            external_link("https://x.org/?a=1&b=2", "<AT&T>"),
            r#"<a href="https://x.org/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">&lt;AT&amp;T&gt;</a>"#
        );
    }
}
