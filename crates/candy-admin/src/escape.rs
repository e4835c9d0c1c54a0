//! HTML escaping for text inserted into markup.

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x" title='y'>&</a>"#),
            "&lt;a href=&quot;x&quot; title=&#39;y&#39;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_ampersand_is_escaped_once() {
        assert_eq!(html_escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(html_escape("Pão de Mel • Chocolate"), "Pão de Mel • Chocolate");
    }
}
