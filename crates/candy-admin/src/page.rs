//! Full-page shell around the rendered sections.

use crate::escape::html_escape;

/// Head content for the page.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Inline style blocks.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// Render head content to HTML.
    ///
    /// The charset declaration always comes first.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// Page template: head, opening body markup, sections, closing markup.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub body_start: String,
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>\n".to_string(),
        }
    }

    /// The admin page shell with its header and styles.
    pub fn admin() -> Self {
        let head = HeadContent::new("Candy Shop Admin")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(ADMIN_STYLES);

        Self::new(head).with_body_start(
            r#"<body>
<header class="site-header">
    <h1 class="logo">Candy Shop Admin</h1>
</header>
<main>
"#,
        )
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Render the whole document around `sections`.
    pub fn render<S: AsRef<str>>(&self, sections: &[S]) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        for section in sections {
            html.push_str(section.as_ref());
            html.push('\n');
        }
        html.push_str(&self.body_end);
        html
    }
}

const ADMIN_STYLES: &str = r#"
body { font-family: system-ui, sans-serif; background: #fdf6fb; color: #3d2b3f; margin: 0; }
.site-header { background: #c2185b; color: #fff; padding: 16px 24px; }
main { max-width: 960px; margin: 0 auto; padding: 16px; }
.stats { display: flex; gap: 24px; margin-bottom: 16px; }
.stat-label { display: block; font-size: 12px; opacity: .7; }
.stat-value { font-size: 22px; font-weight: 600; }
.tabs { display: flex; gap: 8px; align-items: center; margin-bottom: 16px; }
.tab-btn { border: 1px solid #e6d7e9; background: #fff; border-radius: 6px; padding: 6px 12px; cursor: pointer; }
.tab-btn.active { background: #c2185b; color: #fff; }
.product-item { display: flex; justify-content: space-between; background: #fff; border-radius: 8px; padding: 12px 16px; margin-bottom: 8px; }
.price { font-weight: 600; }
.stock-low { color: #c62828; }
.stock-ok { color: #2e7d32; }
.order-qty { width: 72px; padding: 6px; border-radius: 6px; border: 1px solid #e6d7e9; margin-right: 6px; }
.loading, .error { padding: 32px; text-align: center; }
.error { color: #c62828; }
.retry-hint { text-align: center; opacity: .7; }
.notice { padding: 8px 12px; border-radius: 6px; margin-bottom: 12px; }
.notice.success { background: #e8f5e9; }
.notice.failure { background: #ffebee; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wraps_sections_in_order() {
        let html = Shell::new(HeadContent::new("T")).render(&["<p>a</p>", "<p>b</p>"]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        let a = html.find("<p>a</p>").unwrap();
        let b = html.find("<p>b</p>").unwrap();
        assert!(a < b);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_head_escapes_title() {
        let head = HeadContent::new("<Admin>").with_meta("description", "a\"b");
        let html = head.render();
        assert!(html.contains("<title>&lt;Admin&gt;</title>"));
        assert!(html.contains(r#"content="a&quot;b""#));
    }

    #[test]
    fn test_admin_shell_has_styles() {
        let html = Shell::admin().render::<&str>(&[]);
        assert!(html.contains("<style>"));
        assert!(html.contains("Candy Shop Admin"));
    }

    #[test]
    fn test_charset_is_first_in_head() {
        let html = Shell::admin().render::<&str>(&[]);
        let head = &html[html.find("<head>").unwrap() + "<head>".len()..];
        assert!(head.trim_start().starts_with(r#"<meta charset="utf-8">"#));
        assert!(!html.contains(r#"name="charset""#));
    }
}
