use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::all();
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_html(&raw_html)
}

/// Cleans user-supplied rich text before it is stored. Markdown passes through
/// untouched while unsafe HTML is stripped.
pub fn sanitize_rich_text(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    sanitize_html(trimmed)
}

fn sanitize_html(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scripts_from_rich_text() {
        let cleaned = sanitize_rich_text("<p>Hello</p><script>alert(1)</script>");
        assert_eq!(cleaned, "<p>Hello</p>");
    }

    #[test]
    fn blank_rich_text_is_empty() {
        assert_eq!(sanitize_rich_text("   \n"), "");
    }

    #[test]
    fn markdown_renders_to_safe_html() {
        let html = safe_markdown_to_html("**Rust** <img src=x onerror=alert(1)>");
        assert!(html.contains("<strong>Rust</strong>"));
        assert!(!html.contains("onerror"));
    }
}
