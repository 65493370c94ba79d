use std::collections::HashSet;

use ammonia::Builder;

/// Clean API-provided rich text against ammonia's whitelist before it is
/// assigned to `innerHTML`. Scripts, event handler attributes and
/// `javascript:` urls are removed.
pub fn sanitize_html(input: &str) -> String {
    Builder::default()
        .link_rel(Some("noopener noreferrer"))
        .clean(input)
        .to_string()
}

/// Visible text of an HTML fragment, with every tag removed and entities
/// decoded. Script and style bodies are dropped with their tags.
pub fn plain_text(input: &str) -> String {
    let escaped = Builder::empty()
        .clean_content_tags(HashSet::from(["script", "style"]))
        .clean(input)
        .to_string();

    escaped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_removes_scripts_and_handlers() {
        let html = r#"<p onclick="steal()">Hello</p><script>alert(1)</script>"#;
        assert_eq!(sanitize_html(html), "<p>Hello</p>");
    }

    #[test]
    fn test_keeps_formatting() {
        let html = "<p><strong>Bold</strong> and <em>italic</em></p><br>";
        assert_eq!(sanitize_html(html), "<p><strong>Bold</strong> and <em>italic</em></p><br>");
    }

    #[test]
    fn test_removes_javascript_urls() {
        let html = r#"<a href="javascript:alert(1)">link</a>"#;
        let cleaned = sanitize_html(html);
        assert!(!cleaned.contains("javascript"));
        assert!(cleaned.contains("link"));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize_html("Once upon a time"), "Once upon a time");
    }

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(
            plain_text("<p><strong>Bold</strong> start</p><script>alert(1)</script>"),
            "Bold start"
        );
    }

    #[test]
    fn test_plain_text_decodes_entities() {
        assert_eq!(plain_text("Tom &amp; Jerry &lt;3"), "Tom & Jerry <3");
        assert_eq!(plain_text("a < b & c"), "a < b & c");
    }
}
