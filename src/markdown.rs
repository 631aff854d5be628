//! Text Rendering
//!
//! - Inline Markdown for descriptions and restrictions (pulldown-cmark)
//! - Syntax highlighting for the resource-type snippet (syntect)

use std::sync::OnceLock;

use pulldown_cmark::{html::push_html, Event, Options, Parser};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme(name: &str) -> Option<&'static Theme> {
    let themes = &THEME_SET.get_or_init(ThemeSet::load_defaults).themes;
    themes
        .get(name)
        .or_else(|| themes.get(crate::config::DEFAULT_THEME))
}

/// Render Markdown for inline use (strips the outer <p>). Raw HTML is escaped.
pub fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });
    let mut html = String::new();
    push_html(&mut html, parser);

    let trimmed = html.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// The ARM template fragment shown for a resource type
pub fn resource_type_snippet(code: &str) -> String {
    let escaped = serde_json::to_string(code).unwrap_or_else(|_| format!("\"{}\"", code));
    format!("{{ \"type\": {} }}", escaped)
}

/// Highlighted HTML for a resource type; empty code renders nothing
pub fn highlight_resource_type(code: &str, theme: &str) -> String {
    if code.trim().is_empty() {
        return String::new();
    }
    highlight_code(&resource_type_snippet(code), "json", theme)
}

fn highlight_code(code: &str, lang: &str, theme: &str) -> String {
    let ss = get_syntax_set();
    let syntax = ss
        .find_syntax_by_token(lang)
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    get_theme(theme)
        .and_then(|theme| highlighted_html_for_string(code, ss, syntax, theme).ok())
        .unwrap_or_else(|| format!("<pre><code>{}</code></pre>", escape_html(code)))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_inline("Lowercase letters and numbers."), "Lowercase letters and numbers.");
    }

    #[test]
    fn test_inline_code_span() {
        assert_eq!(
            render_inline("Can't use `<>*%`."),
            "Can't use <code>&lt;&gt;*%</code>."
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("a <script>alert(1)</script> b");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_snippet_escapes_code() {
        assert_eq!(
            resource_type_snippet("Microsoft.Resources/resourceGroups"),
            "{ \"type\": \"Microsoft.Resources/resourceGroups\" }"
        );
        assert_eq!(resource_type_snippet("a\"b"), "{ \"type\": \"a\\\"b\" }");
    }

    #[test]
    fn test_highlight_empty_code() {
        assert_eq!(highlight_resource_type("", "base16-ocean.dark"), "");
        assert_eq!(highlight_resource_type("   ", "base16-ocean.dark"), "");
    }

    #[test]
    fn test_highlight_unknown_theme_falls_back() {
        let html = highlight_resource_type("Microsoft.KeyVault/vaults", "no-such-theme");
        assert!(html.starts_with("<pre"));
        assert!(html.contains("KeyVault"));
    }
}
