use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Render markdown to HTML that is safe to assign to `innerHTML`.
///
/// Raw HTML in the input is emitted as escaped text and script-capable link
/// targets are replaced with `#`.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).map(sanitize_event);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn sanitize_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    if UNSAFE_SCHEMES.iter().any(|scheme| normalized.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown() {
        let md = "# Hello\n\nThis is **bold** text.";
        let html = render_markdown(md);
        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_render_bullets() {
        let html = render_markdown("- Revitalift serum\n- Elvive shampoo");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>Revitalift serum</li>"));
    }

    #[test]
    fn test_plain_reply_is_wrapped_in_paragraph() {
        assert_eq!(render_markdown("Hi"), "<p>Hi</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert('x')</script>\n\nhello <img src=x onerror=alert(1)>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_markdown("[click](javascript:alert(1)) and [also](  JavaScript:void(0))");
        assert!(!html.to_lowercase().contains("javascript:"));
        assert!(html.contains(r##"href="#""##));
    }

    #[test]
    fn test_regular_links_survive() {
        let html = render_markdown("[shop](https://www.loreal.com/)");
        assert!(html.contains(r#"href="https://www.loreal.com/""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
