//! Server-side HTML pages.
//!
//! Generated model markup is embedded verbatim (the markup is the product);
//! anything echoed back from user input is escaped first.

use storyforge_core::StoryEntry;

/// Escape text for safe embedding in HTML body or attribute positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}
    textarea {{ width: 100%; height: 6rem; }}
    .error {{ color: #b00020; }}
    img {{ max-width: 100%; }}
  </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn form_page() -> String {
    page(
        "Storyforge",
        r#"<h1>Storyforge</h1>
<p>Describe a software feature and get user stories, acceptance criteria and test scenarios.</p>
<form method="post" action="/stories">
  <textarea name="feature" placeholder="e.g. users can reset their password by email"></textarea>
  <p><button type="submit">Generate stories</button></p>
</form>
<form method="post" action="/wireframe">
  <textarea name="feature" placeholder="e.g. users can reset their password by email"></textarea>
  <p><button type="submit">Generate wireframe</button></p>
</form>"#,
    )
}

pub fn stories_page(entry: &StoryEntry, id: &str) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<p><strong>Feature</strong>: {feature}</p>
{stories}
<form method="post" action="/stories/tests">
  <input type="hidden" name="id" value="{id}">
  <p><button type="submit">Generate test code</button></p>
</form>
<p><a href="/stories?id={id}">Permalink</a> · <a href="/">Start over</a></p>"#,
        title = escape(&entry.title),
        feature = escape(&entry.feature),
        stories = entry.stories_html,
        id = escape(id),
    );
    page(&entry.title, &body)
}

pub fn tests_page(test_html: &str, id: &str) -> String {
    let body = format!(
        r#"<h1>Test code</h1>
{test_html}
<p><a href="/stories?id={id}">Back to stories</a> · <a href="/">Start over</a></p>"#,
        id = escape(id),
    );
    page("Test code", &body)
}

pub fn wireframe_page(feature: &str, image_url: &str) -> String {
    let body = format!(
        r#"<h1>Wireframe</h1>
<p><strong>Feature</strong>: {feature}</p>
<p><img src="{url}" alt="Generated wireframe"></p>
<p><a href="/">Start over</a></p>"#,
        feature = escape(feature),
        url = escape(image_url),
    );
    page("Wireframe", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Sorry</h1>
<p class="error">{}</p>
<p><a href="/">Start over</a></p>"#,
        escape(message),
    );
    page("Sorry", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn stories_page_embeds_markup_verbatim_and_escapes_feature() {
        let entry = StoryEntry::new(
            "a <script> feature".into(),
            "<h3>Story 1</h3>".into(),
            "My Title".into(),
        );
        let html = stories_page(&entry, "abc123");
        assert!(html.contains("<h3>Story 1</h3>"));
        assert!(html.contains("a &lt;script&gt; feature"));
        assert!(html.contains(r#"name="id" value="abc123""#));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page("bad <input>");
        assert!(html.contains("bad &lt;input&gt;"));
    }
}
