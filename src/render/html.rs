//! HTML rendering of fragments and of a complete result page.
//!
//! The page is self-contained: inline CSS, no scripts. Every fragment becomes
//! one `<div>` child of `<div id="resultbox">`, in append order.

use super::{Element, Fragment, html_escape};
use chrono::{DateTime, Utc};

/// Id of the container the results are appended to.
pub const RESULT_BOX_ID: &str = "resultbox";

/// Render a fragment. Markup passes through; element text is escaped.
pub fn fragment_to_html(fragment: &Fragment) -> String {
    match fragment {
        Fragment::Markup(markup) => markup.clone(),
        Fragment::Element(element) => element_to_html(element),
    }
}

pub fn element_to_html(element: &Element) -> String {
    match element {
        Element::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", html_escape(text))
        }
        Element::List { items } => {
            let items: String = items
                .iter()
                .map(|i| format!("<li>{}</li>", html_escape(i)))
                .collect();
            format!("<ul>{items}</ul>")
        }
        Element::Block { children } => {
            let inner: String = children.iter().map(element_to_html).collect();
            format!("<div>{inner}</div>")
        }
    }
}

/// Render a complete HTML document holding `fragments` in order.
pub fn render_page(title: &str, fragments: &[Fragment], generated_at: DateTime<Utc>) -> String {
    let entries: String = fragments
        .iter()
        .map(|f| format!("\n        <div>{}</div>", fragment_to_html(f)))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    <div id="{id}">{entries}
    </div>
    <footer>Generated {generated}</footer>
</body>
</html>
"#,
        title = html_escape(title),
        css = inline_css(),
        id = RESULT_BOX_ID,
        generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

fn inline_css() -> &'static str {
    "body{font-family:system-ui,sans-serif;margin:2rem;line-height:1.4}\
#resultbox>div{border-bottom:1px solid #ddd;padding:0.5rem 0}\
footer{color:#777;font-size:0.8rem;margin-top:1rem}"
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn element_text_is_escaped_but_markup_is_not() {
        let el = Fragment::Element(Element::block(vec![
            Element::heading(3, "A & B"),
            Element::list(["<Chad>"]),
        ]));
        assert_eq!(
            fragment_to_html(&el),
            "<div><h3>A &amp; B</h3><ul><li>&lt;Chad&gt;</li></ul></div>"
        );
        let mk = Fragment::Markup("<h2>x</h2>".into());
        assert_eq!(fragment_to_html(&mk), "<h2>x</h2>");
    }

    #[test]
    fn page_wraps_each_fragment_in_result_box() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let page = render_page(
            "Countries",
            &[Fragment::Markup("one".into()), Fragment::Markup("two".into())],
            at,
        );
        assert!(page.contains(r#"<div id="resultbox">"#));
        let one = page.find("<div>one</div>").unwrap();
        let two = page.find("<div>two</div>").unwrap();
        assert!(one < two);
        assert!(page.contains("Generated 2024-05-01 12:00:00 UTC"));
    }
}
