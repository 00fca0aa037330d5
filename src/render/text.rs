//! Plain-text rendering of fragments, for terminals and logs.

use super::{Element, Fragment};

/// Render one fragment as lines of text (no trailing newline).
///
/// Headings become `#`-prefixed lines and list items `- ` lines. Markup is
/// reduced to its text with `<br>` and block boundaries as line breaks.
pub fn fragment_to_text(fragment: &Fragment) -> String {
    let lines = match fragment {
        Fragment::Markup(markup) => markup_to_lines(markup),
        Fragment::Element(element) => {
            let mut lines = Vec::new();
            element_lines(element, &mut lines);
            lines
        }
    };
    lines.join("\n")
}

fn element_lines(element: &Element, lines: &mut Vec<String>) {
    match element {
        Element::Heading { level, text } => {
            lines.push(format!("{} {text}", "#".repeat(usize::from(*level))));
        }
        Element::List { items } => lines.extend(items.iter().map(|i| format!("- {i}"))),
        Element::Block { children } => {
            for child in children {
                element_lines(child, lines);
            }
        }
    }
}

fn markup_to_lines(markup: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut chars = markup.chars();
    while let Some(ch) = chars.next() {
        if ch != '<' {
            cur.push(ch);
            continue;
        }
        let tag: String = chars.by_ref().take_while(|&c| c != '>').collect();
        let name = tag
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_ascii_lowercase();
        match name.as_str() {
            "br" | "div" | "p" | "ul" | "li" => flush_line(&mut cur, &mut lines),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                flush_line(&mut cur, &mut lines);
                if !tag.starts_with('/') {
                    let level = usize::from(name.as_bytes()[1] - b'0');
                    cur.push_str(&"#".repeat(level));
                    cur.push(' ');
                }
            }
            _ => {}
        }
    }
    flush_line(&mut cur, &mut lines);
    lines
}

fn flush_line(cur: &mut String, lines: &mut Vec<String>) {
    let line = unescape(cur.trim());
    if !line.is_empty() {
        lines.push(line);
    }
    cur.clear();
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_headings_and_breaks_become_lines() {
        let f = Fragment::Markup(
            "<h2>2 countries:</h2><div>Bosnia &amp; Herzegovina<br>Chad</div><h2>0 Non-members:</h2><div></div>"
                .into(),
        );
        assert_eq!(
            fragment_to_text(&f),
            "## 2 countries:\nBosnia & Herzegovina\nChad\n## 0 Non-members:"
        );
    }

    #[test]
    fn plain_string_is_one_line() {
        let f = Fragment::Markup("Found 3 countries.".into());
        assert_eq!(fragment_to_text(&f), "Found 3 countries.");
    }

    #[test]
    fn element_tree_flattens_in_order() {
        let f = Fragment::Element(Element::block(vec![
            Element::heading(2, "By region"),
            Element::block(vec![Element::heading(3, "Caribbean"), Element::list(["Cuba"])]),
        ]));
        assert_eq!(fragment_to_text(&f), "## By region\n### Caribbean\n- Cuba");
    }
}
