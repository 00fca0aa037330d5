use crate::render::Fragment;
use crate::render::html::render_page;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save results as a standalone HTML page.
pub fn save_html<P: AsRef<Path>>(fragments: &[Fragment], title: &str, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let page = render_page(title, fragments, chrono::Utc::now());
    f.write_all(page.as_bytes())?;
    Ok(())
}

/// Save results as pretty JSON array.
pub fn save_json<P: AsRef<Path>>(fragments: &[Fragment], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(fragments)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Element;
    use tempfile::tempdir;

    #[test]
    fn write_html_and_json() {
        let dir = tempdir().unwrap();
        let htmlp = dir.path().join("x.html");
        let jsonp = dir.path().join("x.json");
        let frags = vec![
            Fragment::Markup("Found 1 countries.".into()),
            Element::list(["Chad"]).into(),
        ];
        save_html(&frags, "Countries", &htmlp).unwrap();
        save_json(&frags, &jsonp).unwrap();

        let html = std::fs::read_to_string(&htmlp).unwrap();
        assert!(html.contains("<div>Found 1 countries.</div>"));
        assert!(html.contains("<li>Chad</li>"));

        let back: Vec<Fragment> =
            serde_json::from_str(&std::fs::read_to_string(&jsonp).unwrap()).unwrap();
        assert_eq!(back, frags);
    }
}
