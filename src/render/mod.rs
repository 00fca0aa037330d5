//! Result fragments and the sinks that display them.
//!
//! A pipeline hands each finished result to a [`ResultSink`] as a
//! [`Fragment`]: either a preformatted markup string or a small structured
//! [`Element`] tree. Sinks append; they never reorder or deduplicate.

pub mod html;
pub mod text;

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Structured content, rendered with every text node escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Heading { level: u8, text: String },
    List { items: Vec<String> },
    Block { children: Vec<Element> },
}

impl Element {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Element::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Element::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn block(children: Vec<Element>) -> Self {
        Element::Block { children }
    }
}

/// One entry appended to the result surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Fragment {
    /// Trusted markup, inserted as-is. Callers escape API text with [`html_escape`].
    Markup(String),
    Element(Element),
}

impl From<Element> for Fragment {
    fn from(e: Element) -> Self {
        Fragment::Element(e)
    }
}

/// A display surface that results are appended to.
///
/// Concurrent callers are serialized. A batch passed to [`ResultSink::add_results`]
/// lands contiguously: no other caller's entry can appear inside it.
pub trait ResultSink: Sync {
    /// Append `fragments` in order, as one uninterrupted run.
    fn add_results(&self, fragments: Vec<Fragment>);

    /// Append a single entry.
    fn add_result(&self, fragment: Fragment) {
        self.add_results(vec![fragment]);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory result surface (`#resultbox`), kept in append order.
#[derive(Debug, Default)]
pub struct ResultBox {
    entries: Mutex<Vec<Fragment>>,
}

impl ResultBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries appended so far.
    pub fn fragments(&self) -> Vec<Fragment> {
        lock(&self.entries).clone()
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.entries
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultSink for ResultBox {
    fn add_results(&self, fragments: Vec<Fragment>) {
        lock(&self.entries).extend(fragments);
    }
}

/// Streams every fragment as plain text as soon as it is appended.
#[derive(Debug)]
pub struct TextSink<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ResultSink for TextSink<W> {
    fn add_results(&self, fragments: Vec<Fragment>) {
        let rendered: Vec<String> = fragments.iter().map(text::fragment_to_text).collect();
        let mut out = lock(&self.out);
        let written = rendered
            .iter()
            .try_for_each(|r| writeln!(out, "{r}"))
            .and_then(|()| out.flush());
        if let Err(e) = written {
            log::warn!("could not write result: {e}");
        }
    }
}

/// Escape text for inclusion in HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
