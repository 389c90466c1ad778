//! Table-of-contents topics.
//!
//! TOC pages mark their entries with anchors classed `toc1` .. `toc9`, the digit
//! being the heading level. [`TocOutline`] nests those anchors into a tree.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TOC_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^toc([1-9])$").expect("static regex"));

/// Returns the heading level of a TOC anchor class (`toc3` -> 3).
pub fn toc_level(class_name: &str) -> Option<u8> {
    TOC_CLASS
        .captures(class_name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// One entry of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub text: String,
    pub level: u8,
    pub href: String,
    pub children: Vec<Topic>,
}

impl Topic {
    pub fn new(text: impl Into<String>, level: u8, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
            href: href.into(),
            children: Vec::new(),
        }
    }

    /// The level-0 root every page outline hangs off.
    pub fn root() -> Self {
        Self::new("", 0, "index.html")
    }

    /// Number of topics below this one.
    pub fn descendants(&self) -> usize {
        self.children.iter().map(|c| 1 + c.descendants()).sum()
    }
}

/// A nested outline built from the TOC anchors of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocOutline {
    root: Topic,
}

impl Default for TocOutline {
    fn default() -> Self {
        Self { root: Topic::root() }
    }
}

impl TocOutline {
    /// Builds the outline from `(class, text, href)` triples in document order.
    ///
    /// Anchors whose class is not a TOC class are skipped. Each topic becomes a
    /// child of the closest preceding topic with a lower level, so a jump from
    /// `toc1` to `toc3` still nests under the `toc1` entry.
    pub fn from_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: AsRef<str>,
    {
        let mut outline = Self::default();
        for (class, text, href) in anchors {
            if let Some(level) = toc_level(class.as_ref()) {
                outline.push(Topic::new(text.as_ref(), level, href.as_ref()));
            }
        }
        outline
    }

    /// Appends `topic` at the end of the outline.
    pub fn push(&mut self, topic: Topic) {
        let mut parent = &mut self.root;
        while parent
            .children
            .last()
            .is_some_and(|last| last.level < topic.level)
        {
            let last = parent.children.len() - 1;
            parent = &mut parent.children[last];
        }
        parent.children.push(topic);
    }

    pub fn root(&self) -> &Topic {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.root.descendants()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
