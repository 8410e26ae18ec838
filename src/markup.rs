//! Document element-id indexes.
//!
//! A [`Registry`](crate::registry::Registry) never walks markup itself; it
//! asks a [`DocumentIndex`] which element ids exist. [`ElementIndex`] is the
//! in-memory implementation, [`HtmlIndex`] scans an XHTML document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::Result;

/// Read-only view of the element ids in a document.
///
/// `element_ids` reports ids in document order, one entry per occurrence,
/// and reflects the document as of the call. Ids that appear more than once
/// appear more than once in the result; the registry rejects such documents
/// at build time.
pub trait DocumentIndex {
    fn element_ids(&self) -> Vec<String>;

    /// Check whether any element has the given id.
    fn has_element(&self, id: &str) -> bool {
        self.element_ids().iter().any(|existing| existing == id)
    }
}

impl<D: DocumentIndex + ?Sized> DocumentIndex for &D {
    fn element_ids(&self) -> Vec<String> {
        (**self).element_ids()
    }

    fn has_element(&self, id: &str) -> bool {
        (**self).has_element(id)
    }
}

/// An in-memory id index, useful for tests and for documents that are
/// indexed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ElementIndex {
    ids: Vec<String>,
}

impl ElementIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an element id occurrence.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.push(id.into());
    }
}

impl DocumentIndex for ElementIndex {
    fn element_ids(&self) -> Vec<String> {
        self.ids.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for ElementIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Id index built by streaming over an XHTML document.
///
/// Only `id` attributes are examined; the document is never fully parsed
/// into a tree. Empty `id=""` attributes are ignored.
#[derive(Debug, Clone, Default)]
pub struct HtmlIndex {
    ids: Vec<String>,
}

impl HtmlIndex {
    /// Scan a document held in memory.
    pub fn parse(html: &str) -> Result<Self> {
        let mut reader = Reader::from_str(html);
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;

        let mut ids = Vec::new();
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref().eq_ignore_ascii_case(b"id") && !attr.value.is_empty() {
                            ids.push(String::from_utf8_lossy(&attr.value).into_owned());
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
        }

        Ok(Self { ids })
    }

    /// Read and scan a document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Self::parse(&html)
    }
}

impl DocumentIndex for HtmlIndex {
    fn element_ids(&self) -> Vec<String> {
        self.ids.clone()
    }
}

/// Ids that occur more than once, listed once each in first-occurrence
/// order. Empty ids are skipped.
pub(crate) fn duplicate_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for id in ids {
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id.as_str()) && !duplicates.contains(id) {
            duplicates.push(id.clone());
        }
    }
    duplicates
}
