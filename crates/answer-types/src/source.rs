/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// A source record as delivered by the research service.
///
/// Missing fields deserialize as empty strings and unknown fields
/// (e.g. the fetched `content`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
}

/// An evidentiary source backing an answer.
///
/// `index` mirrors the source's 1-based position in its [`SourceTable`].
/// Lookups never consult it; the table position is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub index: usize,
    pub url: String,
    pub title: String,
}

/// Ordered list of sources. Position `i` answers citation `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceTable {
    sources: Vec<Source>,
}

impl SourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from payload records, numbering them by position.
    pub fn from_records(records: impl IntoIterator<Item = SourceRecord>) -> Self {
        let sources = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| Source {
                index: i + 1,
                url: record.url,
                title: record.title,
            })
            .collect();
        Self { sources }
    }

    /// Look up the source for a 1-based citation number.
    ///
    /// Returns `None` for `0` and for numbers past the end of the table.
    pub fn get(&self, number: usize) -> Option<&Source> {
        number
            .checked_sub(1)
            .and_then(|position| self.sources.get(position))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }
}

impl FromIterator<SourceRecord> for SourceTable {
    fn from_iter<T: IntoIterator<Item = SourceRecord>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a SourceTable {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
