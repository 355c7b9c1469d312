/*
 * payload.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Answer and source payloads as returned by the research service.
 */

use crate::source::{SourceRecord, SourceTable};
use serde::Deserialize;

/// The research service response.
///
/// Accepts either the full `{ final_answer, research_data: { sources } }`
/// shape or a bare `{ text, sources }` answer payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResearchPayload {
    #[serde(default, alias = "text")]
    pub final_answer: Option<String>,
    #[serde(default)]
    pub research_data: Option<ResearchData>,
    #[serde(default)]
    pub sources: Option<Vec<SourceRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResearchData {
    #[serde(default)]
    pub sources: Option<Vec<SourceRecord>>,
}

impl ResearchPayload {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    /// The answer text; a null or missing answer is the empty string.
    pub fn answer_text(&self) -> &str {
        self.final_answer.as_deref().unwrap_or("")
    }

    /// Source table from `research_data.sources`, falling back to a
    /// top-level `sources` list.
    pub fn source_table(&self) -> SourceTable {
        let records = self
            .research_data
            .as_ref()
            .and_then(|data| data.sources.clone())
            .or_else(|| self.sources.clone())
            .unwrap_or_default();
        SourceTable::from_records(records)
    }
}
