use storefront_core::config::SearchSettings;
use storefront_core::types::{ScoringWeights, SearchRecord};

use crate::filter::{apply, CategoryOptions, FilterState};
use crate::indexer::SearchIndex;
use crate::scoring::{ScoredRecord, ScoringEngine};

/// score -> sanitize filter -> filter/sort, over an index built once.
#[derive(Debug, Clone)]
pub struct SearchPipeline {
    index: SearchIndex,
    engine: ScoringEngine,
}

impl SearchPipeline {
    pub fn new(index: SearchIndex, weights: ScoringWeights) -> Self {
        Self { index, engine: ScoringEngine::new(weights) }
    }

    pub fn from_settings(index: SearchIndex, settings: &SearchSettings) -> Self {
        Self::new(index, settings.weights)
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn category_options(&self) -> &CategoryOptions {
        self.index.category_options()
    }

    pub fn run(&self, query: &str, filter: &FilterState) -> SearchOutcome<'_> {
        let scored = self.engine.score(query, self.index.records());
        let filter = filter.sanitized(self.index.category_options());
        SearchOutcome { query: query.to_string(), hits: apply(scored, &filter) }
    }
}

/// Final ordered hits plus what the presentation layer needs for its
/// "N results for 'query'" line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    query: String,
    hits: Vec<ScoredRecord<'a>>,
}

impl<'a> SearchOutcome<'a> {
    /// The raw query as typed, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the user typed anything at all. Whitespace counts as input,
    /// which tells "no query yet" apart from "query matched nothing".
    pub fn has_input(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn hits(&self) -> &[ScoredRecord<'a>] {
        &self.hits
    }

    pub fn records(&self) -> impl Iterator<Item = &'a SearchRecord> + '_ {
        self.hits.iter().map(|h| h.record)
    }

    pub fn count(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn summary(&self) -> Option<String> {
        if !self.has_input() {
            return None;
        }
        let noun = if self.count() == 1 { "resultado" } else { "resultados" };
        Some(format!("{} {} para \"{}\"", self.count(), noun, self.query))
    }

    pub fn to_records(&self) -> Vec<SearchRecord> {
        self.records().cloned().collect()
    }
}
