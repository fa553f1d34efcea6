use std::time::{Duration, Instant};

use storefront_core::config::SearchSettings;

use crate::bridge::QueryBridge;
use crate::filter::{FilterState, SortMode};
use crate::indexer::SearchIndex;
use crate::location::Location;
use crate::pipeline::{SearchOutcome, SearchPipeline};

/// One user's search screen: the pipeline over a fixed index, the query
/// bridge and the current filter selection. Every change recomputes
/// synchronously; nothing is cached between calls.
pub struct SearchSession<L: Location> {
    pipeline: SearchPipeline,
    bridge: QueryBridge<L>,
    filter: FilterState,
}

impl<L: Location> SearchSession<L> {
    pub fn new(pipeline: SearchPipeline, bridge: QueryBridge<L>) -> Self {
        Self { pipeline, bridge, filter: FilterState::default() }
    }

    pub fn from_settings(index: SearchIndex, settings: &SearchSettings, location: L) -> Self {
        let bridge = QueryBridge::new(location, settings.query_param.clone())
            .with_debounce(Duration::from_millis(settings.debounce_ms));
        Self::new(SearchPipeline::from_settings(index, settings), bridge)
    }

    pub fn pipeline(&self) -> &SearchPipeline {
        &self.pipeline
    }

    pub fn bridge(&self) -> &QueryBridge<L> {
        &self.bridge
    }

    pub fn query(&self) -> &str {
        self.bridge.query()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn outcome(&self) -> SearchOutcome<'_> {
        self.pipeline.run(self.bridge.query(), &self.filter)
    }

    pub fn set_query(&mut self, q: impl Into<String>) -> SearchOutcome<'_> {
        self.bridge.set_query(q);
        self.outcome()
    }

    pub fn set_filter(&mut self, filter: FilterState) -> SearchOutcome<'_> {
        self.filter = filter;
        self.outcome()
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> SearchOutcome<'_> {
        self.filter.category = category.into();
        self.outcome()
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) -> SearchOutcome<'_> {
        self.filter.sort_mode = sort_mode;
        self.outcome()
    }

    /// Typed input; returns whether the committed query changed.
    pub fn input(&mut self, q: impl Into<String>, now: Instant) -> bool {
        self.bridge.input(q, now)
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.bridge.tick(now)
    }
}
