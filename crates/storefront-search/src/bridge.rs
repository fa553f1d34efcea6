//! Keeps the active query in step with the navigable location.
//!
//! Idle (empty query) -> Active(q) on input -> Idle when the input is cleared.
//! The location parameter is read once on construction and written on every
//! committed change; an empty query removes the parameter.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::debounce::Debouncer;
use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Active(String),
}

pub struct QueryBridge<L: Location> {
    location: L,
    param: String,
    query: String,
    debouncer: Debouncer,
    revision: u64,
}

impl<L: Location> QueryBridge<L> {
    /// Absent parameter means an empty query.
    pub fn new(location: L, param: impl Into<String>) -> Self {
        let param = param.into();
        let query = location.query_param(&param).unwrap_or_default();
        debug!(param = %param, query = %query, "restored query from location");
        Self { location, param, query, debouncer: Debouncer::immediate(), revision: 0 }
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debouncer = Debouncer::new(window);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> QueryState {
        if self.query.is_empty() {
            QueryState::Idle
        } else {
            QueryState::Active(self.query.clone())
        }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Bumped on every committed change; lets callers skip redundant renders.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// Commits `q` right away, bypassing and discarding any pending input.
    /// Returns whether the query changed.
    pub fn set_query(&mut self, q: impl Into<String>) -> bool {
        self.debouncer.cancel();
        self.commit(q.into())
    }

    /// Typed input; committed at once or after the debounce window.
    pub fn input(&mut self, q: impl Into<String>, now: Instant) -> bool {
        match self.debouncer.submit(q.into(), now) {
            Some(q) => self.commit(q),
            None => false,
        }
    }

    /// Commits pending input whose quiet period has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(q) => self.commit(q),
            None => false,
        }
    }

    fn commit(&mut self, q: String) -> bool {
        if q == self.query {
            return false;
        }
        if q.is_empty() {
            self.location.remove_query_param(&self.param);
        } else {
            self.location.set_query_param(&self.param, &q);
        }
        self.query = q;
        self.revision += 1;
        debug!(query = %self.query, revision = self.revision, "query changed");
        true
    }
}
