//! storefront-search
//!
//! Catalog search and relevance ranking: the indexer flattens the nested
//! catalog, the scoring engine ranks records against a free-text query, the
//! filter layer narrows by category and re-sorts, and the query bridge keeps
//! the active query mirrored in the location.

pub mod bridge;
pub mod debounce;
pub mod filter;
pub mod indexer;
pub mod location;
pub mod pipeline;
pub mod scoring;
pub mod session;
pub mod text;

pub use bridge::{QueryBridge, QueryState};
pub use filter::{apply, CategoryOptions, FilterState, SortMode, ALL_CATEGORIES};
pub use indexer::{CatalogIndexer, SearchIndex};
pub use location::{Location, UrlLocation};
pub use pipeline::{SearchOutcome, SearchPipeline};
pub use scoring::{ScoredRecord, ScoringEngine};
pub use session::SearchSession;
