//! Weighted field matching over the flat record list.
//!
//! Every query is a linear scan: each record gets a lower-cased haystack and
//! per-field substring checks for every query term. Repeated terms are scored
//! repeatedly. Only records with a positive score are returned, ordered by
//! descending score; `sort_by` is stable, so equal scores keep index order.

use tracing::debug;

use storefront_core::types::{ScoringWeights, SearchRecord};

/// A record paired with its relevance score. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    pub record: &'a SearchRecord,
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score<'a>(&self, query: &str, records: &'a [SearchRecord]) -> Vec<ScoredRecord<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query_lower = query.to_lowercase();
        let terms = tokenize_query(query);

        let mut hits: Vec<ScoredRecord<'a>> = records
            .iter()
            .map(|record| ScoredRecord { record, score: self.score_record(&query_lower, &terms, record) })
            .filter(|hit| hit.score > 0)
            .collect();
        hits.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            query,
            terms = terms.len(),
            scanned = records.len(),
            matched = hits.len(),
            top = hits.first().map_or(0, |h| h.score),
            "scored query"
        );
        hits
    }

    /// `query_lower` is the whole lower-cased query, used for the exact-code bonus
    /// without trimming; `terms` come from [`tokenize_query`].
    pub fn score_record(&self, query_lower: &str, terms: &[String], record: &SearchRecord) -> u32 {
        let w = &self.weights;
        let fields = FoldedRecord::new(record);
        let mut score: u32 = 0;

        if fields.code == query_lower {
            score = score.saturating_add(w.exact_code);
        }

        for term in terms {
            let term = term.as_str();
            let checks = [
                (&fields.name, w.name),
                (&fields.thickness, w.thickness),
                (&fields.color, w.color),
                (&fields.category, w.category),
                (&fields.dimensions, w.dimensions),
                (&fields.description, w.description),
                (&fields.haystack, w.haystack),
            ];
            for (field, weight) in checks {
                if field.contains(term) {
                    score = score.saturating_add(weight);
                }
            }
        }
        score
    }
}

/// Lower-cased, whitespace-split, empty tokens dropped. Not deduplicated.
pub fn tokenize_query(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

struct FoldedRecord {
    code: String,
    name: String,
    description: String,
    category: String,
    thickness: String,
    color: String,
    dimensions: String,
    haystack: String,
}

impl FoldedRecord {
    fn new(r: &SearchRecord) -> Self {
        let haystack = [
            r.name.as_str(),
            r.description.as_str(),
            r.category.as_str(),
            r.kind.as_str(),
            r.thickness.as_str(),
            r.color.as_str(),
            r.dimensions.as_str(),
            r.code.as_str(),
        ]
        .join(" ")
        .to_lowercase();
        Self {
            code: r.code.to_lowercase(),
            name: r.name.to_lowercase(),
            description: r.description.to_lowercase(),
            category: r.category.to_lowercase(),
            thickness: r.thickness.to_lowercase(),
            color: r.color.to_lowercase(),
            dimensions: r.dimensions.to_lowercase(),
            haystack,
        }
    }
}
