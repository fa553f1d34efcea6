//! Category restriction and secondary ordering on top of scored results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::error::Error;
use storefront_core::types::SearchRecord;

use crate::scoring::ScoredRecord;
use crate::text::{collation_key, compare_names};

/// Synthetic category option meaning "no restriction".
pub const ALL_CATEGORIES: &str = "Todos";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    #[default]
    Relevance,
    Name,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [SortMode::Relevance, SortMode::Name, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Name => "name",
            SortMode::PriceAsc => "priceAsc",
            SortMode::PriceDesc => "priceDesc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "relevance" | "relevancia" => Ok(SortMode::Relevance),
            "name" | "nombre" => Ok(SortMode::Name),
            "priceasc" => Ok(SortMode::PriceAsc),
            "pricedesc" => Ok(SortMode::PriceDesc),
            _ => Err(Error::InvalidSortMode(s.to_string())),
        }
    }
}

/// Category + sort selection owned by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub category: String,
    pub sort_mode: SortMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self { category: ALL_CATEGORIES.to_string(), sort_mode: SortMode::Relevance }
    }
}

impl FilterState {
    pub fn new(category: impl Into<String>, sort_mode: SortMode) -> Self {
        Self { category: category.into(), sort_mode }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    /// A category that is not among `options` degrades to no restriction.
    pub fn sanitized(&self, options: &CategoryOptions) -> FilterState {
        if self.is_unrestricted() || options.contains(&self.category) {
            self.clone()
        } else {
            tracing::warn!(category = %self.category, "unknown category filter, ignoring");
            FilterState { category: ALL_CATEGORIES.to_string(), sort_mode: self.sort_mode }
        }
    }
}

/// Applies the category restriction (exact, case-sensitive) and re-sorts
/// with a stable sort. `Relevance` keeps the incoming order.
pub fn apply<'a>(results: Vec<ScoredRecord<'a>>, filter: &FilterState) -> Vec<ScoredRecord<'a>> {
    let mut out: Vec<ScoredRecord<'a>> = if filter.is_unrestricted() {
        results
    } else {
        results.into_iter().filter(|hit| hit.record.category == filter.category).collect()
    };
    match filter.sort_mode {
        SortMode::Relevance => {}
        SortMode::Name => out.sort_by_cached_key(|hit| collation_key(&hit.record.name)),
        SortMode::PriceAsc => out.sort_by(|a, b| a.record.price.cmp(&b.record.price)),
        SortMode::PriceDesc => out.sort_by(|a, b| b.record.price.cmp(&a.record.price)),
    }
    out
}

/// Distinct categories of the whole index, alphabetically ordered and
/// prefixed with [`ALL_CATEGORIES`]. Independent of the current results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOptions {
    labels: Vec<String>,
}

impl Default for CategoryOptions {
    fn default() -> Self {
        Self { labels: vec![ALL_CATEGORIES.to_string()] }
    }
}

impl CategoryOptions {
    pub fn from_records(records: &[SearchRecord]) -> Self {
        let mut distinct: Vec<String> = records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_string)
            .collect();
        distinct.sort_by(|a, b| compare_names(a, b));
        distinct.dedup();

        let mut labels = Vec::with_capacity(distinct.len() + 1);
        labels.push(ALL_CATEGORIES.to_string());
        labels.extend(distinct);
        Self { labels }
    }

    /// All options, "Todos" first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The real categories only.
    pub fn categories(&self) -> &[String] {
        &self.labels[1..]
    }

    pub fn contains(&self, category: &str) -> bool {
        self.labels.iter().any(|l| l == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_parses_common_spellings() {
        assert_eq!("priceAsc".parse::<SortMode>().unwrap(), SortMode::PriceAsc);
        assert_eq!("price-desc".parse::<SortMode>().unwrap(), SortMode::PriceDesc);
        assert_eq!("NAME".parse::<SortMode>().unwrap(), SortMode::Name);
        assert_eq!("relevancia".parse::<SortMode>().unwrap(), SortMode::Relevance);
        assert!(matches!("cheapest".parse::<SortMode>(), Err(Error::InvalidSortMode(_))));
        for mode in SortMode::ALL {
            assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
        }
    }

    #[test]
    fn options_are_distinct_sorted_and_prefixed() {
        let records: Vec<SearchRecord> = ["Ondulado", "Alveolar", "", "Ondulado", "Accesorios"]
            .iter()
            .map(|c| SearchRecord { category: (*c).to_string(), ..Default::default() })
            .collect();
        let options = CategoryOptions::from_records(&records);
        assert_eq!(options.labels(), ["Todos", "Accesorios", "Alveolar", "Ondulado"]);
        assert_eq!(options.categories().len(), 3);
        assert!(options.contains("Todos"));
        assert!(!options.contains("ondulado"));
    }
}
