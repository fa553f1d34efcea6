//! Flattens the nested catalog into searchable records.

use tracing::info;

use storefront_core::error::Result;
use storefront_core::traits::CatalogSource;
use storefront_core::types::{Catalog, ProductVariant, SearchRecord};

use crate::filter::CategoryOptions;
use crate::text::slugify;

/// Builds a [`SearchIndex`] from an injected catalog source.
pub struct CatalogIndexer<S: CatalogSource> {
    source: S,
    detail_url_prefix: String,
}

impl<S: CatalogSource> CatalogIndexer<S> {
    pub fn new(source: S) -> Self {
        Self { source, detail_url_prefix: "/productos".to_string() }
    }

    pub fn with_detail_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.detail_url_prefix = prefix.into();
        self
    }

    pub fn build(&self) -> Result<SearchIndex> {
        let catalog = self.source.load_catalog()?;
        let index = SearchIndex::from_catalog(&catalog, &self.detail_url_prefix);
        info!(
            records = index.len(),
            categories = index.category_options().categories().len(),
            "built search index"
        );
        Ok(index)
    }
}

/// The flat record list plus the category options derived from it.
/// Built once per catalog load and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
    categories: CategoryOptions,
}

impl SearchIndex {
    pub fn from_catalog(catalog: &Catalog, detail_url_prefix: &str) -> Self {
        Self::from_records(flatten(catalog, detail_url_prefix))
    }

    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        let categories = CategoryOptions::from_records(&records);
        Self { records, categories }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn category_options(&self) -> &CategoryOptions {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Category order, then variant order. Duplicate codes are kept as-is.
pub fn flatten(catalog: &Catalog, detail_url_prefix: &str) -> Vec<SearchRecord> {
    catalog
        .categories
        .iter()
        .flat_map(|group| {
            group
                .variants
                .iter()
                .map(move |variant| to_record(variant, &group.category, detail_url_prefix))
        })
        .collect()
}

fn to_record(variant: &ProductVariant, group_category: &str, detail_url_prefix: &str) -> SearchRecord {
    let category = if variant.category.is_empty() {
        group_category.to_string()
    } else {
        variant.category.clone()
    };
    let detail_url = detail_url(detail_url_prefix, &category, &variant.code);
    SearchRecord {
        id: variant.code.clone(),
        code: variant.code.clone(),
        name: variant.name.clone(),
        description: variant.description.clone(),
        category,
        kind: variant.kind.clone(),
        thickness: variant.thickness.clone(),
        color: variant.color.clone(),
        dimensions: variant.dimensions.clone(),
        price: variant.price,
        detail_url,
    }
}

fn detail_url(prefix: &str, category: &str, code: &str) -> Option<String> {
    let code_slug = slugify(code);
    if code_slug.is_empty() {
        return None;
    }
    let mut url = prefix.trim_end_matches('/').to_string();
    let category_slug = slugify(category);
    if !category_slug.is_empty() {
        url.push('/');
        url.push_str(&category_slug);
    }
    url.push('/');
    url.push_str(&code_slug);
    Some(url)
}
