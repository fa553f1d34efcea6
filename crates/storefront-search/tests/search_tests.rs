use std::path::PathBuf;

use storefront_core::catalog::JsonCatalogSource;
use storefront_core::types::{Catalog, CatalogCategory, ProductVariant, ScoringWeights};
use storefront_search::{
    CatalogIndexer, FilterState, SearchIndex, SearchPipeline, SortMode, ALL_CATEGORIES,
};

fn fixture_path() -> PathBuf {
    // crates/storefront-search -> crates -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    root.join("test_data/catalog.json")
}

fn variant(code: &str, name: &str, thickness: &str, color: &str, price: u64) -> ProductVariant {
    ProductVariant {
        code: code.to_string(),
        name: name.to_string(),
        thickness: thickness.to_string(),
        color: color.to_string(),
        price,
        ..Default::default()
    }
}

/// The two-record catalog used throughout the scenarios.
fn two_panel_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogCategory {
            category: "Alveolar".to_string(),
            variants: vec![variant("A1", "Policarbonato Alveolar 6mm", "6mm", "Cristal", 10000)],
        },
        CatalogCategory {
            category: "Ondulado".to_string(),
            variants: vec![variant("B2", "Policarbonato Ondulado", "6mm", "Bronce", 8000)],
        },
    ])
}

fn pipeline(catalog: Catalog) -> SearchPipeline {
    let index = CatalogIndexer::new(catalog).build().expect("index");
    SearchPipeline::new(index, ScoringWeights::default())
}

fn codes(pipeline: &SearchPipeline, query: &str, filter: &FilterState) -> Vec<String> {
    pipeline.run(query, filter).records().map(|r| r.code.clone()).collect()
}

#[test]
fn thickness_query_keeps_index_order_between_both_panels() {
    let p = pipeline(two_panel_catalog());
    let outcome = p.run("6mm", &FilterState::default());
    let scored: Vec<(&str, u32)> = outcome.hits().iter().map(|h| (h.record.code.as_str(), h.score)).collect();
    // A1 also carries "6mm" in its name
    assert_eq!(scored, vec![("A1", 100), ("B2", 50)]);
}

#[test]
fn equal_scores_preserve_index_order() {
    let catalog = Catalog::new(vec![CatalogCategory {
        category: "Ondulado".to_string(),
        variants: vec![
            variant("Z9", "Plancha", "6mm", "", 1),
            variant("M5", "Plancha", "6mm", "", 2),
            variant("C3", "Plancha", "6mm", "", 3),
        ],
    }]);
    let p = pipeline(catalog);
    assert_eq!(codes(&p, "6mm", &FilterState::default()), vec!["Z9", "M5", "C3"]);
}

#[test]
fn exact_code_query_matches_only_that_record() {
    let p = pipeline(two_panel_catalog());
    let outcome = p.run("a1", &FilterState::default());
    assert_eq!(outcome.count(), 1);
    assert_eq!(outcome.hits()[0].record.code, "A1");
    assert!(outcome.hits()[0].score >= 100);
}

#[test]
fn category_filter_can_empty_a_text_match() {
    let p = pipeline(two_panel_catalog());
    let filter = FilterState::new("Ondulado", SortMode::Relevance);
    assert!(codes(&p, "cristal", &filter).is_empty());
    assert_eq!(codes(&p, "cristal", &FilterState::default()), vec!["A1"]);
}

#[test]
fn price_desc_reorders_tied_matches() {
    let p = pipeline(two_panel_catalog());
    let desc = FilterState::new(ALL_CATEGORIES, SortMode::PriceDesc);
    let asc = FilterState::new(ALL_CATEGORIES, SortMode::PriceAsc);
    assert_eq!(codes(&p, "policarbonato", &desc), vec!["A1", "B2"]);
    assert_eq!(codes(&p, "policarbonato", &asc), vec!["B2", "A1"]);
}

#[test]
fn empty_and_blank_queries_return_nothing() {
    let p = pipeline(two_panel_catalog());
    for q in ["", "   ", "\t\n"] {
        assert!(p.run(q, &FilterState::default()).is_empty());
    }
}

#[test]
fn blank_query_is_input_but_empty_query_is_not() {
    let p = pipeline(two_panel_catalog());
    let idle = p.run("", &FilterState::default());
    assert!(!idle.has_input());
    assert_eq!(idle.summary(), None);

    let blank = p.run("   ", &FilterState::default());
    assert!(blank.has_input());
    assert_eq!(blank.summary().as_deref(), Some("0 resultados para \"   \""));

    let one = p.run("cristal", &FilterState::default());
    assert_eq!(one.summary().as_deref(), Some("1 resultado para \"cristal\""));
}

#[test]
fn unknown_category_filter_means_no_restriction() {
    let p = pipeline(two_panel_catalog());
    let filter = FilterState::new("Tejas", SortMode::Relevance);
    assert_eq!(codes(&p, "policarbonato", &filter), vec!["A1", "B2"]);
}

#[test]
fn category_match_is_case_sensitive() {
    let p = pipeline(two_panel_catalog());
    // "ondulado" is not a known option, so it degrades to no restriction
    let filter = FilterState::new("ondulado", SortMode::Relevance);
    assert_eq!(codes(&p, "policarbonato", &filter), vec!["A1", "B2"]);
}

#[test]
fn repeated_terms_are_scored_repeatedly() {
    let p = pipeline(two_panel_catalog());
    let once = p.run("cristal", &FilterState::default()).hits()[0].score;
    let twice = p.run("cristal cristal", &FilterState::default()).hits()[0].score;
    assert_eq!(twice, once * 2);
}

#[test]
fn custom_weights_change_the_ranking() {
    let index = CatalogIndexer::new(two_panel_catalog()).build().expect("index");
    let weights = ScoringWeights { color: 500, ..ScoringWeights::default() };
    let p = SearchPipeline::new(index, weights);
    let outcome = p.run("bronce alveolar", &FilterState::default());
    assert_eq!(outcome.hits()[0].record.code, "B2");
}

#[test]
fn duplicate_codes_are_both_indexed() {
    let catalog = Catalog::new(vec![CatalogCategory {
        category: "Ondulado".to_string(),
        variants: vec![variant("D1", "Plancha roja", "", "", 1), variant("D1", "Plancha azul", "", "", 2)],
    }]);
    let p = pipeline(catalog);
    assert_eq!(p.index().len(), 2);
    assert_eq!(p.run("plancha", &FilterState::default()).count(), 2);
}

#[test]
fn fixture_catalog_flattens_in_encounter_order() {
    let index = CatalogIndexer::new(JsonCatalogSource::new(fixture_path()))
        .with_detail_url_prefix("/productos/")
        .build()
        .expect("index fixture");
    let ids: Vec<&str> = index.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A2", "B2", "PERF-U", "TORN-15"]);
    for r in index.records() {
        assert_eq!(r.id, r.code);
    }

    let perfil = &index.records()[3];
    assert_eq!(perfil.category, "Accesorios");
    assert_eq!(perfil.price, 4990);
    assert_eq!(perfil.kind, "");
    assert_eq!(perfil.detail_url.as_deref(), Some("/productos/accesorios/perf-u"));

    assert_eq!(index.category_options().labels(), ["Todos", "Accesorios", "Alveolar", "Ondulado"]);
}

#[test]
fn category_options_come_from_the_index_not_the_results() {
    let index = CatalogIndexer::new(JsonCatalogSource::new(fixture_path())).build().expect("index");
    let p = SearchPipeline::new(index, ScoringWeights::default());
    let before = p.category_options().clone();
    let outcome = p.run("tornillo", &FilterState::default());
    assert_eq!(outcome.count(), 1);
    assert_eq!(p.category_options(), &before);
}

#[test]
fn name_sort_orders_results_alphabetically() {
    let index = CatalogIndexer::new(JsonCatalogSource::new(fixture_path())).build().expect("index");
    let p = SearchPipeline::new(index, ScoringWeights::default());
    let filter = FilterState::new(ALL_CATEGORIES, SortMode::Name);
    let names: Vec<String> = p.run("6mm", &filter).records().map(|r| r.name.clone()).collect();
    assert_eq!(
        names,
        vec!["Perfil U de aluminio", "Policarbonato Alveolar 6mm", "Policarbonato Ondulado"]
    );
}

#[test]
fn variant_category_overrides_group_label() {
    let mut v = variant("X1", "Canaleta", "", "", 10);
    v.category = "Accesorios".to_string();
    let catalog = Catalog::new(vec![CatalogCategory { category: "Ondulado".to_string(), variants: vec![v] }]);
    let index = SearchIndex::from_catalog(&catalog, "/p");
    assert_eq!(index.records()[0].category, "Accesorios");
    assert_eq!(index.records()[0].detail_url.as_deref(), Some("/p/accesorios/x1"));
}

#[test]
fn records_serialize_with_camel_case_keys() {
    let index = SearchIndex::from_catalog(&two_panel_catalog(), "/productos");
    let json = serde_json::to_value(&index.records()[0]).expect("serialize");
    assert_eq!(json["detailUrl"], "/productos/alveolar/a1");
    assert_eq!(json["type"], "");
    assert_eq!(json["price"], 10000);
}
