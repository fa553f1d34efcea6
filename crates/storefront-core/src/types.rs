//! Domain types shared by the indexer, the scoring engine and the front ends.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub type RecordId = String;

/// The nested product catalog as supplied by the catalog-loading collaborator:
/// an ordered list of categories, each holding its variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub categories: Vec<CatalogCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<CatalogCategory>) -> Self {
        Self { categories }
    }

    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn variant_count(&self) -> usize {
        self.categories.iter().map(|c| c.variants.len()).sum()
    }

    pub fn extend(&mut self, other: Catalog) {
        self.categories.extend(other.categories);
    }
}

/// One category group of the catalog (`categoria` + `variantes` in the source JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategory {
    #[serde(alias = "categoria", default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(alias = "variantes", default)]
    pub variants: Vec<ProductVariant>,
}

/// A sellable product variant as it appears in the source catalog.
///
/// Every string field tolerates `null`, numbers and absence; all of them end
/// up as plain strings so the scorer never has to special-case missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(alias = "codigo", default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(alias = "nombre", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(alias = "descripcion", default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(alias = "categoria", default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(rename = "type", alias = "tipo", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(alias = "espesor", default, deserialize_with = "lenient_string")]
    pub thickness: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,
    #[serde(alias = "dimensiones", default, deserialize_with = "lenient_string")]
    pub dimensions: String,
    /// Tax-inclusive price in whole currency units.
    #[serde(
        alias = "precioConIva",
        alias = "precio_con_iva",
        default,
        deserialize_with = "lenient_price"
    )]
    pub price: u64,
}

/// One flattened, searchable product variant.
///
/// `id` and `code` carry the same value. String fields are never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub thickness: String,
    pub color: String,
    pub dimensions: String,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
}

/// Per-field weights used by the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub exact_code: u32,
    pub name: u32,
    pub thickness: u32,
    pub color: u32,
    pub category: u32,
    pub dimensions: u32,
    pub description: u32,
    pub haystack: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_code: 100,
            name: 50,
            thickness: 40,
            color: 40,
            category: 30,
            dimensions: 30,
            description: 20,
            haystack: 10,
        }
    }
}

impl ScoringWeights {
    pub fn is_all_zero(&self) -> bool {
        [
            self.exact_code,
            self.name,
            self.thickness,
            self.color,
            self.category,
            self.dimensions,
            self.description,
            self.haystack,
        ]
        .iter()
        .all(|w| *w == 0)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_price<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f > 0.0)
                .map_or(0, |f| f.round() as u64)
        }),
        // "$10.000" style strings: whole units, separators dropped
        Some(Value::String(s)) if !s.trim_start().starts_with('-') => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    })
}
