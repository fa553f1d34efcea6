use crate::error::Result;
use crate::types::Catalog;

/// Supplies the nested product catalog to the indexer.
pub trait CatalogSource: Send + Sync {
    fn load_catalog(&self) -> Result<Catalog>;
}

impl CatalogSource for Catalog {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.clone())
    }
}
