//! The navigable location the active query is mirrored into.

use url::Url;

use storefront_core::error::Result;

pub trait Location {
    /// Decoded value of `name`, `None` when absent.
    fn query_param(&self, name: &str) -> Option<String>;
    fn set_query_param(&mut self, name: &str, value: &str);
    fn remove_query_param(&mut self, name: &str);
}

/// A [`Location`] backed by a full URL. Other query parameters and their
/// order are preserved on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self { url: Url::parse(input)? })
    }

    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    fn pairs(&self) -> Vec<(String, String)> {
        self.url.query_pairs().into_owned().collect()
    }

    fn write_pairs(&mut self, pairs: &[(String, String)]) {
        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }
}

impl Location for UrlLocation {
    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    fn set_query_param(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        let mut pairs = Vec::new();
        for (k, v) in self.pairs() {
            if k != name {
                pairs.push((k, v));
            } else if !replaced {
                pairs.push((k, value.to_string()));
                replaced = true;
            }
        }
        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }
        self.write_pairs(&pairs);
    }

    fn remove_query_param(&mut self, name: &str) {
        let pairs: Vec<(String, String)> = self.pairs().into_iter().filter(|(k, _)| k != name).collect();
        self.write_pairs(&pairs);
    }
}
