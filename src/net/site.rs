// SPDX-License-Identifier: MIT

//! Site configuration and blog navigation URLs.
//!
//! The base URL is explicit configuration rather than an ambient global, so
//! every request and navigation target is derived from one place.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable overriding the site base URL.
pub const SITE_URL_ENV: &str = "POSTPACK_SITE_URL";

/// Default site when no override is configured.
pub const DEFAULT_SITE_URL: &str = "http://localhost:8000/";

/// Blog sort tabs and their wire keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortTab {
    #[default]
    Latest,
    Popular,
    Topics,
}

impl SortTab {
    pub const ALL: [SortTab; 3] = [SortTab::Latest, SortTab::Popular, SortTab::Topics];

    /// Key posted to the sort endpoint and used in tab page URLs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Popular => "popular",
            Self::Topics => "topics",
        }
    }

    /// Human-readable tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Popular => "Popular",
            Self::Topics => "Topics",
        }
    }
}

/// Where the site lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: Url,
}

impl SiteConfig {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Build from `POSTPACK_SITE_URL`, falling back to the default.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(SITE_URL_ENV).unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        let base_url = Url::parse(&raw).with_context(|| format!("invalid site URL '{raw}'"))?;
        Ok(Self::new(base_url))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// AJAX endpoint resolving asset URLs by slug.
    pub fn get_asset_url(&self) -> Result<Url> {
        self.join("ajax/get_asset/")
    }

    /// Endpoint a selected sort key is posted to.
    pub fn update_sort_tab_url(&self, tab: SortTab) -> Result<Url> {
        self.join(&format!("blog/update_sort_tab/{}", tab.key()))
    }

    /// Page shown for a sort tab, used when the tab is already active.
    pub fn tab_url(&self, tab: SortTab) -> Result<Url> {
        let mut url = self.join("blog/")?;
        url.query_pairs_mut().append_pair("tab", tab.key());
        Ok(url)
    }

    /// Blog search page with the query string appended.
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.join("blog/search/")?;
        url.query_pairs_mut().append_pair("q", query);
        Ok(url)
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("cannot join '{path}' onto {}", self.base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig::new(Url::parse("https://blog.example.com/").unwrap())
    }

    #[test]
    fn asset_endpoint_is_fixed_path() {
        assert_eq!(
            config().get_asset_url().unwrap().as_str(),
            "https://blog.example.com/ajax/get_asset/"
        );
    }

    #[test]
    fn sort_key_is_appended_to_endpoint_path() {
        assert_eq!(
            config().update_sort_tab_url(SortTab::Popular).unwrap().as_str(),
            "https://blog.example.com/blog/update_sort_tab/popular"
        );
    }

    #[test]
    fn search_query_is_url_encoded() {
        assert_eq!(
            config().search_url("rust & django").unwrap().as_str(),
            "https://blog.example.com/blog/search/?q=rust+%26+django"
        );
    }

    #[test]
    fn tab_page_url_names_the_tab() {
        assert_eq!(
            config().tab_url(SortTab::Topics).unwrap().as_str(),
            "https://blog.example.com/blog/?tab=topics"
        );
    }
}
