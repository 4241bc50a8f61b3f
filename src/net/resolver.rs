// SPDX-License-Identifier: MIT

//! Blocking HTTP client for the site's AJAX surface.
//!
//! Runs on command worker threads only; the UI thread never blocks on the
//! network.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Method;
use reqwest::blocking::Client;

use crate::models::asset::{AssetInfo, AssetQuery};
use crate::net::csrf::CsrfToken;
use crate::net::site::{SiteConfig, SortTab};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for asset resolution and sort-tab updates.
pub struct SiteClient {
    site: SiteConfig,
    csrf: Option<CsrfToken>,
    http: Client,
}

impl SiteClient {
    pub fn new(site: SiteConfig, csrf: Option<CsrfToken>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("postpack/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { site, csrf, http })
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Resolve an asset's URL (and title/description) by slug.
    pub fn resolve_asset(&self, query: &AssetQuery) -> Result<AssetInfo> {
        let url = self.site.get_asset_url()?;
        let response = self
            .http
            .get(url)
            .query(&query.query_pairs())
            .send()
            .with_context(|| format!("asset request failed for slug '{}'", query.slug))?
            .error_for_status()
            .with_context(|| format!("asset endpoint rejected slug '{}'", query.slug))?;

        response
            .json::<AssetInfo>()
            .context("asset endpoint returned malformed JSON")
    }

    /// Post the selected sort key. State-changing, so the CSRF token is
    /// attached when configured.
    pub fn post_sort_tab(&self, tab: SortTab) -> Result<()> {
        let url = self.site.update_sort_tab_url(tab)?;
        let mut builder = self.http.post(url);
        if let Some(token) = &self.csrf {
            builder = token.attach(&Method::POST, builder);
        }

        builder
            .send()
            .with_context(|| format!("sort tab update failed for '{}'", tab.key()))?
            .error_for_status()
            .with_context(|| format!("sort endpoint rejected '{}'", tab.key()))?;
        Ok(())
    }
}
