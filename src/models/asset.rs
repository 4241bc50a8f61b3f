// SPDX-License-Identifier: MIT

//! Asset lookup types for the site's `get_asset` AJAX endpoint.

use serde::Deserialize;

/// Kind of asset the endpoint can resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetKind {
    #[default]
    Image,
    File,
}

impl AssetKind {
    /// Wire value for the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::File => "file",
        }
    }
}

/// Query for a single asset, identified by its slug.
///
/// The thumbnail parameters only apply to images; `None` values are omitted
/// from the request entirely, matching what the endpoint expects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub kind: AssetKind,
    pub slug: String,
    pub size: Option<String>,
    pub crop: Option<String>,
    pub quality: Option<u8>,
}

impl AssetQuery {
    pub fn image(slug: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::Image,
            slug: slug.into(),
            ..Self::default()
        }
    }

    pub fn file(slug: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::File,
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Query-string pairs in the order the endpoint documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type", self.kind.as_str().to_string()),
            ("slug", self.slug.clone()),
        ];
        if let Some(size) = &self.size {
            pairs.push(("size", size.clone()));
        }
        if let Some(crop) = &self.crop {
            pairs.push(("crop", crop.clone()));
        }
        if let Some(quality) = self.quality {
            pairs.push(("quality", quality.to_string()));
        }
        pairs
    }
}

/// JSON body returned by the endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AssetInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_query_carries_only_type_and_slug() {
        let query = AssetQuery::file("report-2019");
        assert_eq!(
            query.query_pairs(),
            vec![
                ("type", "file".to_string()),
                ("slug", "report-2019".to_string())
            ]
        );
    }

    #[test]
    fn image_query_includes_present_thumbnail_params() {
        let query = AssetQuery {
            size: Some("300x200".into()),
            quality: Some(85),
            ..AssetQuery::image("header")
        };

        let pairs = query.query_pairs();
        assert!(pairs.contains(&("size", "300x200".to_string())));
        assert!(pairs.contains(&("quality", "85".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "crop"));
    }

    #[test]
    fn asset_info_decodes_endpoint_json() {
        let info: AssetInfo = serde_json::from_str(
            r#"{"title": "Header", "description": "", "url": "/media/header.png"}"#,
        )
        .unwrap();
        assert_eq!(info.url, "/media/header.png");
        assert_eq!(info.title, "Header");
    }

    #[test]
    fn asset_info_tolerates_missing_optional_fields() {
        let info: AssetInfo = serde_json::from_str(r#"{"url": "/media/x.pdf"}"#).unwrap();
        assert_eq!(info.url, "/media/x.pdf");
        assert!(info.title.is_empty());
    }
}
