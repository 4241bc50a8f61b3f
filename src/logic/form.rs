// SPDX-License-Identifier: MIT

//! Business logic for exporting the composed post form.
//!
//! The export mirrors what the site's admin form would submit: every list
//! field contributes its name and backing text, alongside the title and
//! body. Written as pretty JSON so it can be inspected or replayed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// One serialized field, `name` as submitted and the backing-text `value`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldValue {
    pub name: String,
    pub value: String,
}

/// Export-ready snapshot of the whole form.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormPayload {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub fields: Vec<FieldValue>,
}

/// Suggest an export filename from the post title.
///
/// Slugified the way the site slugifies post titles; falls back to
/// `post.json` for titles with no usable characters.
pub fn suggested_export_name(title: &str) -> String {
    let slug = slugify(title);
    let base = if slug.is_empty() { "post" } else { &slug };
    format!("{base}.json")
}

/// Force a specific extension onto a path when it is missing or different.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}

/// Lowercase, keep alphanumerics, collapse everything else into single
/// hyphens.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Serialize the payload as pretty JSON and write it to `output`.
pub fn write_form_json(output: &Path, payload: &FormPayload) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(payload).context("failed to serialize form payload")?;
    fs::write(output, json).with_context(|| format!("cannot write '{}'", output.display()))
}
