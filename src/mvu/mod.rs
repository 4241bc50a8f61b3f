// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring component state, messages, and
//! commands.

use std::path::PathBuf;

use url::Url;

use crate::logic::form::{FieldValue, FormPayload, slugify, write_form_json};
use crate::models::asset::AssetQuery;
use crate::net::site::SortTab;
use crate::net::{SiteClient, SiteConfig};
use crate::ui::components::assets::{self, AssetsCommand, AssetsModel, AssetsMsg};
use crate::ui::components::browse::{self, BrowseCommand, BrowseModel, BrowseMsg};
use crate::ui::components::list_field::{self, ListFieldModel, ListFieldMsg, ListFieldStyle};

/// Top-level application state.
pub struct AppModel {
    /// Post title.
    pub title: String,
    /// Markdown body text.
    pub body: String,
    /// Tag list field.
    pub tags: ListFieldModel,
    /// Category list field.
    pub categories: ListFieldModel,
    /// Tag color list field (colored variant).
    pub colors: ListFieldModel,
    /// Asset lookup panel state.
    pub assets: AssetsModel,
    /// Sort/search panel state.
    pub browse: BrowseModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            tags: ListFieldModel::new("tags", "Tags", ListFieldStyle::Plain),
            categories: ListFieldModel::new("categories", "Categories", ListFieldStyle::Plain),
            colors: ListFieldModel::new("colors", "Tag colors", ListFieldStyle::Colored),
            assets: AssetsModel::default(),
            browse: BrowseModel::default(),
            status: None,
            error: None,
            pending_commands: 0,
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    TitleChanged(String),
    BodyChanged(String),
    ExportRequested(PathBuf),
    ExportCancelled,
    ExportCompleted(Result<PathBuf, String>),
    NavigationFinished(Result<String, String>),
    DismissError,
    Tags(ListFieldMsg),
    Categories(ListFieldMsg),
    Colors(ListFieldMsg),
    Assets(AssetsMsg),
    Browse(BrowseMsg),
}

/// Commands represent side effects executed between frames on workers.
pub enum Command {
    ResolveAsset(AssetQuery),
    PostSortTab(SortTab),
    OpenAssetUrl(String),
    OpenTabPage(SortTab),
    OpenSearch(String),
    SaveForm {
        output: PathBuf,
        payload: FormPayload,
    },
}

/// Shared collaborators handed to command workers.
pub struct Services {
    client: SiteClient,
}

impl Services {
    pub fn new(client: SiteClient) -> Self {
        Self { client }
    }

    pub fn site(&self) -> &SiteConfig {
        self.client.site()
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::TitleChanged(text) => model.title = text,
        Msg::BodyChanged(text) => model.body = text,
        Msg::DismissError => model.error = None,
        Msg::Tags(m) => {
            if let Some(event) = list_field::update(&mut model.tags, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::Categories(m) => {
            if let Some(event) = list_field::update(&mut model.categories, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::Colors(m) => {
            if let Some(event) = list_field::update(&mut model.colors, m) {
                surface_event(model, event.message, event.is_error);
            }
        }
        Msg::Assets(AssetsMsg::InsertRequested) => match model.assets.markdown_snippet() {
            Some(snippet) => {
                if !model.body.is_empty() && !model.body.ends_with('\n') {
                    model.body.push('\n');
                }
                model.body.push_str(&snippet);
                model.body.push('\n');
                surface_event(model, "Inserted asset into body.".to_string(), false);
            }
            None => surface_event(model, "Resolve an asset first.".to_string(), true),
        },
        Msg::Assets(m) => {
            let mut asset_cmds = Vec::new();
            if let Some(event) = assets::update(&mut model.assets, m, &mut asset_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in asset_cmds {
                match c {
                    AssetsCommand::Resolve(query) => cmds.push(Command::ResolveAsset(query)),
                    AssetsCommand::OpenUrl(url) => cmds.push(Command::OpenAssetUrl(url)),
                }
            }
        }
        Msg::Browse(m) => {
            let mut browse_cmds = Vec::new();
            if let Some(event) = browse::update(&mut model.browse, m, &mut browse_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in browse_cmds {
                match c {
                    BrowseCommand::PostSortTab(tab) => cmds.push(Command::PostSortTab(tab)),
                    BrowseCommand::OpenTabPage(tab) => cmds.push(Command::OpenTabPage(tab)),
                    BrowseCommand::OpenSearch(query) => cmds.push(Command::OpenSearch(query)),
                }
            }
        }
        Msg::ExportRequested(output) => match validate_for_export(model, output) {
            Ok(cmd) => cmds.push(cmd),
            Err(err) => surface_event(model, err, true),
        },
        Msg::ExportCancelled => surface_event(model, "Export cancelled.".to_string(), false),
        Msg::ExportCompleted(result) => match result {
            Ok(path) => surface_event(model, format!("Form exported: {}", path.display()), false),
            Err(err) => surface_event(model, format!("Failed to export form:\n\n{err}"), true),
        },
        Msg::NavigationFinished(result) => match result {
            Ok(url) => surface_event(model, format!("Opened {url}"), false),
            Err(err) => surface_event(model, format!("Could not open browser: {err}"), true),
        },
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command, services: &Services) -> Msg {
    match cmd {
        Command::ResolveAsset(query) => {
            let result = services.client.resolve_asset(&query).map_err(|err| {
                tracing::warn!(slug = %query.slug, error = %err, "asset resolution failed");
                err.to_string()
            });
            Msg::Assets(AssetsMsg::Resolved(result))
        }
        Command::PostSortTab(tab) => {
            let result = services.client.post_sort_tab(tab).map_err(|err| {
                tracing::warn!(tab = tab.key(), error = %err, "sort tab update failed");
                err.to_string()
            });
            Msg::Browse(BrowseMsg::SortPosted { tab, result })
        }
        Command::OpenAssetUrl(raw) => {
            // Asset URLs come back site-relative; join handles both forms.
            let target = services.site().base_url().join(&raw);
            Msg::NavigationFinished(match target {
                Ok(url) => open_in_browser(url),
                Err(err) => Err(err.to_string()),
            })
        }
        Command::OpenTabPage(tab) => Msg::NavigationFinished(
            services
                .site()
                .tab_url(tab)
                .map_err(|err| err.to_string())
                .and_then(open_in_browser),
        ),
        Command::OpenSearch(query) => Msg::NavigationFinished(
            services
                .site()
                .search_url(&query)
                .map_err(|err| err.to_string())
                .and_then(open_in_browser),
        ),
        Command::SaveForm { output, payload } => {
            let result = write_form_json(&output, &payload)
                .map(|_| output.clone())
                .map_err(|err| err.to_string());
            Msg::ExportCompleted(result)
        }
    }
}

/// Open a URL in the system browser, logging failures.
fn open_in_browser(url: Url) -> Result<String, String> {
    match open::that(url.as_str()) {
        Ok(()) => Ok(url.to_string()),
        Err(err) => {
            tracing::warn!(%url, error = %err, "failed to open browser");
            Err(err.to_string())
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

/// Validate model state and build the export command.
fn validate_for_export(model: &AppModel, output: PathBuf) -> Result<Command, String> {
    let title = model.title.trim().to_string();
    if title.is_empty() {
        return Err("Please enter a title.".into());
    }

    let fields = [&model.tags, &model.categories, &model.colors]
        .into_iter()
        .map(|component| FieldValue {
            name: component.field().name().to_string(),
            value: component.field().backing_text().to_string(),
        })
        .collect();

    let payload = FormPayload {
        slug: slugify(&title),
        title,
        body: model.body.trim().to_string(),
        fields,
    };

    Ok(Command::SaveForm { output, payload })
}
