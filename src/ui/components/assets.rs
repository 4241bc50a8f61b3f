// SPDX-License-Identifier: MIT

//! Asset lookup panel in an MVU-friendly shape.
//!
//! Resolves an asset URL by slug through the site's AJAX endpoint. The HTTP
//! call itself runs as a command on a worker; the panel only tracks inputs
//! and the latest resolved asset.

use eframe::egui;

use crate::models::asset::{AssetInfo, AssetKind, AssetQuery};

/// UI model for the asset panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetsModel {
    kind: AssetKind,
    slug: String,
    size: String,
    crop: String,
    quality: String,
    resolved: Option<AssetInfo>,
    in_flight: bool,
}

/// Messages emitted by the asset panel view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetsMsg {
    KindChanged(AssetKind),
    SlugChanged(String),
    SizeChanged(String),
    CropChanged(String),
    QualityChanged(String),
    ResolveRequested,
    Resolved(Result<AssetInfo, String>),
    OpenResolved,
    /// Handled by the kernel, which owns the body text.
    InsertRequested,
}

/// Side effects requested by the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetsCommand {
    Resolve(AssetQuery),
    OpenUrl(String),
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetsEvent {
    pub message: String,
    pub is_error: bool,
}

impl AssetsModel {
    pub fn resolved(&self) -> Option<&AssetInfo> {
        self.resolved.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Markdown snippet for the resolved asset: an image tag for images, a
    /// plain link for files.
    pub fn markdown_snippet(&self) -> Option<String> {
        let info = self.resolved.as_ref()?;
        let text = if info.title.is_empty() {
            self.slug.trim()
        } else {
            &info.title
        };
        Some(match self.kind {
            AssetKind::Image => format!("![{}]({})", text, info.url),
            AssetKind::File => format!("[{}]({})", text, info.url),
        })
    }

    /// Build the endpoint query from the current inputs.
    fn build_query(&self) -> Result<AssetQuery, String> {
        let slug = self.slug.trim();
        if slug.is_empty() {
            return Err("Enter an asset slug first.".into());
        }

        let mut query = match self.kind {
            AssetKind::Image => AssetQuery::image(slug),
            AssetKind::File => AssetQuery::file(slug),
        };

        if self.kind == AssetKind::Image {
            let size = self.size.trim();
            if !size.is_empty() {
                query.size = Some(size.to_string());
            }
            let crop = self.crop.trim();
            if !crop.is_empty() {
                query.crop = Some(crop.to_string());
            }
            let quality = self.quality.trim();
            if !quality.is_empty() {
                let parsed: u8 = quality
                    .parse()
                    .map_err(|_| "Quality must be a number between 1 and 100.".to_string())?;
                if !(1..=100).contains(&parsed) {
                    return Err("Quality must be a number between 1 and 100.".into());
                }
                query.quality = Some(parsed);
            }
        }

        Ok(query)
    }
}

/// Apply a message to the model, enqueueing commands for side effects.
pub fn update(
    model: &mut AssetsModel,
    msg: AssetsMsg,
    cmds: &mut Vec<AssetsCommand>,
) -> Option<AssetsEvent> {
    match msg {
        AssetsMsg::KindChanged(kind) => {
            model.kind = kind;
            None
        }
        AssetsMsg::SlugChanged(text) => {
            model.slug = text;
            None
        }
        AssetsMsg::SizeChanged(text) => {
            model.size = text;
            None
        }
        AssetsMsg::CropChanged(text) => {
            model.crop = text;
            None
        }
        AssetsMsg::QualityChanged(text) => {
            model.quality = text;
            None
        }
        AssetsMsg::ResolveRequested => match model.build_query() {
            Ok(query) => {
                model.in_flight = true;
                cmds.push(AssetsCommand::Resolve(query));
                None
            }
            Err(message) => Some(AssetsEvent {
                message,
                is_error: true,
            }),
        },
        AssetsMsg::Resolved(result) => {
            model.in_flight = false;
            match result {
                Ok(info) => {
                    let message = format!("Resolved asset URL: {}", info.url);
                    model.resolved = Some(info);
                    Some(AssetsEvent {
                        message,
                        is_error: false,
                    })
                }
                // Keep the previous resolution; a failed lookup never blanks
                // the panel.
                Err(err) => Some(AssetsEvent {
                    message: format!("Asset lookup failed: {err}"),
                    is_error: true,
                }),
            }
        }
        AssetsMsg::OpenResolved => {
            if let Some(info) = &model.resolved {
                cmds.push(AssetsCommand::OpenUrl(info.url.clone()));
            }
            None
        }
        AssetsMsg::InsertRequested => None,
    }
}

/// Render the asset panel and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &AssetsModel) -> Vec<AssetsMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Assets")
        .default_open(true)
        .show(ui, |ui| {
            render_inputs(ui, model, &mut msgs);
            ui.add_space(6.0);
            render_actions(ui, model, &mut msgs);
            if let Some(info) = model.resolved() {
                ui.add_space(6.0);
                render_resolved(ui, model, info, &mut msgs);
            }
        });

    msgs
}

fn render_inputs(ui: &mut egui::Ui, model: &AssetsModel, msgs: &mut Vec<AssetsMsg>) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("asset_kind_picker")
            .width(90.0)
            .selected_text(model.kind.as_str())
            .show_ui(ui, |ui| {
                for kind in [AssetKind::Image, AssetKind::File] {
                    if ui
                        .selectable_label(model.kind == kind, kind.as_str())
                        .clicked()
                    {
                        msgs.push(AssetsMsg::KindChanged(kind));
                    }
                }
            });

        let mut slug = model.slug.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut slug)
                    .hint_text("asset slug")
                    .desired_width(180.0),
            )
            .changed()
        {
            msgs.push(AssetsMsg::SlugChanged(slug));
        }
    });

    if model.kind == AssetKind::Image {
        ui.horizontal(|ui| {
            let mut size = model.size.clone();
            ui.label("Size");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut size)
                        .hint_text("300x200")
                        .desired_width(80.0),
                )
                .changed()
            {
                msgs.push(AssetsMsg::SizeChanged(size));
            }

            let mut crop = model.crop.clone();
            ui.label("Crop");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut crop)
                        .hint_text("center")
                        .desired_width(80.0),
                )
                .changed()
            {
                msgs.push(AssetsMsg::CropChanged(crop));
            }

            let mut quality = model.quality.clone();
            ui.label("Quality");
            if ui
                .add(
                    egui::TextEdit::singleline(&mut quality)
                        .hint_text("85")
                        .desired_width(40.0),
                )
                .changed()
            {
                msgs.push(AssetsMsg::QualityChanged(quality));
            }
        });
    }
}

fn render_actions(ui: &mut egui::Ui, model: &AssetsModel, msgs: &mut Vec<AssetsMsg>) {
    ui.horizontal(|ui| {
        let can_resolve = !model.in_flight() && !model.slug.trim().is_empty();
        if ui
            .add_enabled(
                can_resolve,
                egui::Button::new(format!(
                    "{} Resolve URL",
                    egui_phosphor::regular::MAGNIFYING_GLASS
                )),
            )
            .on_disabled_hover_text("Enter a slug first")
            .clicked()
        {
            msgs.push(AssetsMsg::ResolveRequested);
        }

        if model.in_flight() {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}

fn render_resolved(
    ui: &mut egui::Ui,
    model: &AssetsModel,
    info: &AssetInfo,
    msgs: &mut Vec<AssetsMsg>,
) {
    if !info.title.is_empty() {
        ui.label(&info.title);
    }
    ui.label(egui::RichText::new(&info.url).small().monospace());

    ui.horizontal(|ui| {
        if ui
            .button(format!(
                "{} Open in browser",
                egui_phosphor::regular::ARROW_SQUARE_OUT
            ))
            .clicked()
        {
            msgs.push(AssetsMsg::OpenResolved);
        }

        let label = match model.kind {
            AssetKind::Image => "Insert image into body",
            AssetKind::File => "Insert link into body",
        };
        if ui
            .button(format!("{} {}", egui_phosphor::regular::PLUS, label))
            .clicked()
        {
            msgs.push(AssetsMsg::InsertRequested);
        }
    });
}
