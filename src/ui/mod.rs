// SPDX-License-Identifier: MIT

//! Top-level egui application shell for composing a blog post.
//! Handles layout, form controls, and wiring to the command workers.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::logic::form::{ensure_extension, suggested_export_name};
use crate::mvu::{self, AppModel, Command, Msg, Services};
use crate::ui::components::{assets, browse, list_field};

/// Stateful egui application for composing and exporting a post form.
pub struct PostPackApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl PostPackApp {
    /// Spin up the command workers and an empty model.
    pub fn new(services: Services) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let services = Arc::new(services);
        let threads = std::thread::available_parallelism()
            .map(|n| n.get().min(4).max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let services = Arc::clone(&services);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &services);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for PostPackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Post Composer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_export_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_title_input(ui);
                ui.add_space(12.0);

                self.render_body_input(ui);
                ui.add_space(12.0);

                let tag_msgs = list_field::view(ui, &self.model.tags);
                self.inbox.extend(tag_msgs.into_iter().map(Msg::Tags));
                ui.add_space(12.0);

                let cat_msgs = list_field::view(ui, &self.model.categories);
                self.inbox.extend(cat_msgs.into_iter().map(Msg::Categories));
                ui.add_space(12.0);

                let color_msgs = list_field::view(ui, &self.model.colors);
                self.inbox.extend(color_msgs.into_iter().map(Msg::Colors));
                ui.add_space(12.0);

                let asset_msgs = assets::view(ui, &self.model.assets);
                self.inbox.extend(asset_msgs.into_iter().map(Msg::Assets));
                ui.add_space(12.0);

                let browse_msgs = browse::view(ui, &self.model.browse);
                self.inbox.extend(browse_msgs.into_iter().map(Msg::Browse));
                ui.add_space(8.0);
            });
        });
    }
}

impl PostPackApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Export button with a save dialog; the dialog runs on the UI thread
    /// like every other modal interaction.
    fn render_export_button(&mut self, ui: &mut egui::Ui) {
        let export_enabled = !self.model.title.trim().is_empty();
        let button = egui::Button::new(format!(
            "{} Export form",
            egui_phosphor::regular::FLOPPY_DISK
        ));

        if ui
            .add_enabled(export_enabled, button)
            .on_disabled_hover_text("Please enter a title")
            .clicked()
        {
            let default_name = suggested_export_name(&self.model.title);
            let dialog = rfd::FileDialog::new()
                .set_title("Export post form")
                .add_filter("JSON", &["json"])
                .set_file_name(&default_name);

            if let Some(path) = dialog.save_file() {
                let output = ensure_extension(path, "json");
                self.inbox.push(Msg::ExportRequested(output));
            } else {
                self.inbox.push(Msg::ExportCancelled);
            }
        }
    }

    fn render_title_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Title");
        ui.add_space(4.0);
        let mut title = self.model.title.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut title).hint_text("e.g., Shiny new post"))
            .changed()
        {
            self.inbox.push(Msg::TitleChanged(title));
        }
    }

    fn render_body_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Body");
        ui.label(
            egui::RichText::new("Use Markdown to format text.")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(4.0);
        let mut body = self.model.body.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut body)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(10),
            )
            .changed()
        {
            self.inbox.push(Msg::BodyChanged(body));
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0))
                        .on_hover_text(format!(
                            "{} task(s) running in background",
                            self.model.pending_commands
                        ));
                }
            });
        }
    }
}
