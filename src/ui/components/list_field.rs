// SPDX-License-Identifier: MIT

//! List-field editor in an MVU-friendly shape.
//!
//! Replaces the site's stringly-typed widget (backing text, option list, and
//! add input looked up by element-id convention) with one explicit model per
//! field, constructed once at setup time. All state lives in the model; the
//! view only emits messages.

use std::collections::BTreeMap;

use eframe::egui;

use crate::models::list_field::{Entry, ListField};
use crate::utils::contrast;

/// How entries are added and rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFieldStyle {
    /// Plain labels.
    #[default]
    Plain,
    /// The pending value is a `#rrggbb` color; the entry is decorated with a
    /// background/foreground style and rendered as a colored chip.
    Colored,
}

/// UI model for one list field, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFieldModel {
    heading: String,
    style: ListFieldStyle,
    field: ListField,
    add_input: String,
    selected: Vec<bool>,
}

/// Messages emitted by the list-field view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListFieldMsg {
    AddInputChanged(String),
    /// Append the pending value as a plain entry.
    AddValue,
    /// Append the pending value as a color-decorated entry.
    AddColorValue,
    ToggleSelected(usize),
    /// Remove every selected entry, highest index first.
    RemoveSelected,
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFieldEvent {
    pub message: String,
    pub is_error: bool,
}

impl ListFieldModel {
    pub fn new(name: &str, heading: &str, style: ListFieldStyle) -> Self {
        Self {
            heading: heading.to_string(),
            style,
            field: ListField::new(name),
            add_input: String::new(),
            selected: Vec::new(),
        }
    }

    pub fn field(&self) -> &ListField {
        &self.field
    }

    pub fn style(&self) -> ListFieldStyle {
        self.style
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &sel)| sel.then_some(i))
            .collect()
    }
}

/// Apply a message to the model. Returns a feedback event when relevant.
pub fn update(model: &mut ListFieldModel, msg: ListFieldMsg) -> Option<ListFieldEvent> {
    match msg {
        ListFieldMsg::AddInputChanged(text) => {
            model.add_input = text;
            None
        }
        ListFieldMsg::AddValue => add_entry(model, BTreeMap::new()),
        ListFieldMsg::AddColorValue => {
            let raw = model.add_input.trim().to_string();
            if raw.is_empty() {
                return None;
            }
            let background = match contrast::parse_hex_color(&raw) {
                Ok(rgb) => rgb,
                Err(err) => {
                    return Some(ListFieldEvent {
                        message: err.to_string(),
                        is_error: true,
                    });
                }
            };

            let foreground = contrast::foreground_for(background);
            let mut attributes = BTreeMap::new();
            attributes.insert("style".to_string(), contrast::color_style(&raw, foreground));
            add_entry(model, attributes)
        }
        ListFieldMsg::ToggleSelected(index) => {
            if let Some(flag) = model.selected.get_mut(index) {
                *flag = !*flag;
            }
            None
        }
        ListFieldMsg::RemoveSelected => {
            let indices = model.selected_indices();
            if indices.is_empty() {
                return None;
            }

            model.field.remove_descending(&indices);
            model.selected = vec![false; model.field.len()];
            Some(ListFieldEvent {
                message: format!(
                    "Removed {} entr{} from {}.",
                    indices.len(),
                    if indices.len() == 1 { "y" } else { "ies" },
                    model.field.name()
                ),
                is_error: false,
            })
        }
    }
}

/// Append the trimmed pending value; empty input is a silent no-op.
fn add_entry(
    model: &mut ListFieldModel,
    attributes: BTreeMap<String, String>,
) -> Option<ListFieldEvent> {
    let label = model.add_input.trim().to_string();
    if label.is_empty() {
        return None;
    }

    model
        .field
        .push(Entry::with_attributes(label.clone(), attributes));
    model.selected.push(false);
    model.add_input.clear();

    Some(ListFieldEvent {
        message: format!("Added '{}' to {}.", label, model.field.name()),
        is_error: false,
    })
}

/// Render the list field and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &ListFieldModel) -> Vec<ListFieldMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new(&model.heading)
        .default_open(true)
        .show(ui, |ui| {
            render_add_row(ui, model, &mut msgs);
            ui.add_space(6.0);
            render_entries(ui, model, &mut msgs);
            ui.add_space(6.0);
            render_backing_text(ui, model);
        });

    msgs
}

/// Pending-value input plus the add button matching the field style.
fn render_add_row(ui: &mut egui::Ui, model: &ListFieldModel, msgs: &mut Vec<ListFieldMsg>) {
    ui.horizontal(|ui| {
        let hint = match model.style {
            ListFieldStyle::Plain => "New value",
            ListFieldStyle::Colored => "e.g., #C0C0C0",
        };

        let mut buffer = model.add_input.clone();
        let resp = ui.add(
            egui::TextEdit::singleline(&mut buffer)
                .hint_text(hint)
                .desired_width(180.0),
        );
        if resp.changed() {
            msgs.push(ListFieldMsg::AddInputChanged(buffer));
        }

        let add_msg = match model.style {
            ListFieldStyle::Plain => ListFieldMsg::AddValue,
            ListFieldStyle::Colored => ListFieldMsg::AddColorValue,
        };

        if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
            msgs.push(add_msg.clone());
        }

        if ui
            .add(egui::Button::new(format!(
                "{} Add",
                egui_phosphor::regular::PLUS
            )))
            .clicked()
        {
            msgs.push(add_msg);
        }

        let any_selected = model.selected.iter().any(|&sel| sel);
        if ui
            .add_enabled(
                any_selected,
                egui::Button::new(format!(
                    "{} Remove selected",
                    egui_phosphor::regular::TRASH_SIMPLE
                )),
            )
            .on_disabled_hover_text("Select entries to remove")
            .clicked()
        {
            msgs.push(ListFieldMsg::RemoveSelected);
        }
    });
}

/// Entries as selectable chips, colored when the field style asks for it.
fn render_entries(ui: &mut egui::Ui, model: &ListFieldModel, msgs: &mut Vec<ListFieldMsg>) {
    if model.field.is_empty() {
        ui.label(
            egui::RichText::new("No entries yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for (index, entry) in model.field.entries().iter().enumerate() {
            let selected = model.selected.get(index).copied().unwrap_or(false);

            let clicked = match model.style {
                ListFieldStyle::Plain => ui.selectable_label(selected, &entry.label).clicked(),
                ListFieldStyle::Colored => {
                    render_colored_chip(ui, &entry.label, selected).clicked()
                }
            };

            if clicked {
                msgs.push(ListFieldMsg::ToggleSelected(index));
            }
        }
    });
}

/// A chip filled with the entry's own color and a readable text color.
fn render_colored_chip(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let (fill, text) = match contrast::parse_hex_color(label) {
        Ok(rgb) => {
            let fg = if contrast::foreground_for(rgb) == contrast::FOREGROUND_DARK {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };
            (egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2), fg)
        }
        // Entries only reach the list through a successful parse, but stay
        // renderable if that ever changes.
        Err(_) => (egui::Color32::from_gray(80), egui::Color32::WHITE),
    };

    let mut button = egui::Button::new(egui::RichText::new(label).color(text)).fill(fill);
    if selected {
        button = button.stroke(egui::Stroke::new(2.0, ui.visuals().selection.stroke.color));
    }
    ui.add(button)
}

/// Read-only view of the serialized backing text the server would receive.
fn render_backing_text(ui: &mut egui::Ui, model: &ListFieldModel) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", model.field.name()))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.label(
            egui::RichText::new(model.field.backing_text())
                .small()
                .monospace(),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> ListFieldModel {
        ListFieldModel::new("tags", "Tags", ListFieldStyle::Plain)
    }

    fn colored() -> ListFieldModel {
        ListFieldModel::new("colors", "Colors", ListFieldStyle::Colored)
    }

    fn add(model: &mut ListFieldModel, value: &str) -> Option<ListFieldEvent> {
        update(model, ListFieldMsg::AddInputChanged(value.into()));
        update(model, ListFieldMsg::AddValue)
    }

    #[test]
    fn add_appends_clears_input_and_serializes() {
        let mut model = plain();

        let event = add(&mut model, "red").expect("event expected");

        assert!(!event.is_error);
        assert_eq!(model.field.backing_text(), "red");
        assert!(model.add_input.is_empty());
    }

    #[test]
    fn empty_add_input_is_a_silent_no_op() {
        let mut model = plain();

        assert!(add(&mut model, "   ").is_none());
        assert!(model.field.is_empty());
    }

    #[test]
    fn backing_text_tracks_every_addition_in_order() {
        let mut model = plain();

        add(&mut model, "red");
        assert_eq!(model.field.backing_text(), "red");
        add(&mut model, "blue");
        assert_eq!(model.field.backing_text(), "red, blue");
        add(&mut model, "green");
        assert_eq!(model.field.backing_text(), "red, blue, green");
    }

    #[test]
    fn remove_selected_drops_exactly_the_flagged_entries() {
        let mut model = plain();
        for label in ["A", "B", "C"] {
            add(&mut model, label);
        }

        update(&mut model, ListFieldMsg::ToggleSelected(0));
        update(&mut model, ListFieldMsg::ToggleSelected(2));
        let event = update(&mut model, ListFieldMsg::RemoveSelected).expect("event expected");

        assert!(!event.is_error);
        assert_eq!(model.field.len(), 1);
        assert_eq!(model.field.entries()[0].label, "B");
        assert_eq!(model.field.backing_text(), "B");
        assert!(model.selected.iter().all(|&sel| !sel));
    }

    #[test]
    fn remove_with_nothing_selected_is_a_no_op() {
        let mut model = plain();
        add(&mut model, "keep");

        assert!(update(&mut model, ListFieldMsg::RemoveSelected).is_none());
        assert_eq!(model.field.backing_text(), "keep");
    }

    #[test]
    fn add_remove_scenario_matches_widget_semantics() {
        let mut model = plain();

        add(&mut model, "red");
        add(&mut model, "blue");
        assert_eq!(model.field.backing_text(), "red, blue");

        update(&mut model, ListFieldMsg::ToggleSelected(0));
        update(&mut model, ListFieldMsg::RemoveSelected);

        assert_eq!(model.field.len(), 1);
        assert_eq!(model.field.entries()[0].label, "blue");
        assert_eq!(model.field.backing_text(), "blue");
    }

    #[test]
    fn color_add_decorates_entry_with_style_attribute() {
        let mut model = colored();

        update(&mut model, ListFieldMsg::AddInputChanged("#FF0000".into()));
        let event = update(&mut model, ListFieldMsg::AddColorValue).expect("event expected");

        assert!(!event.is_error);
        let entry = &model.field.entries()[0];
        assert_eq!(entry.label, "#FF0000");
        assert_eq!(
            entry.attributes.get("style").map(String::as_str),
            Some("background-color: #FF0000; color: #FFFFFF;")
        );
    }

    #[test]
    fn light_color_gets_dark_text_in_style_attribute() {
        let mut model = colored();

        update(&mut model, ListFieldMsg::AddInputChanged("#C0C0C0".into()));
        update(&mut model, ListFieldMsg::AddColorValue);

        assert_eq!(
            model.field.entries()[0].attributes.get("style").map(String::as_str),
            Some("background-color: #C0C0C0; color: #000000;")
        );
    }

    #[test]
    fn invalid_color_surfaces_error_and_adds_nothing() {
        let mut model = colored();

        update(&mut model, ListFieldMsg::AddInputChanged("not-a-color".into()));
        let event = update(&mut model, ListFieldMsg::AddColorValue).expect("event expected");

        assert!(event.is_error);
        assert!(model.field.is_empty());
        // Input is kept so the user can fix it.
        assert_eq!(model.add_input, "not-a-color");
    }

    #[test]
    fn toggle_out_of_bounds_is_ignored() {
        let mut model = plain();
        add(&mut model, "only");

        assert!(update(&mut model, ListFieldMsg::ToggleSelected(7)).is_none());
        assert_eq!(model.selected, vec![false]);
    }
}
