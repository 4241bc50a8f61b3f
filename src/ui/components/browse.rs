// SPDX-License-Identifier: MIT

//! Blog sort-tab and search affordances.
//!
//! Selecting a tab posts its sort key to the site; selecting the already
//! active tab opens the tab page in the browser instead. Search opens the
//! site's search page with the query appended.

use eframe::egui;

use crate::net::site::SortTab;

/// UI model for the browse panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseModel {
    active_tab: SortTab,
    query: String,
    posting: bool,
}

/// Messages emitted by the browse view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseMsg {
    TabClicked(SortTab),
    SortPosted {
        tab: SortTab,
        result: Result<(), String>,
    },
    QueryChanged(String),
    SearchSubmitted,
}

/// Side effects requested by the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    PostSortTab(SortTab),
    OpenTabPage(SortTab),
    OpenSearch(String),
}

/// User-facing feedback surfaced to the status bar or error modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseEvent {
    pub message: String,
    pub is_error: bool,
}

impl BrowseModel {
    pub fn active_tab(&self) -> SortTab {
        self.active_tab
    }
}

/// Apply a message to the model, enqueueing commands for side effects.
pub fn update(
    model: &mut BrowseModel,
    msg: BrowseMsg,
    cmds: &mut Vec<BrowseCommand>,
) -> Option<BrowseEvent> {
    match msg {
        BrowseMsg::TabClicked(tab) => {
            if tab == model.active_tab {
                // Re-selecting the active tab redirects to its page.
                cmds.push(BrowseCommand::OpenTabPage(tab));
            } else if !model.posting {
                model.posting = true;
                cmds.push(BrowseCommand::PostSortTab(tab));
            }
            None
        }
        BrowseMsg::SortPosted { tab, result } => {
            model.posting = false;
            match result {
                Ok(()) => {
                    model.active_tab = tab;
                    Some(BrowseEvent {
                        message: format!("Sort set to {}.", tab.label()),
                        is_error: false,
                    })
                }
                Err(err) => Some(BrowseEvent {
                    message: format!("Sort update failed: {err}"),
                    is_error: true,
                }),
            }
        }
        BrowseMsg::QueryChanged(text) => {
            model.query = text;
            None
        }
        BrowseMsg::SearchSubmitted => {
            let query = model.query.trim();
            if !query.is_empty() {
                cmds.push(BrowseCommand::OpenSearch(query.to_string()));
            }
            None
        }
    }
}

/// Render the browse panel and return any messages triggered by interaction.
pub fn view(ui: &mut egui::Ui, model: &BrowseModel) -> Vec<BrowseMsg> {
    let mut msgs = Vec::new();

    egui::CollapsingHeader::new("Browse the site")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label("Sort");
                for tab in SortTab::ALL {
                    let button =
                        egui::Button::new(tab.label()).selected(model.active_tab() == tab);
                    if ui.add_enabled(!model.posting, button).clicked() {
                        msgs.push(BrowseMsg::TabClicked(tab));
                    }
                }
                if model.posting {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let mut query = model.query.clone();
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Search posts…")
                        .desired_width(200.0),
                );
                if resp.changed() {
                    msgs.push(BrowseMsg::QueryChanged(query));
                }
                if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                    msgs.push(BrowseMsg::SearchSubmitted);
                }

                if ui
                    .button(format!(
                        "{} Search",
                        egui_phosphor::regular::MAGNIFYING_GLASS
                    ))
                    .clicked()
                {
                    msgs.push(BrowseMsg::SearchSubmitted);
                }
            });
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_new_tab_posts_its_key() {
        let mut model = BrowseModel::default();
        let mut cmds = Vec::new();

        update(&mut model, BrowseMsg::TabClicked(SortTab::Popular), &mut cmds);

        assert_eq!(cmds, vec![BrowseCommand::PostSortTab(SortTab::Popular)]);
        assert!(model.posting);
        // Active tab flips only once the post succeeds.
        assert_eq!(model.active_tab(), SortTab::Latest);
    }

    #[test]
    fn selecting_the_active_tab_opens_its_page() {
        let mut model = BrowseModel::default();
        let mut cmds = Vec::new();

        update(&mut model, BrowseMsg::TabClicked(SortTab::Latest), &mut cmds);

        assert_eq!(cmds, vec![BrowseCommand::OpenTabPage(SortTab::Latest)]);
        assert!(!model.posting);
    }

    #[test]
    fn successful_post_activates_the_tab() {
        let mut model = BrowseModel::default();
        let mut cmds = Vec::new();
        update(&mut model, BrowseMsg::TabClicked(SortTab::Topics), &mut cmds);

        let event = update(
            &mut model,
            BrowseMsg::SortPosted {
                tab: SortTab::Topics,
                result: Ok(()),
            },
            &mut cmds,
        )
        .unwrap();

        assert!(!event.is_error);
        assert_eq!(model.active_tab(), SortTab::Topics);
        assert!(!model.posting);
    }

    #[test]
    fn failed_post_keeps_the_old_tab() {
        let mut model = BrowseModel::default();
        let mut cmds = Vec::new();
        update(&mut model, BrowseMsg::TabClicked(SortTab::Topics), &mut cmds);

        let event = update(
            &mut model,
            BrowseMsg::SortPosted {
                tab: SortTab::Topics,
                result: Err("connection refused".into()),
            },
            &mut cmds,
        )
        .unwrap();

        assert!(event.is_error);
        assert_eq!(model.active_tab(), SortTab::Latest);
    }

    #[test]
    fn search_submits_trimmed_query_and_ignores_blank_input() {
        let mut model = BrowseModel::default();
        let mut cmds = Vec::new();

        update(&mut model, BrowseMsg::QueryChanged("  rust ".into()), &mut cmds);
        update(&mut model, BrowseMsg::SearchSubmitted, &mut cmds);
        assert_eq!(cmds, vec![BrowseCommand::OpenSearch("rust".into())]);

        cmds.clear();
        update(&mut model, BrowseMsg::QueryChanged("   ".into()), &mut cmds);
        update(&mut model, BrowseMsg::SearchSubmitted, &mut cmds);
        assert!(cmds.is_empty());
    }
}
