// LeadDeck - ui/panels/filters.rs
//
// Search box and tag dropdown. Shown on the Leads tab when either toggle
// is open.

use crate::app::state::LeadStore;
use crate::core::model::{DashboardTab, TagFilter};

/// Render the filter row. `search_draft` is the text-edit buffer owned by
/// the shell; every edit is pushed to the store immediately.
pub fn render(ui: &mut egui::Ui, store: &mut LeadStore, search_draft: &mut String) {
    if store.active_tab != DashboardTab::Leads || !(store.show_search || store.show_filter_dropdown)
    {
        return;
    }

    ui.horizontal(|ui| {
        if store.show_filter_dropdown {
            let current = store.criteria().tag_filter.clone();
            let mut chosen = None;
            egui::ComboBox::from_id_salt("tag_filter")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for choice in TagFilter::choices() {
                        let label = choice.label().to_string();
                        if ui.selectable_label(current == choice, label).clicked() {
                            chosen = Some(choice);
                        }
                    }
                });
            if let Some(choice) = chosen {
                if choice != current {
                    store.set_tag_filter(choice);
                }
            }
        }

        if store.show_search {
            let response = ui.add(
                egui::TextEdit::singleline(search_draft)
                    .hint_text("Search by name or email")
                    .desired_width(260.0),
            );
            if response.changed() {
                store.set_search_term(search_draft.clone());
            }
            if !search_draft.is_empty() && ui.small_button("\u{2715}").clicked() {
                search_draft.clear();
                store.set_search_term(String::new());
            }
        }
    });
    ui.add_space(4.0);
}
