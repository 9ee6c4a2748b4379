// LeadDeck - ui/panels/toolbar.rs
//
// Tab selector plus search / filter toggles and the Export button.

use crate::app::state::LeadStore;
use crate::core::model::DashboardTab;

/// Actions the toolbar hands back to the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Export,
    Reload,
}

/// Render the toolbar. Returns the action requested this frame, if any.
pub fn render(ui: &mut egui::Ui, store: &mut LeadStore) -> Option<ToolbarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        for tab in DashboardTab::all() {
            if ui
                .selectable_label(store.active_tab == *tab, tab.label())
                .clicked()
            {
                store.set_active_tab(*tab);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_export = store.active_tab == DashboardTab::Leads && !store.is_loading();
            if ui
                .add_enabled(can_export, egui::Button::new("\u{2197} Export"))
                .on_hover_text("Export the filtered leads to CSV")
                .clicked()
            {
                action = Some(ToolbarAction::Export);
            }

            if ui
                .add_enabled(!store.is_loading(), egui::Button::new("\u{27f3} Reload"))
                .clicked()
            {
                action = Some(ToolbarAction::Reload);
            }

            let filter_open = store.show_filter_dropdown;
            if ui.selectable_label(filter_open, "Filter").clicked() {
                store.set_show_filter_dropdown(!filter_open);
            }

            let search_open = store.show_search;
            if ui.selectable_label(search_open, "\u{1f50d} Search").clicked() {
                store.set_show_search(!search_open);
            }
        });
    });

    action
}
