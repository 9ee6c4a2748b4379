// LeadDeck - ui/panels/placeholder.rs
//
// Lead Quality Score and Leaderboard tabs. Both are headers only for now.

use crate::core::model::DashboardTab;
use egui::RichText;

/// Render the placeholder table for a non-Leads tab.
pub fn render(ui: &mut egui::Ui, tab: DashboardTab) {
    let columns: &[&str] = match tab {
        DashboardTab::Quality => &["Lead Name", "Quality Score", "Status", "Last Updated"],
        DashboardTab::Leaderboard => &["Rank", "User", "Score", "Achievement"],
        DashboardTab::Leads => return,
    };

    ui.heading(tab.label());
    ui.add_space(8.0);

    egui::Grid::new(("placeholder_table", tab.label()))
        .num_columns(columns.len())
        .spacing([32.0, 8.0])
        .show(ui, |ui| {
            for column in columns {
                ui.label(RichText::new(*column).strong());
            }
            ui.end_row();
        });

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Under Development").weak());
    });
}
