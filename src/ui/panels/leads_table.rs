// LeadDeck - ui/panels/leads_table.rs
//
// Main leads table: select-all header checkbox, one row per visible lead,
// skeleton rows while a load is outstanding.
//
// Row checkbox toggles are collected during rendering and applied after
// the grid so `store` is not mutably borrowed while lead references are live.

use crate::app::state::LeadStore;
use crate::core::model::Lead;
use crate::ui::theme;
use crate::util::constants;
use egui::RichText;

/// Render the table into the central panel.
pub fn render(ui: &mut egui::Ui, store: &mut LeadStore) {
    let mut toggle_all = false;
    let mut toggled: Option<u64> = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("leads_table")
                .num_columns(5)
                .striped(true)
                .min_row_height(theme::ROW_HEIGHT)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    let mut all_selected = store.selection_aggregate();
                    if ui.checkbox(&mut all_selected, RichText::new("Lead").strong()).changed() {
                        toggle_all = true;
                    }
                    ui.label(RichText::new("Tags").strong());
                    ui.label(RichText::new("Connected with").strong());
                    ui.label(RichText::new("Date").strong());
                    ui.label(RichText::new("Export").strong());
                    ui.end_row();

                    if store.is_loading() {
                        skeleton_rows(ui);
                        return;
                    }

                    for lead in store.visible() {
                        if lead_row(ui, lead) {
                            toggled = Some(lead.id);
                        }
                        ui.end_row();
                    }
                });

            if !store.is_loading() && store.visible_count() == 0 {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No leads found").weak());
                });
            }
        });

    if toggle_all {
        store.toggle_select_all();
    }
    if let Some(id) = toggled {
        store.toggle_select_lead(id);
    }
}

/// One lead row. Returns true when its checkbox was clicked.
fn lead_row(ui: &mut egui::Ui, lead: &Lead) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui| {
        let mut selected = lead.selected;
        clicked = ui.checkbox(&mut selected, "").changed();
        ui.vertical(|ui| {
            ui.label(&lead.name);
            ui.label(RichText::new(&lead.email).small().weak());
        });
    });

    ui.horizontal(|ui| match lead.tag.as_deref() {
        Some(tag) => {
            tag_badge(ui, Some(tag), tag);
            tag_badge(ui, None, "+4");
        }
        None => tag_badge(ui, None, "No tags added"),
    });

    ui.horizontal(|ui| {
        ui.label(RichText::new("\u{25cf}").color(theme::connection_colour(lead.connected)));
        ui.label(initials(&lead.name));
        ui.label(&lead.name);
    });

    ui.vertical(|ui| {
        ui.label(&lead.date);
        ui.label(RichText::new(&lead.weekday).small().weak());
    });

    ui.horizontal(|ui| {
        for integration in integrations_for(lead.tag.as_deref()) {
            ui.label(RichText::new(*integration).small());
        }
    });

    clicked
}

fn tag_badge(ui: &mut egui::Ui, tag: Option<&str>, text: &str) {
    let (bg, fg) = theme::tag_colours(tag);
    ui.label(RichText::new(format!(" {text} ")).color(fg).background_color(bg));
}

fn skeleton_rows(ui: &mut egui::Ui) {
    let fill = theme::skeleton_fill(ui.visuals().dark_mode);
    for _ in 0..constants::SKELETON_ROWS {
        for width in [160.0, 90.0, 140.0, 100.0, 80.0] {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(width, theme::SKELETON_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(4), fill);
        }
        ui.end_row();
    }
}

/// Upper-case first letters of each word.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Integration badges shown in the Export column.
fn integrations_for(tag: Option<&str>) -> &'static [&'static str] {
    match tag {
        Some("Team") => &["\u{2197} Export"],
        Some("GITEX DUBAI") => &["Zapier", "Pipedrive", "HubSpot"],
        Some("Summit") | None => &["Zapier"],
        Some(_) => &[],
    }
}
