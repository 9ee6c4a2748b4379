// LeadDeck - ui/panels/sidebar.rs
//
// Navigation sidebar grouped by category. Presentation only: the selected
// entry is highlighted but no other page exists.

use egui::RichText;

/// (label, category). An empty category renders without a heading.
const MENU: &[(&str, &str)] = &[
    ("Home", ""),
    ("Members", "Team Management"),
    ("Departments", "Team Management"),
    ("Bulk Adjustments", "Team Management"),
    ("Leads", "Leads Management"),
    ("Tags", "Leads Management"),
    ("Customization", "Brand & Products"),
    ("Products", "Brand & Products"),
    ("Integrations", "Configuration"),
    ("Settings", "Configuration"),
    ("FAQs", "Support"),
];

/// Render the sidebar. `active` indexes into the menu.
pub fn render(ui: &mut egui::Ui, active: &mut usize) {
    ui.add_space(8.0);
    ui.heading(crate::util::constants::APP_NAME);
    ui.separator();

    let mut current_category = "";
    for (idx, (label, category)) in MENU.iter().enumerate() {
        if *category != current_category {
            current_category = category;
            ui.add_space(8.0);
            ui.label(RichText::new(category.to_uppercase()).small().weak());
        }
        if ui.selectable_label(*active == idx, *label).clicked() {
            *active = idx;
        }
    }
}
