// LeadDeck - ui/theme.rs
//
// Colour scheme, tag badge colours, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// (background, text) colours for a tag badge. `None` is the "No tags
/// added" badge; unknown tags share the muted palette.
pub fn tag_colours(tag: Option<&str>) -> (Color32, Color32) {
    match tag {
        Some("Team") => (
            Color32::from_rgb(239, 246, 255),  // Blue 50
            Color32::from_rgb(29, 78, 216),    // Blue 700
        ),
        Some("Summit") => (
            Color32::from_rgb(240, 253, 244),  // Green 50
            Color32::from_rgb(21, 128, 61),    // Green 700
        ),
        Some("GITEX DUBAI") => (
            Color32::from_rgb(254, 242, 242),  // Red 50
            Color32::from_rgb(185, 28, 28),    // Red 700
        ),
        _ => (
            Color32::from_rgb(243, 244, 246),  // Gray 100
            Color32::from_rgb(107, 114, 128),  // Gray 500
        ),
    }
}

/// Connected / not-connected indicator colour.
pub fn connection_colour(connected: bool) -> Color32 {
    if connected {
        Color32::from_rgb(34, 197, 94) // Green 500
    } else {
        Color32::from_rgb(156, 163, 175) // Gray 400
    }
}

/// Skeleton placeholder fill while loading.
pub fn skeleton_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(55, 65, 81) // Gray 700
    } else {
        Color32::from_rgb(229, 231, 235) // Gray 200
    }
}

/// Success notice colour.
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(21, 128, 61); // Green 700

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 44.0;
pub const SKELETON_HEIGHT: f32 = 18.0;
