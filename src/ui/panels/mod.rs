// LeadDeck - ui/panels/mod.rs

pub mod filters;
pub mod leads_table;
pub mod placeholder;
pub mod sidebar;
pub mod toolbar;
