// LeadDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Lead (normalised output of ingestion)
// =============================================================================

/// A single contact record surfaced for review.
///
/// `selected` is owned by the store, never by the data source: every load
/// starts with all leads unselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    /// Unique identifier, stable for the lifetime of the record.
    pub id: u64,

    /// Display name as delivered by the source.
    pub name: String,

    /// Email address, lower-cased at ingestion.
    pub email: String,

    /// Label from an open-ended set. `None` means "no tags added" and is
    /// distinct from `Some("")`.
    pub tag: Option<String>,

    /// Source-provided connection flag.
    pub connected: bool,

    /// Display date (opaque to the core).
    pub date: String,

    /// Display weekday (opaque to the core).
    pub weekday: String,

    /// Selection state, mutated only by the store.
    pub selected: bool,
}

// =============================================================================
// RawRecord (loader boundary)
// =============================================================================

/// A record accepted by the loader, before normalisation.
///
/// Records without an identifier never reach this type; the loader rejects
/// them while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub connected: bool,
}

// =============================================================================
// Tags
// =============================================================================

/// Tag values offered in the filter dropdown.
pub const KNOWN_TAGS: [&str; 3] = ["Team", "Summit", "GITEX DUBAI"];

/// Tag filter criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    /// No tag restriction.
    #[default]
    All,
    /// Only leads whose tag is absent.
    NoTags,
    /// Only leads carrying exactly this tag.
    Tag(String),
}

impl TagFilter {
    /// Parse a filter value. "All" and "NoTags" (or the older "No Tags")
    /// are reserved; any other string selects that tag verbatim.
    pub fn parse(value: &str) -> Self {
        match value {
            "All" => TagFilter::All,
            "NoTags" | "No Tags" => TagFilter::NoTags,
            other => TagFilter::Tag(other.to_string()),
        }
    }

    /// Dropdown choices in display order.
    pub fn choices() -> Vec<TagFilter> {
        let mut choices = Vec::with_capacity(KNOWN_TAGS.len() + 2);
        choices.push(TagFilter::All);
        choices.extend(KNOWN_TAGS.iter().map(|t| TagFilter::Tag((*t).to_string())));
        choices.push(TagFilter::NoTags);
        choices
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &str {
        match self {
            TagFilter::All => "All",
            TagFilter::NoTags => "No tags added",
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Dashboard tabs
// =============================================================================

/// Active view tab of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Leads,
    Quality,
    Leaderboard,
}

impl DashboardTab {
    /// Returns all variants in display order.
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Leads,
            DashboardTab::Quality,
            DashboardTab::Leaderboard,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Leads => "Leads",
            DashboardTab::Quality => "Lead Quality Score",
            DashboardTab::Leaderboard => "Leaderboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filter_parse_reserved_values() {
        assert_eq!(TagFilter::parse("All"), TagFilter::All);
        assert_eq!(TagFilter::parse("NoTags"), TagFilter::NoTags);
        assert_eq!(TagFilter::parse("No Tags"), TagFilter::NoTags);
        assert_eq!(
            TagFilter::parse("GITEX DUBAI"),
            TagFilter::Tag("GITEX DUBAI".to_string())
        );
    }

    #[test]
    fn test_tag_filter_parse_is_case_sensitive() {
        assert_eq!(TagFilter::parse("all"), TagFilter::Tag("all".to_string()));
    }

    #[test]
    fn test_choices_order() {
        let labels: Vec<_> = TagFilter::choices()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(
            labels,
            vec!["All", "Team", "Summit", "GITEX DUBAI", "No tags added"]
        );
    }
}
