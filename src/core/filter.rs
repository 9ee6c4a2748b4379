// LeadDeck - core/filter.rs
//
// Search and tag filter engine for leads.
// Both criteria are AND-combined; collection order is preserved.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Lead, TagFilter};

/// Current view parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Substring search over name and email (case-insensitive). Stored
    /// verbatim; folding happens at match time.
    pub search_term: String,

    /// Tag restriction.
    pub tag_filter: TagFilter,
}

impl Criteria {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.tag_filter == TagFilter::All
    }
}

/// Does `lead` match a search term that has already been lower-cased?
fn matches_search_lower(lead: &Lead, term_lower: &str) -> bool {
    term_lower.is_empty()
        || lead.name.to_lowercase().contains(term_lower)
        || lead.email.to_lowercase().contains(term_lower)
}

/// Case-insensitive substring match against name or email.
pub fn matches_search(lead: &Lead, term: &str) -> bool {
    matches_search_lower(lead, &term.to_lowercase())
}

/// Tag match. `NoTags` only matches an absent tag, never `Some("")`.
pub fn matches_tag(lead: &Lead, filter: &TagFilter) -> bool {
    match filter {
        TagFilter::All => true,
        TagFilter::NoTags => lead.tag.is_none(),
        TagFilter::Tag(wanted) => lead.tag.as_deref() == Some(wanted.as_str()),
    }
}

/// Apply criteria to a slice of leads, returning indices of matching leads.
///
/// Indices point into the original slice, in insertion order.
pub fn apply_filters(leads: &[Lead], criteria: &Criteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..leads.len()).collect();
    }

    let term_lower = criteria.search_term.to_lowercase();

    leads
        .iter()
        .enumerate()
        .filter(|(_, lead)| {
            matches_search_lower(lead, &term_lower) && matches_tag(lead, &criteria.tag_filter)
        })
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_lead(id: u64, name: &str, email: &str, tag: Option<&str>) -> Lead {
        Lead {
            id,
            name: name.to_string(),
            email: email.to_string(),
            tag: tag.map(str::to_string),
            connected: false,
            date: String::new(),
            weekday: String::new(),
            selected: false,
        }
    }

    #[test]
    fn test_empty_criteria_returns_all() {
        let leads = vec![
            make_lead(1, "Leanne Graham", "sincere@april.biz", Some("Team")),
            make_lead(2, "Ervin Howell", "shanna@melissa.tv", None),
        ];
        assert_eq!(apply_filters(&leads, &Criteria::default()), vec![0, 1]);
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitive() {
        let leads = vec![
            make_lead(1, "Leanne Graham", "sincere@april.biz", None),
            make_lead(2, "Ervin Howell", "shanna@melissa.tv", None),
        ];
        let by_name = Criteria {
            search_term: "ERVIN".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&leads, &by_name), vec![1]);

        let by_email = Criteria {
            search_term: "April".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&leads, &by_email), vec![0]);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let lead = make_lead(1, "Ervin Howell", "shanna@melissa.tv", None);
        assert!(matches_search(&lead, "ervin how"));
        assert!(!matches_search(&lead, " ervin"));
    }

    #[test]
    fn test_no_tags_excludes_empty_string_tag() {
        let absent = make_lead(1, "A", "a@x.io", None);
        let empty = make_lead(2, "B", "b@x.io", Some(""));
        assert!(matches_tag(&absent, &TagFilter::NoTags));
        assert!(!matches_tag(&empty, &TagFilter::NoTags));
        assert!(matches_tag(&empty, &TagFilter::Tag(String::new())));
    }

    #[test]
    fn test_combined_criteria_preserve_order() {
        let leads = vec![
            make_lead(1, "Clementine Bauch", "nathan@yesenia.net", Some("Team")),
            make_lead(2, "Chelsey Dietrich", "lucio_hettinger@annie.ca", Some("Summit")),
            make_lead(3, "Clementina DuBuque", "rey.padberg@karina.biz", Some("Team")),
        ];
        let criteria = Criteria {
            search_term: "clement".to_string(),
            tag_filter: TagFilter::Tag("Team".to_string()),
        };
        assert_eq!(apply_filters(&leads, &criteria), vec![0, 2]);
    }
}
