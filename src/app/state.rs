// LeadDeck - app/state.rs
//
// Lead collection store. Holds the canonical lead list, the active criteria,
// the derived visible set, and selection bookkeeping. Constructed by the
// top-level application (or a test) and passed by reference; there is no
// process-wide instance.
//
// Every mutating operation ends with `refresh_derived`, so callers never see
// a collection/criteria pair without its matching visible set and aggregate.

use crate::core::filter::{self, Criteria};
use crate::core::ingest;
use crate::core::model::{DashboardTab, Lead, RawRecord, TagFilter};
use crate::core::tagging::TagPolicy;
use crate::util::error::LoadError;

/// Single-user, in-memory lead state.
#[derive(Debug, Default)]
pub struct LeadStore {
    /// All leads, in load order. Source of truth.
    leads: Vec<Lead>,

    /// Active search term and tag filter.
    criteria: Criteria,

    /// Indices into `leads` matching `criteria`.
    visible_indices: Vec<usize>,

    /// True iff the visible set is non-empty and fully selected.
    all_selected: bool,

    /// Whether a load is outstanding.
    loading: bool,

    /// Whether the search box is shown.
    pub show_search: bool,

    /// Whether the tag filter dropdown is shown.
    pub show_filter_dropdown: bool,

    /// Active dashboard tab.
    pub active_tab: DashboardTab,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings from the most recent load.
    pub warnings: Vec<String>,
}

impl LeadStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            status_message: "Ready.".to_string(),
            ..Default::default()
        }
    }

    // -------------------------------------------------------------------------
    // Read API
    // -------------------------------------------------------------------------

    /// Visible leads in collection order.
    pub fn visible(&self) -> Vec<&Lead> {
        self.visible_indices
            .iter()
            .filter_map(|&idx| self.leads.get(idx))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// All leads, including those hidden by the current criteria.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// "All selected" flag bound to the header checkbox.
    pub fn selection_aggregate(&self) -> bool {
        self.all_selected
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of selected leads across the whole collection.
    pub fn selected_count(&self) -> usize {
        self.leads.iter().filter(|l| l.selected).count()
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Mark a load as outstanding. Returns false if one already is; the
    /// caller must not start a second fetch in that case.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            tracing::debug!("Load already in progress; request ignored");
            return false;
        }
        self.loading = true;
        self.status_message = "Loading leads...".to_string();
        true
    }

    /// Replace the collection with a freshly delivered batch and clear the
    /// loading flag.
    pub fn finish_load(&mut self, records: Vec<RawRecord>, policy: &mut dyn TagPolicy) {
        self.load(records, policy);
        self.loading = false;
        // Ingest already logged each warning; only the count is surfaced here.
        self.status_message = match self.warnings.len() {
            0 => format!("Loaded {} leads.", self.leads.len()),
            n => format!("Loaded {} leads ({n} skipped).", self.leads.len()),
        };
    }

    /// Record a failed load. The previous collection is kept unchanged.
    pub fn fail_load(&mut self, error: &LoadError) {
        tracing::warn!(error = %error, "Lead load failed; keeping previous collection");
        self.loading = false;
        self.status_message = format!("Failed to load leads: {error}");
    }

    /// Replace the whole collection. All incoming leads start unselected.
    pub fn load(&mut self, records: Vec<RawRecord>, policy: &mut dyn TagPolicy) {
        let incoming = records.len();
        let outcome = ingest::normalise_records(records, policy);
        self.leads = outcome.leads;
        self.warnings = outcome.warnings;
        self.all_selected = false;
        self.refresh_derived();
        tracing::info!(
            incoming,
            leads = self.leads.len(),
            visible = self.visible_indices.len(),
            "Lead collection replaced"
        );
    }

    // -------------------------------------------------------------------------
    // Criteria
    // -------------------------------------------------------------------------

    /// Set the search term verbatim. Selection flags are left untouched.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.refresh_derived();
        tracing::debug!(visible = self.visible_indices.len(), "Search term changed");
    }

    pub fn set_tag_filter(&mut self, filter: TagFilter) {
        tracing::debug!(filter = %filter, "Tag filter changed");
        self.criteria.tag_filter = filter;
        self.refresh_derived();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Set every visible lead to the negation of the current aggregate.
    /// Hidden leads keep their flags.
    pub fn toggle_select_all(&mut self) {
        let target = !self.all_selected;
        for &idx in &self.visible_indices {
            if let Some(lead) = self.leads.get_mut(idx) {
                lead.selected = target;
            }
        }
        self.refresh_derived();
        tracing::debug!(
            target,
            visible = self.visible_indices.len(),
            all_selected = self.all_selected,
            "Toggled select-all"
        );
    }

    /// Flip one lead's selection. Unknown ids are ignored.
    pub fn toggle_select_lead(&mut self, id: u64) {
        let Some(lead) = self.leads.iter_mut().find(|l| l.id == id) else {
            tracing::debug!(id, "Toggle for unknown lead id ignored");
            return;
        };
        lead.selected = !lead.selected;
        self.refresh_derived();
    }

    // -------------------------------------------------------------------------
    // View flags
    // -------------------------------------------------------------------------

    pub fn set_show_search(&mut self, show: bool) {
        self.show_search = show;
    }

    pub fn set_show_filter_dropdown(&mut self, show: bool) {
        self.show_filter_dropdown = show;
    }

    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    /// Recompute the visible set, then the aggregate from it.
    fn refresh_derived(&mut self) {
        self.visible_indices = filter::apply_filters(&self.leads, &self.criteria);
        self.all_selected = !self.visible_indices.is_empty()
            && self
                .visible_indices
                .iter()
                .all(|&idx| self.leads.get(idx).is_some_and(|l| l.selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tagging::{CyclicTagPolicy, FixedTagPolicy};

    fn raw(id: u64, name: &str, email: &str) -> RawRecord {
        RawRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            connected: false,
        }
    }

    fn store_with(n: u64) -> LeadStore {
        let mut store = LeadStore::new();
        let records = (1..=n)
            .map(|i| raw(i, &format!("Lead {i}"), &format!("lead{i}@example.com")))
            .collect();
        store.load(records, &mut CyclicTagPolicy);
        store
    }

    fn visible_ids(store: &LeadStore) -> Vec<u64> {
        store.visible().iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = LeadStore::new();
        assert!(store.visible().is_empty());
        assert!(!store.selection_aggregate());
        assert!(!store.is_loading());
        assert_eq!(store.active_tab, DashboardTab::Leads);
    }

    #[test]
    fn test_load_resets_selection() {
        let mut store = store_with(3);
        store.toggle_select_all();
        assert!(store.selection_aggregate());

        store.load(vec![raw(9, "Nine", "nine@x.io")], &mut CyclicTagPolicy);
        assert!(!store.selection_aggregate());
        assert_eq!(store.selected_count(), 0);
        assert_eq!(visible_ids(&store), vec![9]);
    }

    #[test]
    fn test_load_applies_existing_criteria() {
        let mut store = LeadStore::new();
        store.set_search_term("ervin");
        store.load(
            vec![
                raw(1, "Leanne Graham", "Sincere@april.biz"),
                raw(2, "Ervin Howell", "Shanna@melissa.tv"),
            ],
            &mut CyclicTagPolicy,
        );
        assert_eq!(visible_ids(&store), vec![2]);
    }

    #[test]
    fn test_toggle_select_all_only_touches_visible() {
        let mut store = LeadStore::new();
        let mut policy = FixedTagPolicy::new([(1, "Team"), (3, "Team")]);
        store.load(
            vec![raw(1, "A", "a@x.io"), raw(2, "B", "b@x.io"), raw(3, "C", "c@x.io")],
            &mut policy,
        );
        store.set_tag_filter(TagFilter::Tag("Team".to_string()));
        store.toggle_select_all();

        let selected: Vec<_> = store.leads().iter().map(|l| l.selected).collect();
        assert_eq!(selected, vec![true, false, true]);
        assert!(store.selection_aggregate());
    }

    #[test]
    fn test_toggle_select_all_twice_clears() {
        let mut store = store_with(4);
        store.toggle_select_all();
        store.toggle_select_all();
        assert!(!store.selection_aggregate());
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_toggle_select_all_on_empty_visible_set() {
        let mut store = store_with(2);
        store.set_search_term("nobody");
        store.toggle_select_all();
        assert!(!store.selection_aggregate());
        assert_eq!(store.selected_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = store_with(2);
        store.toggle_select_lead(404);
        assert_eq!(store.selected_count(), 0);
        assert!(!store.selection_aggregate());
    }

    #[test]
    fn test_single_toggles_drive_aggregate() {
        let mut store = store_with(2);
        store.toggle_select_lead(1);
        assert!(!store.selection_aggregate());
        store.toggle_select_lead(2);
        assert!(store.selection_aggregate());
        store.toggle_select_lead(1);
        assert!(!store.selection_aggregate());
    }

    #[test]
    fn test_aggregate_ignores_hidden_selection() {
        // Lead 1 selected, then hidden: the remaining visible lead is
        // unselected so the aggregate must be false.
        let mut store = LeadStore::new();
        store.load(
            vec![raw(1, "Alpha", "a@x.io"), raw(2, "Beta", "b@x.io")],
            &mut CyclicTagPolicy,
        );
        store.toggle_select_lead(1);
        store.set_search_term("beta");
        assert!(!store.selection_aggregate());
        store.set_search_term("alpha");
        assert!(store.selection_aggregate());
    }

    #[test]
    fn test_load_lifecycle() {
        let mut store = store_with(2);
        assert!(store.begin_load());
        assert!(!store.begin_load());
        assert!(store.is_loading());

        store.fail_load(&LoadError::WorkerDisconnected);
        assert!(!store.is_loading());
        assert_eq!(visible_ids(&store), vec![1, 2]);
        assert!(store.status_message.starts_with("Failed to load leads"));

        assert!(store.begin_load());
        store.finish_load(vec![raw(5, "Five", "five@x.io")], &mut CyclicTagPolicy);
        assert!(!store.is_loading());
        assert_eq!(visible_ids(&store), vec![5]);
    }

    #[test]
    fn test_finish_load_reports_skipped_duplicates_once() {
        let mut store = LeadStore::new();
        assert!(store.begin_load());
        store.finish_load(
            vec![raw(1, "A", "a@x.io"), raw(1, "A again", "a2@x.io"), raw(2, "B", "b@x.io")],
            &mut CyclicTagPolicy,
        );
        assert_eq!(store.leads().len(), 2);
        assert_eq!(store.warnings.len(), 1);
        assert_eq!(store.status_message, "Loaded 2 leads (1 skipped).");
    }

    #[test]
    fn test_view_flags() {
        let mut store = LeadStore::new();
        store.set_show_search(true);
        store.set_show_filter_dropdown(true);
        store.set_active_tab(DashboardTab::Leaderboard);
        assert!(store.show_search);
        assert!(store.show_filter_dropdown);
        assert_eq!(store.active_tab, DashboardTab::Leaderboard);
    }
}
