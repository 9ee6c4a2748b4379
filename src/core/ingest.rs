// LeadDeck - core/ingest.rs
//
// Normalisation of loader records into Lead entities.
// Core layer: pure logic, no I/O.

use crate::core::model::{Lead, RawRecord};
use crate::core::tagging::TagPolicy;
use crate::util::constants;
use std::collections::HashSet;

/// Result of normalising one batch.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// Leads in load order, ids unique.
    pub leads: Vec<Lead>,

    /// Non-fatal problems (duplicate ids dropped).
    pub warnings: Vec<String>,
}

/// Map raw records to leads.
///
/// Emails are lower-cased, tags come from `policy`, every lead starts
/// unselected with the fixed display date. A repeated id keeps its first
/// occurrence; later ones are dropped with a warning.
pub fn normalise_records(records: Vec<RawRecord>, policy: &mut dyn TagPolicy) -> IngestOutcome {
    let mut seen = HashSet::with_capacity(records.len());
    let mut outcome = IngestOutcome {
        leads: Vec::with_capacity(records.len()),
        warnings: Vec::new(),
    };

    for (index, record) in records.into_iter().enumerate() {
        if !seen.insert(record.id) {
            tracing::warn!(id = record.id, index, "Duplicate lead id dropped");
            outcome
                .warnings
                .push(format!("Duplicate lead id {} at position {index} ignored", record.id));
            continue;
        }

        let tag = policy.draw(index, &record);
        outcome.leads.push(Lead {
            id: record.id,
            email: record.email.to_lowercase(),
            name: record.name,
            tag,
            connected: record.connected,
            date: constants::DEFAULT_LEAD_DATE.to_string(),
            weekday: constants::DEFAULT_LEAD_WEEKDAY.to_string(),
            selected: false,
        });
    }

    outcome
}
