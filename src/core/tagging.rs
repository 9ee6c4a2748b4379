// LeadDeck - core/tagging.rs
//
// Tag draw policies applied during ingestion. The policy is injected by the
// caller so tests can assert exact tag distributions.

use crate::core::model::RawRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Candidate pool: two of five slots carry no tag.
pub const TAG_POOL: [Option<&str>; 5] = [
    Some("GITEX DUBAI"),
    Some("Team"),
    Some("Summit"),
    None,
    None,
];

/// Chooses the tag for one incoming record.
pub trait TagPolicy {
    /// `index` is the record's position in the incoming batch.
    fn draw(&mut self, index: usize, record: &RawRecord) -> Option<String>;
}

/// Walks the pool in order: record `i` gets `TAG_POOL[i % 5]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclicTagPolicy;

impl TagPolicy for CyclicTagPolicy {
    fn draw(&mut self, index: usize, _record: &RawRecord) -> Option<String> {
        TAG_POOL[index % TAG_POOL.len()].map(str::to_string)
    }
}

/// Uniform draw from the pool using a seeded generator.
#[derive(Debug, Clone)]
pub struct SeededTagPolicy {
    rng: StdRng,
}

impl SeededTagPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TagPolicy for SeededTagPolicy {
    fn draw(&mut self, _index: usize, _record: &RawRecord) -> Option<String> {
        let slot = self.rng.random_range(0..TAG_POOL.len());
        TAG_POOL[slot].map(str::to_string)
    }
}

/// Explicit id -> tag mapping. Unmapped ids get no tag.
#[derive(Debug, Clone, Default)]
pub struct FixedTagPolicy {
    tags: HashMap<u64, String>,
}

impl FixedTagPolicy {
    pub fn new<I, S>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        Self {
            tags: mapping.into_iter().map(|(id, t)| (id, t.into())).collect(),
        }
    }
}

impl TagPolicy for FixedTagPolicy {
    fn draw(&mut self, _index: usize, record: &RawRecord) -> Option<String> {
        self.tags.get(&record.id).cloned()
    }
}

/// Policy used for a load: seeded when a seed is configured, cyclic otherwise.
pub fn policy_for_seed(seed: Option<u64>) -> Box<dyn TagPolicy> {
    match seed {
        Some(seed) => Box::new(SeededTagPolicy::new(seed)),
        None => Box::new(CyclicTagPolicy),
    }
}
