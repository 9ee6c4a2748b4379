// LeadDeck - app/loader.rs
//
// Lead fetch lifecycle. Runs the lead source on a background thread and
// sends the outcome to the UI thread over an mpsc channel.
//
// Architecture:
//   - `LoadManager` lives on the UI thread; the fetch runs on a worker thread.
//   - One load at a time: the store's loading flag gates `start_load`.
//   - All cross-thread communication is via `LoadProgress` messages.
//   - Records without an identifier are rejected here, before they reach
//     the store.

use crate::core::model::RawRecord;
use crate::util::constants;
use crate::util::error::LoadError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::io::Read;
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Lead sources
// =============================================================================

/// Something that can produce a batch of raw records.
pub trait LeadSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<RawRecord>, LoadError>;

    /// Short description for logs and the status bar.
    fn describe(&self) -> String;
}

/// Fetches user records over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLeadSource {
    pub url: String,
    pub timeout: Duration,
    /// Seed for connection flags the source does not provide.
    pub connection_seed: u64,
}

impl HttpLeadSource {
    pub fn new(url: impl Into<String>, timeout: Duration, connection_seed: u64) -> Self {
        Self {
            url: url.into(),
            timeout,
            connection_seed,
        }
    }
}

impl Default for HttpLeadSource {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_SOURCE_URL,
            Duration::from_secs(constants::DEFAULT_SOURCE_TIMEOUT_SECS),
            constants::DEFAULT_DRAW_SEED,
        )
    }
}

impl LeadSource for HttpLeadSource {
    fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
        tracing::info!(url = %self.url, "Fetching leads");

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent.get(&self.url).call().map_err(|e| LoadError::Http {
            url: self.url.clone(),
            source: Box::new(e),
        })?;

        let max = constants::MAX_RESPONSE_BYTES;
        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(max as u64 + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::Body {
                url: self.url.clone(),
                source: e,
            })?;
        if bytes.len() > max {
            return Err(LoadError::ResponseTooLarge {
                url: self.url.clone(),
                max_bytes: max,
            });
        }

        parse_source_bytes(&bytes, self.connection_seed)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Wire shape of one upstream user. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SourceUser {
    id: Option<u64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    connected: Option<bool>,
}

/// Decode a JSON array of user objects into raw records.
///
/// Entries without `id` are dropped. A missing `connected` flag is drawn
/// with probability 0.5 from a generator seeded with `connection_seed`.
pub fn parse_source_json(json: &str, connection_seed: u64) -> Result<Vec<RawRecord>, LoadError> {
    parse_source_bytes(json.as_bytes(), connection_seed)
}

/// Byte-level variant of [`parse_source_json`] used on raw response bodies.
/// Invalid UTF-8 is a parse error, never silently replaced.
pub fn parse_source_bytes(
    body: &[u8],
    connection_seed: u64,
) -> Result<Vec<RawRecord>, LoadError> {
    let users: Vec<SourceUser> =
        serde_json::from_slice(body).map_err(|e| LoadError::Parse { source: e })?;

    let mut rng = StdRng::seed_from_u64(connection_seed);
    let total = users.len();
    let records: Vec<RawRecord> = users
        .into_iter()
        .filter_map(|user| {
            let id = user.id?;
            let connected = user.connected.unwrap_or_else(|| rng.random_bool(0.5));
            Some(RawRecord {
                id,
                name: user.name,
                email: user.email,
                connected,
            })
        })
        .collect();

    let rejected = total - records.len();
    if rejected > 0 {
        tracing::warn!(rejected, "Source records without an id were rejected");
    }
    tracing::debug!(accepted = records.len(), "Source payload decoded");
    Ok(records)
}

// =============================================================================
// LoadManager
// =============================================================================

/// Messages from the worker thread.
#[derive(Debug)]
pub enum LoadProgress {
    Started { source: String },
    Completed { records: Vec<RawRecord> },
    Failed { error: LoadError },
}

/// Runs one lead fetch at a time on a background thread.
#[derive(Default)]
pub struct LoadManager {
    progress_rx: Option<mpsc::Receiver<LoadProgress>>,
}

impl LoadManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a worker has not yet reported a final result.
    pub fn is_running(&self) -> bool {
        self.progress_rx.is_some()
    }

    /// Spawn a worker that fetches from `source`.
    ///
    /// The caller gates this with `LeadStore::begin_load`; overlapping loads
    /// are not supported.
    pub fn start_load(&mut self, source: Arc<dyn LeadSource>) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        std::thread::spawn(move || {
            // Send errors mean the UI went away; nothing left to do.
            if tx
                .send(LoadProgress::Started {
                    source: source.describe(),
                })
                .is_err()
            {
                return;
            }
            let msg = match source.fetch() {
                Ok(records) => LoadProgress::Completed { records },
                Err(error) => LoadProgress::Failed { error },
            };
            let _ = tx.send(msg);
        });

        tracing::info!("Lead load started");
    }

    /// Poll for progress messages without blocking. Returns all pending
    /// messages. A worker that vanishes without a result is reported as
    /// `Failed`.
    pub fn poll_progress(&mut self) -> Vec<LoadProgress> {
        let mut messages = Vec::new();
        let Some(rx) = self.progress_rx.as_ref() else {
            return messages;
        };

        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(msg) => {
                    finished |= matches!(
                        msg,
                        LoadProgress::Completed { .. } | LoadProgress::Failed { .. }
                    );
                    messages.push(msg);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !finished {
                        messages.push(LoadProgress::Failed {
                            error: LoadError::WorkerDisconnected,
                        });
                    }
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.progress_rx = None;
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct StaticSource(Vec<RawRecord>);

    impl LeadSource for StaticSource {
        fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
            Ok(self.0.clone())
        }
        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    struct BrokenSource;

    impl LeadSource for BrokenSource {
        fn fetch(&self) -> Result<Vec<RawRecord>, LoadError> {
            Err(LoadError::WorkerDisconnected)
        }
        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn drain(manager: &mut LoadManager) -> Vec<LoadProgress> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut all = Vec::new();
        while manager.is_running() && Instant::now() < deadline {
            all.extend(manager.poll_progress());
            std::thread::sleep(Duration::from_millis(5));
        }
        all
    }

    #[test]
    fn test_parse_rejects_records_without_id() {
        let json = r#"[
            {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "connected": true},
            {"name": "No Id", "email": "none@x.io"},
            {"id": 3, "name": "Clementine Bauch", "email": "Nathan@yesenia.net", "connected": false,
             "address": {"city": "McKenziehaven"}}
        ]"#;
        let records = parse_source_json(json, 1).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(records[0].connected);
        assert!(!records[1].connected);
        // Email case is left to ingestion.
        assert_eq!(records[0].email, "Sincere@april.biz");
    }

    #[test]
    fn test_parse_connection_draw_is_seeded() {
        let json = r#"[{"id":1,"name":"a","email":"a"},{"id":2,"name":"b","email":"b"},
                       {"id":3,"name":"c","email":"c"},{"id":4,"name":"d","email":"d"}]"#;
        let a = parse_source_json(json, 99).unwrap();
        let b = parse_source_json(json, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_invalid_utf8_body() {
        let mut body = br#"[{"id": 1, "name": "Ervin "#.to_vec();
        body.push(0xff);
        body.extend_from_slice(br#"", "email": "e@x.io", "connected": true}]"#);
        let result = parse_source_bytes(&body, 0);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_parse_bytes_matches_str_variant() {
        let json = r#"[{"id": 2, "name": "Zoë", "email": "Zoe@x.io", "connected": false}]"#;
        let from_bytes = parse_source_bytes(json.as_bytes(), 3).unwrap();
        assert_eq!(from_bytes, parse_source_json(json, 3).unwrap());
        assert_eq!(from_bytes[0].name, "Zoë");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_source_json("{not json", 0);
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_manager_delivers_records() {
        let records = vec![RawRecord {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: "sincere@april.biz".to_string(),
            connected: true,
        }];
        let mut manager = LoadManager::new();
        manager.start_load(Arc::new(StaticSource(records.clone())));
        let messages = drain(&mut manager);

        assert!(!manager.is_running());
        assert!(matches!(messages.first(), Some(LoadProgress::Started { .. })));
        match messages.last() {
            Some(LoadProgress::Completed { records: got }) => assert_eq!(got, &records),
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_manager_reports_failure() {
        let mut manager = LoadManager::new();
        manager.start_load(Arc::new(BrokenSource));
        let messages = drain(&mut manager);
        assert!(matches!(messages.last(), Some(LoadProgress::Failed { .. })));
    }

    #[test]
    fn test_poll_without_load_is_empty() {
        let mut manager = LoadManager::new();
        assert!(manager.poll_progress().is_empty());
        assert!(!manager.is_running());
    }
}
