//! Test doubles for the Overpass client.
//!
//! [`ScriptedTransport`] replays canned outcomes without touching the
//! network and [`RecordingSleeper`] captures backoff waits instead of
//! blocking.
//!
//! # Example
//!
//! ```
//! use playscout_core::{AttractionFetcher, FetchFailure};
//! use playscout_data::overpass::OverpassFetcher;
//! use playscout_data::overpass::test_support::{
//!     RecordingSleeper, ScriptedTransport, node_element, response_with,
//! };
//!
//! let transport = ScriptedTransport::new([
//!     Err(FetchFailure::Timeout { url: "stub".to_owned(), timeout_secs: 120 }),
//!     Ok(response_with(vec![node_element(1, 52.5, 13.4, &[("name", "Zoo")])])),
//! ]);
//! let fetcher = OverpassFetcher::with_sleeper(transport, RecordingSleeper::default());
//!
//! let found = fetcher.fetch("berlin").expect("second attempt succeeds");
//! assert_eq!(found.len(), 1);
//! assert_eq!(fetcher.sleeper().recorded().len(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use playscout_core::{FetchFailure, Tags};

use super::{Center, OverpassElement, OverpassQuery, OverpassResponse, OverpassTransport, Sleeper};

/// Transport that replays a script of outcomes.
///
/// Outcomes are returned in order; once one remains it is repeated for
/// every further call.
#[derive(Debug)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<OverpassResponse, FetchFailure>>>,
    calls: Cell<usize>,
    last_query: RefCell<Option<OverpassQuery>>,
}

impl ScriptedTransport {
    /// Endpoint reported by the scripted transport.
    pub const ENDPOINT: &'static str = "http://overpass.invalid/api/interpreter";

    /// Transport replaying `script`. An empty script answers with an empty
    /// response.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = Result<OverpassResponse, FetchFailure>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            calls: Cell::new(0),
            last_query: RefCell::new(None),
        }
    }

    /// Number of `execute` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Most recent query executed.
    #[must_use]
    pub fn last_query(&self) -> Option<OverpassQuery> {
        self.last_query.borrow().clone()
    }
}

impl OverpassTransport for ScriptedTransport {
    fn endpoint(&self) -> &str {
        Self::ENDPOINT
    }

    fn execute(&self, query: &OverpassQuery) -> Result<OverpassResponse, FetchFailure> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some(query.clone());
        let mut script = self.script.borrow_mut();
        if script.len() > 1 {
            return script
                .pop_front()
                .unwrap_or_else(|| Ok(OverpassResponse::default()));
        }
        script
            .front()
            .cloned()
            .unwrap_or_else(|| Ok(OverpassResponse::default()))
    }
}

/// Sleeper that records requested waits and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    waits: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Waits requested so far, in order.
    #[must_use]
    pub fn recorded(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}

fn tags_from(pairs: &[(&str, &str)]) -> Tags {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

/// Node element with its own coordinates.
#[must_use]
pub fn node_element(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> OverpassElement {
    OverpassElement {
        kind: "node".to_owned(),
        id,
        lat: Some(lat),
        lon: Some(lon),
        center: None,
        tags: tags_from(tags),
    }
}

/// Way element located only by its centre.
#[must_use]
pub fn center_element(id: u64, lat: f64, lon: f64, tags: &[(&str, &str)]) -> OverpassElement {
    OverpassElement {
        kind: "way".to_owned(),
        id,
        lat: None,
        lon: None,
        center: Some(Center { lat, lon }),
        tags: tags_from(tags),
    }
}

/// Response wrapping `elements`.
#[must_use]
pub const fn response_with(elements: Vec<OverpassElement>) -> OverpassResponse {
    OverpassResponse { elements }
}
