//! Behavioural tests for [`OverpassFetcher`] retry and extraction.
//!
//! A [`ScriptedTransport`] stands in for the Overpass server and a
//! [`RecordingSleeper`] captures backoff waits.

use playscout_core::{Attraction, AttractionFetcher, FetchError, FetchFailure};
use playscout_data::overpass::test_support::{
    RecordingSleeper, ScriptedTransport, center_element, node_element, response_with,
};
use playscout_data::overpass::{OverpassElement, OverpassFetcher, OverpassResponse};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use std::time::Duration;

type Fetcher = OverpassFetcher<ScriptedTransport, RecordingSleeper>;
type FetcherCell = RefCell<Option<Fetcher>>;
type ResultCell = RefCell<Option<Result<Vec<Attraction>, FetchError>>>;

#[fixture]
fn fetcher() -> FetcherCell {
    RefCell::new(None)
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn install(cell: &FetcherCell, script: Vec<Result<OverpassResponse, FetchFailure>>) {
    let transport = ScriptedTransport::new(script);
    *cell.borrow_mut() = Some(OverpassFetcher::with_sleeper(
        transport,
        RecordingSleeper::default(),
    ));
}

fn url() -> String {
    ScriptedTransport::ENDPOINT.to_owned()
}

fn kids_zoo() -> OverpassElement {
    node_element(1, 52.5, 13.4, &[("name", "Kids Zoo"), ("tourism", "zoo")])
}

fn with_fetcher<R>(cell: &FetcherCell, check: impl FnOnce(&Fetcher) -> R) -> R {
    let guard = cell.borrow();
    let fetcher = guard.as_ref().expect("fetcher must be initialised");
    check(fetcher)
}

// --- Given steps ---

#[given("an Overpass server that always returns status 500")]
fn always_500(#[from(fetcher)] fetcher: &FetcherCell) {
    install(
        fetcher,
        vec![Err(FetchFailure::HttpStatus {
            url: url(),
            status: 500,
        })],
    );
}

#[given("an Overpass server that always times out")]
fn always_timeout(#[from(fetcher)] fetcher: &FetcherCell) {
    install(
        fetcher,
        vec![Err(FetchFailure::Timeout {
            url: url(),
            timeout_secs: 120,
        })],
    );
}

#[given("an Overpass server that refuses connections")]
fn refuses_connections(#[from(fetcher)] fetcher: &FetcherCell) {
    install(
        fetcher,
        vec![Err(FetchFailure::Network {
            url: url(),
            message: "connection refused".to_owned(),
        })],
    );
}

#[given("an Overpass server that fails once and then returns Kids Zoo")]
fn fails_then_recovers(#[from(fetcher)] fetcher: &FetcherCell) {
    install(
        fetcher,
        vec![
            Err(FetchFailure::HttpStatus {
                url: url(),
                status: 504,
            }),
            Ok(response_with(vec![kids_zoo()])),
        ],
    );
}

#[given("an Overpass server with no matching elements")]
fn no_elements(#[from(fetcher)] fetcher: &FetcherCell) {
    install(fetcher, vec![Ok(response_with(Vec::new()))]);
}

#[given("an Overpass server returning unnamed and unlocated elements beside Kids Zoo")]
fn incomplete_elements(#[from(fetcher)] fetcher: &FetcherCell) {
    let unlocated = OverpassElement {
        kind: "relation".to_owned(),
        id: 9,
        tags: [("name".to_owned(), "Somewhere".to_owned())].into(),
        ..OverpassElement::default()
    };
    install(
        fetcher,
        vec![Ok(response_with(vec![
            center_element(2, 52.4, 13.3, &[("leisure", "playground")]),
            unlocated,
            kids_zoo(),
        ]))],
    );
}

// --- When steps ---

#[when("attractions for berlin are fetched")]
fn fetch_berlin(#[from(fetcher)] fetcher: &FetcherCell, #[from(result)] result: &ResultCell) {
    let outcome = with_fetcher(fetcher, |fetcher| fetcher.fetch("berlin"));
    *result.borrow_mut() = Some(outcome);
}

// --- Then steps ---

#[then("the fetch gives up after 3 attempts")]
fn gives_up(#[from(fetcher)] fetcher: &FetcherCell, #[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(
            borrowed.as_ref(),
            Some(Err(FetchError::Exhausted { attempts: 3, .. }))
        ),
        "expected exhaustion after 3 attempts, got {borrowed:?}"
    );
    with_fetcher(fetcher, |fetcher| assert_eq!(fetcher.transport().calls(), 3));
}

fn assert_waits(fetcher: &FetcherCell, secs: [u64; 2]) {
    with_fetcher(fetcher, |fetcher| {
        assert_eq!(
            fetcher.sleeper().recorded(),
            secs.map(Duration::from_secs).to_vec()
        );
    });
}

#[then("the waits were 10 and 20 seconds")]
fn linear_status_waits(#[from(fetcher)] fetcher: &FetcherCell) {
    assert_waits(fetcher, [10, 20]);
}

#[then("the waits were 15 and 30 seconds")]
fn linear_timeout_waits(#[from(fetcher)] fetcher: &FetcherCell) {
    assert_waits(fetcher, [15, 30]);
}

#[then("the waits were 10 and 10 seconds")]
fn flat_waits(#[from(fetcher)] fetcher: &FetcherCell) {
    assert_waits(fetcher, [10, 10]);
}

#[then("Kids Zoo is returned for Berlin")]
fn kids_zoo_returned(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let attractions = borrowed
        .as_ref()
        .expect("fetch must have run")
        .as_ref()
        .expect("expected Ok result");
    assert_eq!(attractions.len(), 1, "got {attractions:?}");
    let zoo = &attractions[0];
    assert_eq!(zoo.name, "Kids Zoo");
    assert_eq!(zoo.city, "Berlin");
    assert_eq!(zoo.kind, "Zoo");
}

#[then("no attractions are returned")]
fn nothing_returned(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    let attractions = borrowed
        .as_ref()
        .expect("fetch must have run")
        .as_ref()
        .expect("empty result is still a success");
    assert!(attractions.is_empty());
}

#[then("the server was queried 2 times")]
fn queried_twice(#[from(fetcher)] fetcher: &FetcherCell) {
    with_fetcher(fetcher, |fetcher| assert_eq!(fetcher.transport().calls(), 2));
}

#[then("the server was queried 1 times")]
fn queried_once(#[from(fetcher)] fetcher: &FetcherCell) {
    with_fetcher(fetcher, |fetcher| {
        assert_eq!(fetcher.transport().calls(), 1);
        assert!(fetcher.sleeper().recorded().is_empty());
    });
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/overpass_fetch.feature", name = $title)]
        fn $fn_name(fetcher: FetcherCell, result: ResultCell) {
            let _ = (fetcher, result);
        }
    };
}

register_scenario!(
    giving_up_on_server_errors,
    "giving up on a server that always fails"
);
register_scenario!(backing_off_after_timeouts, "backing off longer after timeouts");
register_scenario!(
    flat_wait_after_connection_failures,
    "waiting a flat interval after connection failures"
);
register_scenario!(
    recovering_after_transient_failure,
    "recovering after a transient failure"
);
register_scenario!(
    accepting_empty_result,
    "accepting an empty result without retrying"
);
register_scenario!(dropping_incomplete_elements, "dropping incomplete elements");
