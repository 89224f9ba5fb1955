//! Delegation is exclusive: every request reaches exactly one of the two
//! handlers, and requests arrive at the delegate unmodified.

use std::collections::HashMap;
use understudy::{
    Request, Route, RouteTable, StandInOptions, box_handler, install,
    testing::{RecordingHandler, static_handler},
};

#[derive(Clone, Debug, PartialEq)]
struct TestRequest {
    query: HashMap<String, String>,
}

impl Request for TestRequest {}

fn request(pairs: &[(&str, &str)]) -> TestRequest {
    TestRequest {
        query: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[tokio::test]
async fn each_request_reaches_exactly_one_delegate() {
    let stand_in = RecordingHandler::new("stand-in".to_string());
    let fallback = RecordingHandler::new("fallback".to_string());
    let stand_in_probe = stand_in.clone();
    let fallback_probe = fallback.clone();

    let mut table = RouteTable::new();
    table
        .add(Route::new("/watched", box_handler(fallback)).stand_in(
            StandInOptions::new()
                .should_apply(|request: &TestRequest| request.query.contains_key("demo"))
                .handler(stand_in),
        ))
        .unwrap();
    install(&mut table).unwrap();

    table.dispatch("/watched", request(&[])).await.unwrap();
    table
        .dispatch("/watched", request(&[("demo", "true")]))
        .await
        .unwrap();
    table.dispatch("/watched", request(&[])).await.unwrap();

    assert_eq!(stand_in_probe.count(), 1);
    assert_eq!(fallback_probe.count(), 2);
}

#[tokio::test]
async fn delegates_see_the_request_unmodified() {
    let stand_in = RecordingHandler::new("stand-in".to_string());
    let probe = stand_in.clone();

    let mut table = RouteTable::new();
    table
        .add(
            Route::new("/watched", box_handler(static_handler("fallback".to_string()))).stand_in(
                StandInOptions::new()
                    .should_apply(|request: &TestRequest| request.query.contains_key("demo"))
                    .handler(stand_in),
            ),
        )
        .unwrap();
    install(&mut table).unwrap();

    let sent = request(&[("demo", "true"), ("page", "3")]);
    table.dispatch("/watched", sent.clone()).await.unwrap();

    assert_eq!(probe.requests(), vec![sent]);
}
