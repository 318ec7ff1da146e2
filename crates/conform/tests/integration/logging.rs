//! Diagnostic events emitted while checking.

use conform::prelude::*;
use serde_json::json;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(Level, String)>>>);

impl Recorder {
    fn messages_at(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = Message(String::new());
        event.record(&mut message);
        self.0.lock().unwrap().push((*event.metadata().level(), message.0));
    }
}

fn recorded<R>(f: impl FnOnce() -> R) -> (R, Recorder) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, recorder)
}

#[test]
fn nested_rejection_is_logged_once() {
    let v = props! {
        "subconfig" => props! {
            "logger" => props! { "filename" => required(string()) },
        },
    };
    let value = Value::from(json!({"subconfig": {"logger": {}}}));

    let (result, recorder) = recorded(|| v.validate(Some(&value), "options"));

    assert!(result.is_err());
    assert_eq!(recorder.messages_at(Level::DEBUG), ["value rejected"]);
}

#[test]
fn accepted_alternative_logs_no_rejection() {
    let v = props! { "size" => number() }.or(string());
    let value = Value::from("fallback");

    let (result, recorder) = recorded(|| v.validate(Some(&value), "options"));

    assert!(result.is_ok());
    assert!(recorder.messages_at(Level::DEBUG).is_empty());
    assert!(recorder.messages_at(Level::TRACE).is_empty());
}

#[test]
fn exhausted_alternatives_are_traced() {
    let v = string().or(number());

    let (outcome, recorder) = recorded(|| v.probe(Some(&Value::Null), "x"));

    assert!(outcome.is_fail());
    assert_eq!(recorder.messages_at(Level::TRACE), ["all alternatives failed"]);
    assert_eq!(recorder.messages_at(Level::DEBUG), ["value rejected"]);
}
