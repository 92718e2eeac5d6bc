//! Tests for ScenarioService

use std::sync::{Arc, Mutex};

use nodechain::application::services::{ScenarioInput, ScenarioService};
use nodechain::application::ApplicationError;
use nodechain::domain::{ChainValue, Node};
use nodechain::util::testing::{init_test_setup, RecordingLog};

fn service_with_recorder() -> (ScenarioService, Arc<RecordingLog>) {
    init_test_setup();
    let log = Arc::new(RecordingLog::new());
    (ScenarioService::new(log.clone()), log)
}

#[test]
fn given_default_input_when_running_then_result_is_42() {
    // Arrange
    let (service, _log) = service_with_recorder();

    // Act
    let outcome = service.run(&ScenarioInput::default()).unwrap();

    // Assert
    assert_eq!(outcome.combined, Node::create(41.0));
    assert_eq!(outcome.result.value(), 42.0);
}

#[test]
fn given_default_input_when_running_then_logs_greeting_and_each_step() {
    let (service, log) = service_with_recorder();

    service.run(&ScenarioInput::default()).unwrap();

    assert_eq!(
        log.messages(),
        vec![
            "Hello Rust!",
            "a = Node(46)",
            "b = NamedNode(\"b\", -5)",
            "a.combine(b) = Node(41)",
            "a.combine(b).advance() = Node(42)",
        ]
    );
}

#[test]
fn given_name_when_greeting_then_logs_hello_line() {
    let (service, log) = service_with_recorder();

    service.greet("C++");

    assert_eq!(log.messages(), vec!["Hello C++!"]);
}

#[test]
fn given_custom_input_when_running_then_law_holds() {
    let (service, _log) = service_with_recorder();
    let input = ScenarioInput {
        greeting_name: "tester".into(),
        lhs: 0.5,
        rhs: 0.25,
        rhs_label: String::new(),
    };

    let outcome = service.run(&input).unwrap();

    assert_eq!(outcome.result.value(), 1.75);
}

#[test]
fn given_nan_input_when_running_then_assertion_fails() {
    let (service, log) = service_with_recorder();
    let input = ScenarioInput {
        lhs: f64::NAN,
        ..ScenarioInput::default()
    };

    let err = service.run(&input).unwrap_err();

    assert!(matches!(err, ApplicationError::AssertionFailed { .. }));
    // Steps are still logged before the check
    assert_eq!(log.messages().len(), 5);
}

#[test]
fn given_closure_sink_when_running_then_closure_receives_lines() {
    let lines = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = {
        let lines = Arc::clone(&lines);
        move |m: &str| lines.lock().unwrap().push(m.to_uppercase())
    };
    let service = ScenarioService::new(Arc::new(sink));

    service.greet("world");

    assert_eq!(*lines.lock().unwrap(), vec!["HELLO WORLD!"]);
}
