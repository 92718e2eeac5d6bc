//! CLI parsing and dispatch against a container with a recording log sink.

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use rstest::rstest;

use nodechain::cli::{execute_with, Cli, CliError, Commands};
use nodechain::config::Settings;
use nodechain::exitcode;
use nodechain::infrastructure::ServiceContainer;
use nodechain::util::testing::{init_test_setup, RecordingLog};

fn container() -> (ServiceContainer, Arc<RecordingLog>) {
    init_test_setup();
    let log = Arc::new(RecordingLog::new());
    (
        ServiceContainer::with_deps(Settings::default(), log.clone()),
        log,
    )
}

#[test]
fn given_cli_definition_when_asserted_then_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_negative_rhs_when_parsing_run_then_value_is_kept() {
    let cli = Cli::try_parse_from(["nodechain", "run", "--lhs", "1", "--rhs", "-5"]).unwrap();

    match cli.command {
        Some(Commands::Run { lhs, rhs, .. }) => {
            assert_eq!(lhs, Some(1.0));
            assert_eq!(rhs, Some(-5.0));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[rstest]
#[case(&["nodechain", "-d", "declarations"], 1)]
#[case(&["nodechain", "-ddd", "declarations"], 3)]
#[case(&["nodechain", "declarations"], 0)]
fn given_debug_flags_when_parsing_then_counts_verbosity(#[case] args: &[&str], #[case] level: u8) {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    assert_eq!(cli.debug, level);
}

#[test]
fn given_run_command_when_executing_then_logs_through_injected_sink() {
    let (container, log) = container();
    let cli = Cli::try_parse_from(["nodechain", "run", "--name", "C++"]).unwrap();

    execute_with(&cli, &container).unwrap();

    let messages = log.messages();
    assert_eq!(messages.first().map(String::as_str), Some("Hello C++!"));
    assert_eq!(
        messages.last().map(String::as_str),
        Some("a.combine(b).advance() = Node(42)")
    );
}

#[test]
fn given_log_command_when_executing_then_message_reaches_sink() {
    let (container, log) = container();
    let cli = Cli::try_parse_from(["nodechain", "log", "hello world!"]).unwrap();

    execute_with(&cli, &container).unwrap();

    assert_eq!(log.messages(), vec!["hello world!"]);
}

#[test]
fn given_blank_log_message_when_executing_then_forwarded_unchanged() {
    let (container, log) = container();
    let cli = Cli::try_parse_from(["nodechain", "log", "  "]).unwrap();

    execute_with(&cli, &container).unwrap();

    assert_eq!(log.messages(), vec!["  "]);
}

#[test]
fn given_tracing_flag_when_running_then_succeeds_without_console_sink() {
    let (container, log) = container();
    let cli = Cli::try_parse_from(["nodechain", "run", "--tracing"]).unwrap();

    execute_with(&cli, &container).unwrap();

    assert!(log.messages().is_empty());
}

#[test]
fn given_nan_lhs_when_running_then_data_error_exit_code() {
    let (container, _log) = container();
    let cli = Cli::try_parse_from(["nodechain", "run", "--lhs", "NaN"]).unwrap();

    let err = execute_with(&cli, &container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_blank_module_when_declaring_then_config_exit_code() {
    let (container, _log) = container();
    let cli = Cli::try_parse_from(["nodechain", "declarations", "--module", ""]).unwrap();

    let err = execute_with(&cli, &container).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_no_command_when_executing_then_usage_error() {
    let (container, _log) = container();
    let cli = Cli::try_parse_from(["nodechain"]).unwrap();

    let err = execute_with(&cli, &container).unwrap_err();

    assert!(matches!(err, CliError::Usage(_)));
}
