//! I/O boundary traits for testability
//!
//! The log capability is handed to consumers of the chain model; nothing in the
//! domain layer writes output itself.

use std::io::Write;

/// Side-effecting diagnostic output, supplied by the caller.
pub trait LogSink: Send + Sync {
    /// Emit one message.
    fn log(&self, message: &str);
}

/// Any `Fn(&str)` is a log sink, so a plain function value can be injected.
impl<F> LogSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Writes `"{prefix}{message}"` lines to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleLog {
    prefix: String,
}

impl ConsoleLog {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Line as written to stdout.
    pub fn format(&self, message: &str) -> String {
        format!("{}{}", self.prefix, message)
    }
}

impl Default for ConsoleLog {
    fn default() -> Self {
        Self::new("logged: ")
    }
}

impl LogSink for ConsoleLog {
    fn log(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        // log() has no error channel; report write failures through tracing.
        if let Err(e) = writeln!(stdout, "{}", self.format(message)) {
            tracing::warn!("console log write failed: {}", e);
        }
    }
}

/// Forwards messages to the `tracing` subscriber at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn log(&self, message: &str) {
        tracing::info!(target: "nodechain::log", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Records (target, level) of every event it sees.
    struct EventRecorder(Arc<Mutex<Vec<(String, Level)>>>);

    impl<S: Subscriber> Layer<S> for EventRecorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            self.0
                .lock()
                .unwrap()
                .push((meta.target().to_string(), *meta.level()));
        }
    }

    #[test]
    fn given_default_console_log_when_formatting_then_uses_logged_prefix() {
        let log = ConsoleLog::default();
        assert_eq!(log.format("hello"), "logged: hello");
    }

    #[test]
    fn given_closure_when_used_as_sink_then_receives_messages() {
        let seen = Mutex::new(Vec::new());
        let sink = |m: &str| seen.lock().unwrap().push(m.to_string());
        sink.log("a");
        LogSink::log(&sink, "b");
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn given_tracing_log_when_logging_then_info_event_under_log_target() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(EventRecorder(events.clone()));

        tracing::subscriber::with_default(subscriber, || TracingLog.log("hello"));

        let events = events.lock().unwrap();
        assert!(
            events.contains(&("nodechain::log".to_string(), Level::INFO)),
            "events: {:?}",
            *events
        );
    }
}
