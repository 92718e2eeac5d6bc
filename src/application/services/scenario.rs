//! Demo scenario service
//!
//! Greets through the injected log sink, then runs the combine/advance chain on
//! a plain node and a named node and checks the result against the sum law.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{ChainValue, NamedNode, Node};
use crate::infrastructure::traits::LogSink;

/// Inputs of one scenario run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInput {
    /// Name used in the greeting line
    pub greeting_name: String,
    /// Value of the plain node
    pub lhs: f64,
    /// Value of the named node
    pub rhs: f64,
    /// Label of the named node
    pub rhs_label: String,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            greeting_name: "Rust".to_string(),
            lhs: 46.0,
            rhs: -5.0,
            rhs_label: "b".to_string(),
        }
    }
}

/// Nodes produced by a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub combined: Node,
    pub result: Node,
}

/// Service exercising the chain model on behalf of a script host.
pub struct ScenarioService {
    log: Arc<dyn LogSink>,
}

impl ScenarioService {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self { log }
    }

    /// Log `Hello {name}!`.
    pub fn greet(&self, name: &str) {
        self.log.log(&format!("Hello {}!", name));
    }

    /// Run the full scenario.
    ///
    /// # Errors
    /// `ApplicationError::AssertionFailed` when `lhs + rhs + 1` does not equal the
    /// advanced result (always the case for NaN inputs).
    #[instrument(level = "debug", skip(self))]
    pub fn run(&self, input: &ScenarioInput) -> ApplicationResult<ScenarioOutcome> {
        self.greet(&input.greeting_name);

        let a = Node::create(input.lhs);
        let b = NamedNode::create(input.rhs).with_label(&input.rhs_label);
        self.log.log(&format!("a = {}", a.describe()));
        self.log.log(&format!("b = {}", b.describe()));

        let combined = a.combine(&b);
        self.log.log(&format!("a.combine(b) = {}", combined.describe()));

        let result = combined.advance();
        self.log.log(&format!("a.combine(b).advance() = {}", result.describe()));

        let expected = input.lhs + input.rhs + 1.0;
        debug!(expected, actual = result.value(), "checking chain law");
        if result.value() != expected {
            return Err(ApplicationError::AssertionFailed {
                expected,
                actual: result.value(),
            });
        }

        Ok(ScenarioOutcome { combined, result })
    }
}
