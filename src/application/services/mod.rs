//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (LogSink) but are themselves
//! concrete structs, not traits.

mod scenario;

pub use scenario::{ScenarioInput, ScenarioOutcome, ScenarioService};
