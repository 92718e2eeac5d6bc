//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::ScenarioService;
use crate::application::DeclarationPrinter;
use crate::config::Settings;
use crate::infrastructure::traits::{ConsoleLog, LogSink};

/// Container holding settings and the injected log sink.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Log capability handed to every consumer
    pub log: Arc<dyn LogSink>,
}

impl ServiceContainer {
    /// Create a new service container logging to the console.
    pub fn new(settings: Settings) -> Self {
        let log = Arc::new(ConsoleLog::new(settings.log_prefix.clone()));
        Self::with_deps(settings, log)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, log: Arc<dyn LogSink>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, log }
    }

    pub fn scenario_service(&self) -> ScenarioService {
        ScenarioService::new(Arc::clone(&self.log))
    }

    pub fn declaration_printer(&self) -> DeclarationPrinter {
        DeclarationPrinter::new(self.settings.module_name.clone())
    }
}
