//! Command dispatch

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::ScenarioService;
use crate::application::DeclarationPrinter;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::{ServiceContainer, TracingLog};

/// Load settings, wire the container and run the selected command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);
    execute_with(cli, &container)
}

/// Run the selected command against an already wired container.
pub fn execute_with(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Declarations { module }) => cmd_declarations(container, module.as_deref()),
        Some(Commands::Run {
            lhs,
            rhs,
            name,
            label,
            tracing,
        }) => cmd_run(
            container,
            RunOverrides {
                lhs: *lhs,
                rhs: *rhs,
                name: name.clone(),
                label: label.clone(),
                tracing: *tracing,
            },
        ),
        Some(Commands::Log { message }) => cmd_log(container, message),
        Some(Commands::Config { command }) => cmd_config(container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `nodechain --help`".to_string(),
        )),
    }
}

#[derive(Debug)]
struct RunOverrides {
    lhs: Option<f64>,
    rhs: Option<f64>,
    name: Option<String>,
    label: Option<String>,
    tracing: bool,
}

#[instrument(level = "debug", skip(container))]
fn cmd_declarations(container: &ServiceContainer, module: Option<&str>) -> CliResult<()> {
    let printer = match module {
        Some(name) => DeclarationPrinter::new(name),
        None => container.declaration_printer(),
    };
    output::info(&printer.render()?);
    Ok(())
}

#[instrument(level = "debug", skip(container))]
fn cmd_run(container: &ServiceContainer, overrides: RunOverrides) -> CliResult<()> {
    let mut input = container.settings.scenario_input();
    if let Some(lhs) = overrides.lhs {
        input.lhs = lhs;
    }
    if let Some(rhs) = overrides.rhs {
        input.rhs = rhs;
    }
    if let Some(name) = overrides.name {
        input.greeting_name = name;
    }
    if let Some(label) = overrides.label {
        input.rhs_label = label;
    }
    debug!("scenario input: {:?}", input);

    let service = if overrides.tracing {
        ScenarioService::new(Arc::new(TracingLog))
    } else {
        container.scenario_service()
    };
    let outcome = service.run(&input)?;
    output::success(&format!(
        "{} + {} + 1 = {}",
        input.lhs, input.rhs, outcome.result
    ));
    Ok(())
}

fn cmd_log(container: &ServiceContainer, message: &str) -> CliResult<()> {
    container.log.log(message);
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}
