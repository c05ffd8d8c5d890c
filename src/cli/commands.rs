//! Command dispatch

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::TreeService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::TreeSource;
use crate::exitcode;

/// Run the parsed command line and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    debug!(?settings, "effective settings");

    match &cli.command {
        Some(Commands::Walk { tree }) => cmd_walk(settings, &parse_source(tree)?),
        Some(Commands::Same {
            left,
            right,
            explain,
        }) => cmd_same(settings, &parse_source(left)?, &parse_source(right)?, *explain),
        Some(Commands::Show { tree }) => cmd_show(settings, &parse_source(tree)?),
        Some(Commands::Demo) => cmd_demo(settings),
        Some(Commands::Config { command }) => cmd_config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
        None => Err(CliError::Usage(
            "no command given, try `treesame --help`".to_string(),
        )),
    }
}

/// Parse a tree argument; bad input is a data error, not a usage error.
fn parse_source(text: &str) -> CliResult<TreeSource> {
    Ok(text.parse::<TreeSource>().map_err(ApplicationError::from)?)
}

#[instrument(skip(settings))]
fn cmd_walk(settings: Settings, tree: &TreeSource) -> CliResult<i32> {
    let mut service = TreeService::new(settings);
    let tree = service.build(tree);
    output::info(&service.render_walk(&tree));
    Ok(exitcode::OK)
}

#[instrument(skip(settings))]
fn cmd_same(
    settings: Settings,
    left: &TreeSource,
    right: &TreeSource,
    explain: bool,
) -> CliResult<i32> {
    let mut service = TreeService::new(settings);
    let comparison = service.compare_sources(left, right);
    let equivalent = comparison.verdict.is_equivalent();

    if explain {
        if equivalent {
            output::success(&comparison.verdict);
        } else {
            output::failure(&comparison.verdict);
        }
        output::detail(&format!("left walker:  {:?}", comparison.left));
        output::detail(&format!("right walker: {:?}", comparison.right));
    } else {
        output::info(&equivalent);
    }

    Ok(if equivalent {
        exitcode::OK
    } else {
        exitcode::DIFFERENT
    })
}

#[instrument(skip(settings))]
fn cmd_show(settings: Settings, tree: &TreeSource) -> CliResult<i32> {
    let mut service = TreeService::new(settings);
    let tree = service.build(tree);
    let drawing = tree.to_display_tree().map_err(ApplicationError::from)?;
    output::info(&drawing);
    Ok(exitcode::OK)
}

/// Walk one fixture, then compare equal and unequal fixtures.
#[instrument(skip(settings))]
fn cmd_demo(settings: Settings) -> CliResult<i32> {
    let mut service = TreeService::new(settings);
    let one = TreeSource::Fixture(1);
    let two = TreeSource::Fixture(2);

    output::header(&format!("walk {one}"));
    let tree = service.build(&one);
    output::info(&service.render_walk(&tree));

    for (left, right) in [(&one, &one), (&one, &two)] {
        output::header(&format!("same {left} {right}"));
        let comparison = service.compare_sources(left, right);
        output::info(&comparison.verdict.is_equivalent());
        output::detail(&comparison.verdict);
    }

    Ok(exitcode::OK)
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
    }
    Ok(exitcode::OK)
}
