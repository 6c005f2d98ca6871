mod cli;
mod command;
mod command_result;
mod commands;
mod file_utils;
mod output_utils;


use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "GQL_LOG";

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Picks the log level from `--verbose`, else from `GQL_LOG` (any
/// `tracing::Level` name, case-insensitive), else `INFO`.
fn setup_logger(cli: &Cli) {
    let mut invalid_env_level = None;
    let log_level = match std::env::var(LOG_LEVEL_ENV_VAR) {
        _ if cli.verbose => tracing::Level::DEBUG,
        Ok(value) => match value.trim().parse::<tracing::Level>() {
            Ok(level) => level,
            Err(_) => {
                invalid_env_level = Some(value);
                DEFAULT_LOG_LEVEL
            },
        },
        Err(_) => DEFAULT_LOG_LEVEL,
    };

    // stdout carries command output only.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = invalid_env_level {
        log::warn!("Ignoring invalid `{LOG_LEVEL_ENV_VAR}` value: `{value}`");
    }
}
