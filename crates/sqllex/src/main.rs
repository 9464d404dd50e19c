mod cli;
mod command;
mod command_result;
mod commands;
mod drain_grammar;
mod log_level;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
pub(crate) use drain_grammar::DrainGrammar;

/// Checked in order; the first one set wins.
const LOG_LEVEL_ENV_VARS: [&str; 2] = ["SQLLEX_LOG", "LOG_LEVEL"];

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = LOG_LEVEL_ENV_VARS.iter().find_map(|name| {
        std::env::var(name).ok().map(|value| (*name, value))
    });
    let (log_level, warning) = log_level::choose(
        cli.verbose,
        env_val.as_ref().map(|(name, value)| (*name, value.as_str())),
    );

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
