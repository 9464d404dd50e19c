use crate::Cli;
use crate::CommandResult;

/// A `sqllex` subcommand. Runs to completion and reports through a
/// [`CommandResult`] instead of printing directly, so `main` owns stdout,
/// stderr and the exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
