mod retag;

use crate::Cli;
use crate::CommandResult;
use retag::RetagCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "sqllex")]
pub(crate) enum CommandEnum {
    /// Runs scanner token dumps through the lookahead lexer and prints
    /// which tokens the grammar would see under a different identity.
    Retag(Box<RetagCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Retag(cmd) => cmd.run(cli).await
        }
    }
}

#[cfg(test)]
mod tests;
