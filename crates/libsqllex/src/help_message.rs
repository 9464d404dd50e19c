/// What a [`HelpMessage`] documents.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HelpTarget {
    /// A statement, e.g. `CREATE TABLE`. Suggested as `\h {command}`.
    Command(String),

    /// A built-in function, e.g. `now`. Suggested as `\hf {function}`.
    Function(String),
}

/// Help text the grammar associates with the statement or function it was
/// parsing when it hit a help token (or an error).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HelpMessage {
    pub target: HelpTarget,
    pub description: String,
    pub text: String,
}

impl HelpMessage {
    pub fn command(
        command: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            target: HelpTarget::Command(command.into()),
            description: description.into(),
            text: text.into(),
        }
    }

    pub fn function(
        function: impl Into<String>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            target: HelpTarget::Function(function.into()),
            description: description.into(),
            text: text.into(),
        }
    }

    /// The shell command that would display this help, e.g.
    /// `\h CREATE TABLE`.
    pub fn shell_command(&self) -> String {
        match &self.target {
            HelpTarget::Command(command) => format!("\\h {command}"),
            HelpTarget::Function(function) => format!("\\hf {function}"),
        }
    }
}

impl std::fmt::Display for HelpMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            HelpTarget::Command(command) => writeln!(f, "Command:     {command}")?,
            HelpTarget::Function(function) => writeln!(f, "Function:    {function}")?,
        }
        writeln!(f, "Description: {}", self.description)?;
        if !self.text.is_empty() {
            write!(f, "\n{}", self.text)?;
        }
        Ok(())
    }
}
