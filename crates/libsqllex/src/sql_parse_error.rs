use crate::PgCode;
use crate::SourcePosition;
use crate::SqlErrorNote;
use crate::SqlErrorNoteKind;
use crate::SqlErrorNotes;
use crate::SqlParseErrorKind;

/// The single diagnostic produced by a failed parse attempt.
///
/// Carries a classification, a message, a SQLSTATE code and notes. Once
/// source context has been attached (see
/// [`populate_error_details`](crate::populate_error_details)) it also knows
/// the position of the offending token and has a detail note reproducing
/// the source through the offending line with a caret under the token.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SqlParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: `at or near "FROM": syntax error`,
    /// `lexical error: unterminated string`
    message: String,

    /// Categorized error kind for programmatic handling.
    kind: SqlParseErrorKind,

    /// SQLSTATE code reported to clients.
    code: PgCode,

    /// Location of the offending token, once source context is attached.
    position: Option<SourcePosition>,

    /// Detail blocks and hints, in the order they were attached.
    notes: SqlErrorNotes,

    /// Usage-reporting key for unimplemented-feature diagnostics.
    telemetry_key: Option<String>,

    /// The error that was pending when a lexical error superseded it.
    #[source]
    secondary: Option<Box<SqlParseError>>,
}

impl SqlParseError {
    /// Creates an error of the given kind with no notes and no source
    /// context.
    pub fn new(message: impl Into<String>, kind: SqlParseErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            code: PgCode::SYNTAX,
            position: None,
            notes: SqlErrorNotes::new(),
            telemetry_key: None,
            secondary: None,
        }
    }

    /// Creates a [`SqlParseErrorKind::Syntax`] error with no notes and no
    /// source context. This is how grammar actions report the cause of a
    /// failure before handing it to the lexer.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(message, SqlParseErrorKind::Syntax)
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SqlParseErrorKind {
        &self.kind
    }

    /// Returns the SQLSTATE code.
    pub fn code(&self) -> PgCode {
        self.code
    }

    /// Returns the position of the offending token, if source context has
    /// been attached.
    pub fn position(&self) -> Option<SourcePosition> {
        self.position
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &SqlErrorNotes {
        &self.notes
    }

    /// Returns the most recently attached detail note, which after source
    /// context is attached is the source-line-and-caret block.
    pub fn detail(&self) -> Option<&str> {
        self.notes
            .iter()
            .rev()
            .find(|note| note.kind == SqlErrorNoteKind::Detail)
            .map(|note| note.message.as_str())
    }

    /// Returns every hint, in the order attached.
    pub fn hints(&self) -> impl Iterator<Item = &str> {
        self.notes
            .iter()
            .filter(|note| note.kind == SqlErrorNoteKind::Hint)
            .map(|note| note.message.as_str())
    }

    /// Returns the usage-reporting key, if any.
    pub fn telemetry_key(&self) -> Option<&str> {
        self.telemetry_key.as_deref()
    }

    /// Returns the error that a lexical error superseded, if any.
    pub fn secondary(&self) -> Option<&SqlParseError> {
        self.secondary.as_deref()
    }

    /// Adds a detail note.
    pub fn add_detail(&mut self, message: impl Into<String>) {
        self.notes.push(SqlErrorNote::detail(message));
    }

    /// Adds a hint note.
    pub fn add_hint(&mut self, message: impl Into<String>) {
        self.notes.push(SqlErrorNote::hint(message));
    }

    /// Builder-style [`SqlParseError::add_hint`].
    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.add_hint(message);
        self
    }

    /// Sets the usage-reporting key.
    pub fn with_telemetry_key(mut self, key: impl Into<String>) -> Self {
        self.telemetry_key = Some(key.into());
        self
    }

    /// Prefixes the message with `prefix: `, keeping everything else.
    pub(crate) fn wrap(mut self, prefix: impl std::fmt::Display) -> Self {
        self.message = format!("{prefix}: {}", self.message);
        self
    }

    pub(crate) fn with_kind(mut self, kind: SqlParseErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) fn with_position(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }

    pub(crate) fn with_secondary(mut self, secondary: SqlParseError) -> Self {
        self.secondary = Some(Box::new(secondary));
        self
    }

    /// Formats this error as a multi-line diagnostic for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// ERROR: at or near "FROM": syntax error
    /// SQLSTATE: 42601
    /// DETAIL: source SQL:
    /// SELECT a,
    ///   FROM t
    ///   ^
    /// HINT: try \h SELECT
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        let severity = match self.kind {
            SqlParseErrorKind::HelpRequest => "HELP",
            _ => "ERROR",
        };
        output.push_str(&format!("{severity}: {}\n", self.message));
        output.push_str(&format!("SQLSTATE: {}\n", self.code));

        for note in &self.notes {
            let prefix = match note.kind {
                SqlErrorNoteKind::Detail => "DETAIL",
                SqlErrorNoteKind::Hint => "HINT",
            };
            output.push_str(&format!("{prefix}: {}\n", note.message));
        }

        if let Some(secondary) = &self.secondary {
            output.push_str(&format!("CAUSED BY: {}\n", secondary.message));
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 2:5: ERROR: at or near "FROM": syntax error
    /// ```
    pub fn format_oneline(&self) -> String {
        match self.position {
            Some(position) => format!("{position}: ERROR: {}", self.message),
            None => format!("ERROR: {}", self.message),
        }
    }
}
