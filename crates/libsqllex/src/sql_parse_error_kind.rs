/// Categorizes parse diagnostics for programmatic handling.
///
/// The `#[error(...)]` messages are concise/programmatic. Full
/// human-readable messages are in `SqlParseError::message()`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SqlParseErrorKind {
    /// The scanner could not tokenize the input.
    ///
    /// The last token handed to the grammar was a
    /// [`SqlTokenId::ERROR`](crate::token::SqlTokenId::ERROR) token
    /// carrying the scanner's message.
    ///
    /// # Example
    /// ```text
    /// lexical error: unterminated string
    /// ```
    #[error("lexical error")]
    Lexical,

    /// The grammar rejected the token sequence.
    ///
    /// # Example
    /// ```text
    /// at or near "FROM": syntax error
    /// ```
    #[error("syntax error")]
    Syntax,

    /// The grammar accepted the tokens but declines to support the
    /// construct.
    ///
    /// Callers should report these as "not yet supported" rather than as
    /// invalid syntax.
    #[error("unsupported feature: `{feature}`")]
    Unsupported {
        /// Identifies the feature (a short name, a tracking-issue URL or a
        /// descriptive phrase).
        feature: String,
        /// Tracking issue number, if the feature is tracked.
        issue: Option<u32>,
        /// Explanatory detail text, if any.
        detail: Option<String>,
    },

    /// Not an error: the input ended in a help token and the diagnostic
    /// carries the requested help text as a hint.
    #[error("help request")]
    HelpRequest,
}

impl SqlParseErrorKind {
    /// Returns `true` for [`SqlParseErrorKind::Unsupported`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
