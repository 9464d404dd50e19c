use crate::AnnotationIdx;
use crate::AnnotationRegistry;
use crate::HelpMessage;
use crate::ParseStatus;
use crate::ParsedStatement;
use crate::PlaceholderIdx;
use crate::SqlParseError;
use crate::SqlParseErrorKind;
use crate::SqlTokenCursor;
use crate::disambiguate;
use crate::populate_error_details;
use crate::token::SqlToken;
use crate::token::SqlTokenId;
use crate::token_source::SqlTokenSource;

/// Prefix that marks a diagnostic as a help payload rather than an error.
/// Interactive shells look for it at the start of the message.
pub const HELP_ERROR_PREFIX: &str = "help token in input";

/// Base URL of the tracker that `unimplemented_with_issue*` diagnostics
/// link to.
pub const ISSUE_TRACKER_URL: &str = "https://github.com/cockroachdb/cockroach/issues";

/// Message reported when the grammar gives up without saying why.
const DEFAULT_SYNTAX_ERROR: &str = "syntax error";

const UNIMPLEMENTED_MESSAGE: &str = "unimplemented: this syntax";

const NOT_YET_IMPLEMENTED_HINT: &str =
    "You have attempted to use a feature that is not yet implemented.";

/// The state of one parse attempt: the grammar's token supplier and the
/// bookkeeping it reports back into.
///
/// The grammar pulls tokens with [`SqlLexer::lex`], which applies the
/// lookahead rules from [`disambiguate`] to each token exactly once.
/// Grammar actions register the statement, annotation slots and
/// placeholders as they go, and report failures through the `error`,
/// `set_error*`, `set_help` and `unimplemented*` methods. At most one
/// diagnostic is pending at a time: every setter replaces whatever was
/// there before.
///
/// A lexer may be reused for several attempts (see
/// [`SqlParser`](crate::SqlParser)); [`SqlLexer::init`] starts an attempt
/// and [`SqlLexer::cleanup`] releases the previous attempt's tokens,
/// statement and error.
///
/// # Type Parameters
///
/// * `TStmt` - The grammar's syntax tree root. Opaque to the lexer.
#[derive(Debug)]
pub struct SqlLexer<TStmt> {
    /// Full source text, for error context.
    source: String,
    cursor: SqlTokenCursor,
    registry: AnnotationRegistry,
    stmt: Option<TStmt>,
    last_error: Option<SqlParseError>,
    /// Number of tokens the lookahead rules have been evaluated for.
    num_lexed: usize,
}

impl<TStmt> SqlLexer<TStmt> {
    /// Creates a lexer for one attempt over `tokens`, which the scanner
    /// produced from `source`.
    pub fn new(source: impl Into<String>, tokens: Vec<SqlToken>) -> Self {
        let source = source.into();
        let cursor = SqlTokenCursor::new(tokens, source.len());
        Self {
            source,
            cursor,
            registry: AnnotationRegistry::default(),
            stmt: None,
            last_error: None,
            num_lexed: 0,
        }
    }

    /// Creates a lexer by draining a scanner.
    pub fn from_token_source(
        source: impl Into<String>,
        token_source: impl SqlTokenSource,
    ) -> Self {
        Self::new(source, token_source.collect())
    }

    /// Starts a fresh attempt, resetting every counter and dropping any
    /// state left over from a previous one.
    pub fn init(&mut self, source: &str, tokens: Vec<SqlToken>) {
        self.source.clear();
        self.source.push_str(source);
        self.cursor = SqlTokenCursor::new(tokens, source.len());
        self.registry = AnnotationRegistry::default();
        self.stmt = None;
        self.last_error = None;
        self.num_lexed = 0;
        log::debug!(
            "Starting parse attempt over {} tokens ({} bytes of SQL).",
            self.cursor.len(),
            self.source.len(),
        );
    }

    /// Releases the token array, the statement and any pending error so a
    /// pooled lexer does not keep them alive between attempts.
    pub fn cleanup(&mut self) {
        self.cursor.clear();
        self.stmt = None;
        self.last_error = None;
    }

    /// Returns the next token, with its identity possibly rewritten by the
    /// lookahead rules. After the last token, returns the end-of-input
    /// token (identity `0`) on every call.
    pub fn lex(&mut self) -> SqlToken {
        self.cursor.advance();
        if self.cursor.is_exhausted() {
            return self.cursor.peek(0).clone();
        }

        self.num_lexed += 1;
        let token = self.cursor.peek(0);
        let id = disambiguate(&self.cursor);
        if id == token.id {
            return token.clone();
        }

        log::trace!(
            "Reporting `{}` at offset {} as {id} instead of {}.",
            token.text,
            token.pos,
            token.id,
        );
        token.retagged(id)
    }

    /// The most recently returned token, as the scanner produced it.
    pub fn last_token(&self) -> &SqlToken {
        self.cursor.last_token()
    }

    /// The source text of the current attempt.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Read access to the token cursor.
    pub fn cursor(&self) -> &SqlTokenCursor {
        &self.cursor
    }

    /// Number of tokens the lookahead rules have been evaluated for in the
    /// current attempt. Never exceeds the number of scanned tokens.
    pub fn num_lexed(&self) -> usize {
        self.num_lexed
    }

    /// Allocates a new annotation slot.
    pub fn new_annotation(&mut self) -> AnnotationIdx {
        self.registry.new_annotation()
    }

    /// Called by the grammar for every placeholder it constructs.
    pub fn update_num_placeholders(&mut self, idx: PlaceholderIdx) {
        self.registry.update_num_placeholders(idx);
    }

    /// One plus the highest placeholder index seen in this attempt.
    pub fn num_placeholders(&self) -> usize {
        self.registry.num_placeholders()
    }

    /// Number of annotation slots allocated in this attempt.
    pub fn num_annotations(&self) -> u32 {
        self.registry.num_annotations()
    }

    /// Called by the grammar once the statement is constructed.
    pub fn set_stmt(&mut self, stmt: TStmt) {
        self.stmt = Some(stmt);
    }

    /// The pending diagnostic, if any.
    pub fn last_error(&self) -> Option<&SqlParseError> {
        self.last_error.as_ref()
    }

    /// Records `err` as the cause of the failure, with source context
    /// pointing at the last returned token.
    pub fn set_error(&mut self, err: SqlParseError) {
        let err = self.populate_error_details(err);
        self.record_error(err);
    }

    /// Records `err` as is, without source context.
    pub fn set_error_no_details(&mut self, err: SqlParseError) {
        self.record_error(err);
    }

    /// The grammar's generic failure callback.
    ///
    /// A leading `syntax error: ` in `message` is dropped; the diagnostic
    /// builder adds it back.
    pub fn error(&mut self, message: &str) {
        let err = self.syntax_error(message);
        self.record_error(err);
    }

    /// Attaches help for the statement or function being parsed.
    ///
    /// If the last token was the help token, the pending diagnostic (or a
    /// new `help request` one) becomes a help payload carrying the rendered
    /// help as a hint. Otherwise the pending syntax error stays and only
    /// gains a hint naming the shell command that shows the help.
    pub fn set_help(&mut self, help: &HelpMessage) {
        let pending = self
            .last_error
            .take()
            .unwrap_or_else(|| SqlParseError::syntax("help request"));
        let err = if self.cursor.last_token().id == SqlTokenId::HELPTOKEN {
            pending
                .wrap(HELP_ERROR_PREFIX)
                .with_kind(SqlParseErrorKind::HelpRequest)
                .with_hint(help.to_string())
        } else {
            pending.with_hint(format!("try {}", help.shell_command()))
        };
        self.record_error(err);
    }

    /// Reports a construct that is not implemented yet.
    pub fn unimplemented(&mut self, feature: &str) {
        let cause = SqlParseError::syntax(UNIMPLEMENTED_MESSAGE)
            .with_hint(NOT_YET_IMPLEMENTED_HINT)
            .with_telemetry_key(format!("sql.unimplemented.{feature}"));
        self.record_unsupported(cause, feature.to_string(), None, None);
    }

    /// Reports a construct that is not implemented yet and is tracked by
    /// `issue`.
    pub fn unimplemented_with_issue(&mut self, issue: u32) {
        let url = format!("{ISSUE_TRACKER_URL}/{issue}");
        let cause = SqlParseError::syntax(UNIMPLEMENTED_MESSAGE)
            .with_hint(NOT_YET_IMPLEMENTED_HINT)
            .with_hint(format!("See: {url}"))
            .with_telemetry_key(format!("sql.unimplemented.#{issue}"));
        self.record_unsupported(cause, url, Some(issue), None);
    }

    /// Reports a construct that is not implemented yet, tracked by `issue`,
    /// with `detail` narrowing down which part of the construct.
    pub fn unimplemented_with_issue_detail(&mut self, issue: u32, detail: &str) {
        let cause = SqlParseError::syntax(UNIMPLEMENTED_MESSAGE)
            .with_hint(NOT_YET_IMPLEMENTED_HINT)
            .with_hint(format!("See: {ISSUE_TRACKER_URL}/{issue}"))
            .with_telemetry_key(format!("sql.unimplemented.#{issue}.{detail}"));
        self.record_unsupported(
            cause,
            detail.to_string(),
            Some(issue),
            Some(detail.to_string()),
        );
    }

    /// Reports a construct that will deliberately never be supported.
    /// `reason` is shown as a hint; there is no "not yet implemented" hint.
    pub fn purposely_unimplemented(&mut self, feature: &str, reason: &str) {
        let cause = SqlParseError::syntax(UNIMPLEMENTED_MESSAGE)
            .with_hint(reason)
            .with_telemetry_key(format!("sql.purposely_unimplemented.{feature}"));
        self.record_unsupported(cause, feature.to_string(), None, None);
    }

    /// Ends the attempt. On [`ParseStatus::Accepted`] hands over the
    /// statement and counters; on [`ParseStatus::Rejected`] hands over the
    /// pending diagnostic, building a generic syntax error if the grammar
    /// never reported one.
    pub fn finish(&mut self, status: ParseStatus) -> Result<ParsedStatement<TStmt>, SqlParseError> {
        match status {
            ParseStatus::Accepted => Ok(ParsedStatement {
                stmt: self.stmt.take(),
                num_placeholders: self.registry.num_placeholders(),
                num_annotations: self.registry.num_annotations(),
            }),
            ParseStatus::Rejected => Err(match self.last_error.take() {
                Some(err) => err,
                None => self.syntax_error(DEFAULT_SYNTAX_ERROR),
            }),
        }
    }

    fn syntax_error(&self, message: &str) -> SqlParseError {
        let message = message.strip_prefix("syntax error: ").unwrap_or(message);
        self.populate_error_details(SqlParseError::syntax(message))
    }

    fn populate_error_details(&self, cause: SqlParseError) -> SqlParseError {
        let last = self.cursor.last_token();
        populate_error_details(last.id, &last.text, last.pos, cause, &self.source)
    }

    fn record_unsupported(
        &mut self,
        cause: SqlParseError,
        feature: String,
        issue: Option<u32>,
        detail: Option<String>,
    ) {
        let err = self
            .populate_error_details(cause)
            .with_kind(SqlParseErrorKind::Unsupported { feature, issue, detail });
        self.record_error(err);
    }

    fn record_error(&mut self, err: SqlParseError) {
        log::debug!("Recording parse error: {err}");
        if let Some(superseded) = self.last_error.replace(err) {
            log::trace!("Superseded pending parse error: {superseded}");
        }
    }
}

impl<TStmt> Default for SqlLexer<TStmt> {
    fn default() -> Self {
        Self::new(String::new(), Vec::new())
    }
}
