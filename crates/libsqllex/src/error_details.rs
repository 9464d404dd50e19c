//! Attaches source context to parse diagnostics.

use crate::SourcePosition;
use crate::SqlParseError;
use crate::SqlParseErrorKind;
use crate::token::SqlTokenId;

/// Header of the detail block that reproduces the source.
const SOURCE_CONTEXT_HEADER: &str = "source SQL:";

/// Turns the pending cause of a failed attempt into the final diagnostic,
/// given the last token handed to the grammar.
///
/// - If that token is a [`SqlTokenId::ERROR`] token, the scanner failed:
///   the result is a [`SqlParseErrorKind::Lexical`] error reading
///   `lexical error: {token_text}`, with `cause` kept as its secondary
///   error.
/// - Otherwise the result reads
///   `at or near "{token_text}": syntax error: {cause}` (the
///   `syntax error` part is not repeated when the cause already says it).
///   Notes and telemetry of the cause are kept. So is its kind if it is
///   [`SqlParseErrorKind::Unsupported`] or
///   [`SqlParseErrorKind::HelpRequest`]; any other kind becomes
///   [`SqlParseErrorKind::Syntax`].
///
/// Either way a detail note is added containing the source through the end
/// of the line holding `token_pos`, and a caret line pointing at
/// `token_pos`.
pub fn populate_error_details(
    token_id: SqlTokenId,
    token_text: &str,
    token_pos: u32,
    cause: SqlParseError,
    source: &str,
) -> SqlParseError {
    let position = SourcePosition::locate(source, token_pos as usize);

    let mut error = if token_id == SqlTokenId::ERROR {
        SqlParseError::new(format!("lexical error: {token_text}"), SqlParseErrorKind::Lexical)
            .with_secondary(cause)
    } else {
        let cause = if cause.message().contains("syntax error") {
            cause
        } else {
            cause.wrap("syntax error")
        };
        let kind = match cause.kind() {
            SqlParseErrorKind::Unsupported { .. } | SqlParseErrorKind::HelpRequest => {
                cause.kind().clone()
            },
            SqlParseErrorKind::Lexical | SqlParseErrorKind::Syntax => SqlParseErrorKind::Syntax,
        };
        cause
            .wrap(format_args!("at or near \"{token_text}\""))
            .with_kind(kind)
    };

    error.add_detail(format_source_context(source, position));
    error.with_position(position)
}

/// Renders everything up to the end of the line containing `position`,
/// then a line of spaces ending in a caret under `position`.
///
/// ```text
/// source SQL:
/// SELECT *
/// FROM t WHERE
///        ^
/// ```
pub fn format_source_context(source: &str, position: SourcePosition) -> String {
    let offset = position.byte_offset().min(source.len());
    let line_end = memchr::memchr(b'\n', &source.as_bytes()[offset..])
        .map_or(source.len(), |nl| offset + nl);
    // `line_end` is either the length of the source or the index of an
    // ASCII newline, so it always falls on a char boundary.
    let through_line = source.get(..line_end).unwrap_or(source);
    format!(
        "{SOURCE_CONTEXT_HEADER}\n{through_line}\n{}^",
        " ".repeat(position.column()),
    )
}
