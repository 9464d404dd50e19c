//! The lookahead lexer that sits between a SQL scanner and an LALR(1)
//! grammar.
//!
//! Many SQL keywords need more than one token of lookahead to parse
//! (`NOT` in `a NOT LIKE b` vs. `NOT a`, `INDEX` as a keyword vs. a column
//! named `index`). This crate takes the scanner's finished token array and
//! hands tokens to the grammar one at a time, substituting a more specific
//! terminal for such keywords based on a bounded window of neighbouring
//! tokens. It also keeps the per-statement placeholder and annotation
//! counters and builds the single source-located diagnostic of a failed
//! parse attempt.

mod annotation_registry;
mod disambiguator;
mod error_details;
mod help_message;
mod parsed_statement;
mod pg_code;
mod source_position;
mod sql_error_note;
mod sql_error_note_kind;
mod sql_grammar;
mod sql_lexer;
mod sql_parse_error;
mod sql_parse_error_kind;
mod sql_parser;
mod sql_token_cursor;
mod token_dump;
pub mod token;
pub mod token_source;

pub use annotation_registry::AnnotationIdx;
pub use annotation_registry::AnnotationRegistry;
pub use annotation_registry::PlaceholderIdx;
pub use disambiguator::ORDER_BY_INDEX_SCAN_LIMIT;
pub use disambiguator::disambiguate;
pub use error_details::format_source_context;
pub use error_details::populate_error_details;
pub use help_message::HelpMessage;
pub use help_message::HelpTarget;
pub use parsed_statement::ParsedStatement;
pub use pg_code::PgCode;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use sql_error_note::SqlErrorNote;
pub use sql_error_note::SqlErrorNotes;
pub use sql_error_note_kind::SqlErrorNoteKind;
pub use sql_grammar::ParseStatus;
pub use sql_grammar::SqlGrammar;
pub use sql_lexer::HELP_ERROR_PREFIX;
pub use sql_lexer::ISSUE_TRACKER_URL;
pub use sql_lexer::SqlLexer;
pub use sql_parse_error::SqlParseError;
pub use sql_parse_error_kind::SqlParseErrorKind;
pub use sql_parser::SqlParser;
pub use sql_token_cursor::MAX_LOOKAHEAD;
pub use sql_token_cursor::MAX_LOOKBEHIND;
pub use sql_token_cursor::SqlTokenCursor;
pub use token_dump::TokenDump;
pub use token_dump::TokenDumpError;

#[cfg(test)]
mod tests;
