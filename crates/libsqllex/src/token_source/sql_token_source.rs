use crate::token::SqlToken;

/// Marker trait for SQL scanners (iterators that generate [`SqlToken`]s).
///
/// Scanning is not part of this crate. Any scanner that can hand over its
/// finished output as an iterator plugs in through this trait, for example
/// via [`SqlLexer::from_token_source`](crate::SqlLexer::from_token_source).
///
/// Scanners are responsible for:
/// - Recording the byte offset of every lexeme in the original source
/// - Emitting [`SqlTokenId::ERROR`](crate::token::SqlTokenId::ERROR) with
///   the error message as the token text when a lexeme cannot be scanned
/// - Not emitting an end-of-input token; the lexer synthesizes one
///
/// The whole source is consumed up front: lookahead rules need up to six
/// tokens past the current one, and tokens are never re-scanned.
pub trait SqlTokenSource: Iterator<Item = SqlToken> {}

impl<T> SqlTokenSource for T where T: Iterator<Item = SqlToken> {}
