//! Read cursor over a finished token array with a bounded lookahead and
//! lookbehind window.

use crate::token::SqlToken;
use crate::token::SqlTokenId;

/// How many tokens before the current one [`SqlTokenCursor::peek`] may
/// inspect.
pub const MAX_LOOKBEHIND: usize = 2;

/// How many tokens after the current one [`SqlTokenCursor::peek`] may
/// inspect.
pub const MAX_LOOKAHEAD: usize = 6;

/// Read cursor over the scanner's output for one parse attempt.
///
/// The cursor owns a private copy of the token array and a position that
/// only ever moves forward. `advance()` moves it; `peek()` inspects the
/// window around it without moving.
///
/// Any position outside the array, before the first token or after the
/// last one, reads as the synthetic end-of-input token (identity `0`,
/// offset = source length, text `EOF`). That token matches no keyword, so
/// rules that look past either end of the input simply fail to fire.
#[derive(Clone, Debug)]
pub struct SqlTokenCursor {
    tokens: Vec<SqlToken>,

    /// Number of `advance()` calls so far. The current token is at index
    /// `advanced - 1`; zero means the cursor is before the first token.
    advanced: usize,

    eof: SqlToken,

    /// What `last_token()` reports before the first `advance()`.
    before_start: SqlToken,
}

impl SqlTokenCursor {
    /// Creates a cursor positioned before the first token.
    pub fn new(tokens: Vec<SqlToken>, source_len: usize) -> Self {
        Self {
            tokens,
            advanced: 0,
            eof: SqlToken::eof(source_len),
            before_start: SqlToken::new(SqlTokenId::EOF, 0, ""),
        }
    }

    /// Moves forward by one token and returns the token now under the
    /// cursor (or the end-of-input token once the array is exhausted).
    pub fn advance(&mut self) -> &SqlToken {
        self.advanced += 1;
        self.peek(0)
    }

    /// Returns the token `offset` positions away from the current one
    /// without moving the cursor.
    ///
    /// `offset` must lie in `-MAX_LOOKBEHIND..=MAX_LOOKAHEAD`. Positions
    /// outside the token array yield the end-of-input token.
    pub fn peek(&self, offset: isize) -> &SqlToken {
        debug_assert!(
            (-(MAX_LOOKBEHIND as isize)..=MAX_LOOKAHEAD as isize).contains(&offset),
            "peek offset {offset} is outside the lookahead window",
        );
        self.index_at(offset)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&self.eof)
    }

    /// Returns the most recently returned token.
    ///
    /// Before the first `advance()` this is an empty token at offset `0`;
    /// past the end of the array it is the end-of-input token.
    pub fn last_token(&self) -> &SqlToken {
        if self.advanced == 0 {
            return &self.before_start;
        }
        self.peek(0)
    }

    /// Index of the most recently returned token, or `None` before the
    /// first `advance()`. Keeps counting past the end of the array.
    pub fn position(&self) -> Option<usize> {
        self.advanced.checked_sub(1)
    }

    /// Returns `true` once the cursor has moved past the last token.
    pub fn is_exhausted(&self) -> bool {
        self.advanced > self.tokens.len()
    }

    /// Number of tokens in the underlying array.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the underlying array holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Drops the token array so a pooled cursor does not keep the previous
    /// attempt's tokens alive, and rewinds to "before start".
    pub(crate) fn clear(&mut self) {
        self.tokens = Vec::new();
        self.advanced = 0;
        self.eof = SqlToken::eof(0);
    }

    fn index_at(&self, offset: isize) -> Option<usize> {
        let current = self.position()?;
        current.checked_add_signed(offset)
    }
}

impl Default for SqlTokenCursor {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
