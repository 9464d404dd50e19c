use crate::token::SqlTokenId;

/// A token produced by the scanner: a terminal identity, the byte offset of
/// the lexeme in the source text, and the lexeme itself.
///
/// For [`SqlTokenId::ERROR`] tokens the scanner stores its error message in
/// `text` instead of a lexeme.
///
/// Retagging never mutates a token; [`SqlToken::retagged`] produces a copy
/// with a different identity and the same offset and text.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SqlToken {
    /// The terminal code the grammar matches against.
    pub id: SqlTokenId,

    /// Byte offset of the first byte of the lexeme in the source text.
    pub pos: u32,

    /// The literal lexeme (or the scanner's message for error tokens).
    #[serde(default)]
    pub text: String,
}

impl SqlToken {
    /// Creates a token.
    pub fn new(id: SqlTokenId, pos: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
        }
    }

    /// The synthetic end-of-input token for a source of `source_len`
    /// bytes: identity `0`, positioned just past the last byte, with the
    /// text `EOF`.
    pub fn eof(source_len: usize) -> Self {
        Self {
            id: SqlTokenId::EOF,
            pos: u32::try_from(source_len).unwrap_or(u32::MAX),
            text: "EOF".to_string(),
        }
    }

    /// Returns a copy of this token reporting `id` instead of its own
    /// identity.
    pub fn retagged(&self, id: SqlTokenId) -> Self {
        Self {
            id,
            pos: self.pos,
            text: self.text.clone(),
        }
    }

    /// Returns `true` for the synthetic end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.id == SqlTokenId::EOF
    }
}
