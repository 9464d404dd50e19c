/// Coarse classification of a [`SqlTokenId`](crate::token::SqlTokenId)
/// used by the lookahead rules.
///
/// The rules never care which identifier or keyword they are looking at
/// past the immediate neighbours, only whether a position holds a word, a
/// particular punctuation character, or nothing at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TerminalClass {
    /// Identity `0`: the synthetic end-of-input token.
    EndOfInput,

    /// A single-character punctuation terminal (codes `1..=255`), carrying
    /// the character's byte value.
    Punctuation(u8),

    /// Any multi-character terminal (codes above 255): keywords,
    /// identifiers, literals, multi-character operators.
    Word,

    /// A negative code. Scanners never produce these; they are treated as
    /// inert by every rule.
    Unknown,
}
