use crate::SqlLexer;

/// Outcome of one run of a [`SqlGrammar`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseStatus {
    /// The token sequence was a complete statement.
    Accepted,

    /// The grammar gave up. The diagnostic, if the grammar reported one,
    /// is pending on the lexer.
    Rejected,
}

/// A grammar-driven parser that pulls its tokens from a [`SqlLexer`].
///
/// The LALR tables and grammar actions live outside this crate; this trait
/// is the seam they plug into. An implementation calls
/// [`SqlLexer::lex`] until it has a statement or hits a token it cannot
/// shift, registers the statement with [`SqlLexer::set_stmt`] and reports
/// failures through the lexer's error methods.
pub trait SqlGrammar {
    /// The syntax tree root the grammar builds.
    type Stmt;

    /// Parses one statement from `lexer`.
    fn parse(&mut self, lexer: &mut SqlLexer<Self::Stmt>) -> ParseStatus;
}
