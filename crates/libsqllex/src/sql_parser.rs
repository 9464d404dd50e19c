use crate::ParsedStatement;
use crate::SqlGrammar;
use crate::SqlLexer;
use crate::SqlParseError;
use crate::token::SqlToken;

/// Runs a [`SqlGrammar`] over scanner output, one attempt at a time.
///
/// A `SqlParser` keeps one [`SqlLexer`] and reuses it for every call to
/// [`SqlParser::parse`], so a parser can be pooled. Each attempt starts
/// with [`SqlLexer::init`] and ends with [`SqlLexer::cleanup`], which means
/// nothing from one statement (tokens, syntax tree, pending error) is
/// still referenced once the next one starts.
///
/// Attempts are synchronous and run to completion. A parser is not shared
/// between threads while parsing; pools that hand parsers to worker
/// threads synchronize checkout themselves.
pub struct SqlParser<TGrammar: SqlGrammar> {
    grammar: TGrammar,
    lexer: SqlLexer<TGrammar::Stmt>,
}

impl<TGrammar: SqlGrammar> SqlParser<TGrammar> {
    /// Creates a parser around `grammar`.
    pub fn new(grammar: TGrammar) -> Self {
        Self {
            grammar,
            lexer: SqlLexer::default(),
        }
    }

    /// Parses the statement that `tokens` were scanned from.
    pub fn parse(
        &mut self,
        source: &str,
        tokens: Vec<SqlToken>,
    ) -> Result<ParsedStatement<TGrammar::Stmt>, SqlParseError> {
        self.lexer.init(source, tokens);
        let status = self.grammar.parse(&mut self.lexer);
        let result = self.lexer.finish(status);
        self.lexer.cleanup();
        result
    }

    /// Returns the grammar.
    pub fn grammar(&self) -> &TGrammar {
        &self.grammar
    }

    /// Returns the lexer. Between attempts it holds no tokens, statement or
    /// error.
    pub fn lexer(&self) -> &SqlLexer<TGrammar::Stmt> {
        &self.lexer
    }
}

impl<TGrammar: SqlGrammar + Default> Default for SqlParser<TGrammar> {
    fn default() -> Self {
        Self::new(TGrammar::default())
    }
}
