use libsqllex::ParseStatus;
use libsqllex::SqlGrammar;
use libsqllex::SqlLexer;
use libsqllex::token::SqlToken;
use libsqllex::token::SqlTokenId;

/// A grammar that accepts any token sequence and records the tokens it was
/// handed, so the effect of the lookahead rules can be inspected without a
/// real SQL grammar.
///
/// It only rejects what no grammar could accept: a scanner error token, or
/// a help token (which it reports the way a grammar would, so the help
/// diagnostic path is exercised too).
#[derive(Debug, Default)]
pub(crate) struct DrainGrammar;

impl SqlGrammar for DrainGrammar {
    type Stmt = Vec<SqlToken>;

    fn parse(&mut self, lexer: &mut SqlLexer<Self::Stmt>) -> ParseStatus {
        let mut tokens = vec![];
        loop {
            let token = lexer.lex();
            match token.id {
                SqlTokenId::EOF => break,
                SqlTokenId::ERROR | SqlTokenId::HELPTOKEN => {
                    lexer.error("syntax error");
                    return ParseStatus::Rejected;
                },
                _ => tokens.push(token),
            }
        }
        lexer.set_stmt(tokens);
        ParseStatus::Accepted
    }
}
