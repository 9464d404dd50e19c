//! Various test utils.

use crate::HelpMessage;
use crate::ParseStatus;
use crate::PlaceholderIdx;
use crate::SqlGrammar;
use crate::SqlLexer;
use crate::token::SqlToken;
use crate::token::SqlTokenId;

/// A minimal SQL scanner for tests.
///
/// Recognizes keywords (via [`SqlTokenId::keyword`]), identifiers, integer
/// and decimal literals, single-quoted strings, `$n` placeholders, the
/// help token `??`, a few two-character operators and single-character
/// punctuation. Unterminated strings and non-ASCII characters produce
/// [`SqlTokenId::ERROR`] tokens carrying the error message, like a real
/// scanner would.
pub fn scan(sql: &str) -> Vec<SqlToken> {
    let bytes = sql.as_bytes();
    let mut tokens = vec![];
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let b = bytes[i];
        if b.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let id = if b.is_ascii_alphabetic() || b == b'_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            SqlTokenId::keyword(&sql[start..i]).unwrap_or(SqlTokenId::IDENT)
        } else if b.is_ascii_digit() {
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                SqlTokenId::FCONST
            } else {
                SqlTokenId::ICONST
            }
        } else if b == b'\'' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'\'' {
                i += 1;
            }
            if i == bytes.len() {
                tokens.push(SqlToken::new(SqlTokenId::ERROR, start as u32, "unterminated string"));
                break;
            }
            i += 1;
            SqlTokenId::SCONST
        } else if b == b'$' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            SqlTokenId::PLACEHOLDER
        } else if !b.is_ascii() {
            let ch_len = sql[start..].chars().next().map_or(1, char::len_utf8);
            i += ch_len;
            tokens.push(SqlToken::new(
                SqlTokenId::ERROR,
                start as u32,
                format!("invalid character {:?}", &sql[start..i]),
            ));
            continue;
        } else {
            let two = bytes.get(i..i + 2);
            let op = match two {
                Some(b"??") => Some(SqlTokenId::HELPTOKEN),
                Some(b"::") => Some(SqlTokenId::TYPECAST),
                Some(b"<=") => Some(SqlTokenId::LESS_EQUALS),
                Some(b">=") => Some(SqlTokenId::GREATER_EQUALS),
                Some(b"<>") | Some(b"!=") => Some(SqlTokenId::NOT_EQUALS),
                Some(b"||") => Some(SqlTokenId::CONCAT),
                _ => None,
            };
            match op {
                Some(id) => {
                    i += 2;
                    id
                },
                None => {
                    i += 1;
                    SqlTokenId::punct(b)
                },
            }
        };
        tokens.push(SqlToken::new(id, start as u32, &sql[start..i]));
    }
    tokens
}

/// Returns the identities of `tokens`.
pub fn ids(tokens: &[SqlToken]) -> Vec<SqlTokenId> {
    tokens.iter().map(|token| token.id).collect()
}

/// Lexes `sql` to the end and returns every token handed out, excluding
/// the final end-of-input token.
pub fn lex_all(sql: &str) -> Vec<SqlToken> {
    let mut lexer = SqlLexer::<()>::new(sql, scan(sql));
    let mut out = vec![];
    loop {
        let token = lexer.lex();
        if token.is_eof() {
            return out;
        }
        out.push(token);
    }
}

/// Lexes `sql` and returns the identity reported for the first token whose
/// text equals `text` (ignoring ASCII case).
pub fn reported_id(sql: &str, text: &str) -> SqlTokenId {
    lex_all(sql)
        .into_iter()
        .find(|token| token.text.eq_ignore_ascii_case(text))
        .map(|token| token.id)
        .unwrap_or_else(|| panic!("no token `{text}` in `{sql}`"))
}

/// A stand-in for the LALR grammar.
///
/// Pulls every token, records what it was handed, and mimics the grammar
/// actions the lexer cares about:
/// - `$n` placeholders call `update_num_placeholders(n - 1)`
/// - every identifier directly after `FROM` gets an annotation slot
/// - an error token, a help token or a token with `reject_at` identity
///   fails the attempt through `error()` (plus `set_help()` for the help
///   token when `help` is set)
#[derive(Debug, Default)]
pub struct MockGrammar {
    pub reject_at: Option<SqlTokenId>,
    pub help: Option<HelpMessage>,
    pub attempts: usize,
}

impl SqlGrammar for MockGrammar {
    type Stmt = Vec<SqlToken>;

    fn parse(&mut self, lexer: &mut SqlLexer<Self::Stmt>) -> ParseStatus {
        self.attempts += 1;
        let mut seen: Vec<SqlToken> = vec![];
        loop {
            let token = lexer.lex();
            match token.id {
                SqlTokenId::EOF => break,
                SqlTokenId::ERROR => {
                    lexer.error("syntax error");
                    return ParseStatus::Rejected;
                },
                SqlTokenId::HELPTOKEN => {
                    lexer.error("syntax error");
                    if let Some(help) = &self.help {
                        lexer.set_help(help);
                    }
                    return ParseStatus::Rejected;
                },
                id if Some(id) == self.reject_at => {
                    lexer.error(&format!("syntax error: unexpected {id}"));
                    if let Some(help) = &self.help {
                        lexer.set_help(help);
                    }
                    return ParseStatus::Rejected;
                },
                SqlTokenId::PLACEHOLDER => {
                    let n: u32 = token.text[1..].parse().unwrap();
                    lexer.update_num_placeholders(PlaceholderIdx::new(n - 1));
                },
                SqlTokenId::IDENT
                    if seen.last().is_some_and(|prev| prev.id == SqlTokenId::FROM) =>
                {
                    lexer.new_annotation();
                },
                _ => {},
            }
            seen.push(token);
        }
        if !seen.is_empty() {
            lexer.set_stmt(seen);
        }
        ParseStatus::Accepted
    }
}
