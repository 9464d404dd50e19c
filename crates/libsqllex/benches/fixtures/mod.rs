//! Statements and a whitespace-and-punctuation scanner for the lexer
//! benchmarks.

use libsqllex::token::SqlToken;
use libsqllex::token::SqlTokenId;

pub const SIMPLE_SELECT: &str = "SELECT a, b FROM t WHERE a = 1";

pub const LOOKAHEAD_HEAVY: &str = "\
SELECT a FROM t AS OF SYSTEM TIME '-1s' \
WHERE a NOT LIKE 'x%' AND b NOT IN (1, 2) \
ORDER BY INDEX t@idx NULLS FIRST";

pub const CREATE_TABLE: &str = "\
CREATE TABLE t (\
id INT PRIMARY KEY GENERATED BY DEFAULT AS IDENTITY, \
parent INT REFERENCES p ON DELETE CASCADE ON UPDATE RESTRICT, \
INDEX (parent) WITH (bucket_count = 8)\
)";

/// `n` copies of [`LOOKAHEAD_HEAVY`] separated by `;`.
pub fn many_statements(n: usize) -> String {
    vec![LOOKAHEAD_HEAVY; n].join("; ")
}

/// Splits `sql` into words, numbers, quoted strings and single-character
/// punctuation. Enough for the fixtures above.
pub fn scan(sql: &str) -> Vec<SqlToken> {
    let bytes = sql.as_bytes();
    let mut tokens = vec![];
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        let b = bytes[i];
        let id = if b.is_ascii_whitespace() {
            i += 1;
            continue;
        } else if b.is_ascii_alphanumeric() || b == b'_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let word = &sql[start..i];
            if b.is_ascii_digit() {
                SqlTokenId::ICONST
            } else {
                SqlTokenId::keyword(word).unwrap_or(SqlTokenId::IDENT)
            }
        } else if b == b'\'' {
            i += 1;
            while i < bytes.len() && bytes[i] != b'\'' {
                i += 1;
            }
            i = (i + 1).min(bytes.len());
            SqlTokenId::SCONST
        } else {
            i += 1;
            SqlTokenId::punct(b)
        };
        tokens.push(SqlToken::new(id, start as u32, &sql[start..i]));
    }
    tokens
}
