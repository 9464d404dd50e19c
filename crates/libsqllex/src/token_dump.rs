use crate::token::SqlToken;
use std::path::Path;
use std::path::PathBuf;

/// Scanner output captured as JSON: the SQL text and the tokens scanned
/// from it.
///
/// ```json
/// {
///   "sql": "SELECT a FROM t",
///   "tokens": [
///     { "id": "SELECT", "pos": 0, "text": "SELECT" },
///     { "id": "IDENT", "pos": 7, "text": "a" },
///     { "id": 319, "pos": 9, "text": "FROM" },
///     { "id": "IDENT", "pos": 14, "text": "t" }
///   ]
/// }
/// ```
///
/// Token identities may be written either as their integer code or as the
/// symbolic name [`SqlTokenId::name`](crate::token::SqlTokenId::name)
/// produces.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TokenDump {
    pub sql: String,
    pub tokens: Vec<SqlToken>,
}

impl TokenDump {
    /// Parses and validates a dump.
    pub fn from_json(json: &str) -> Result<Self, TokenDumpError> {
        let dump: TokenDump = serde_json::from_str(json)?;
        dump.validate()?;
        Ok(dump)
    }

    /// Reads, parses and validates the dump at `file_path`.
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Self, TokenDumpError> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path).map_err(|err| TokenDumpError::FileReadError {
            file_path: file_path.to_path_buf(),
            err,
        })?;
        Self::from_json(&json)
    }

    /// Serializes the dump as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TokenDumpError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every token offset lies within the SQL text and that
    /// offsets never go backwards.
    fn validate(&self) -> Result<(), TokenDumpError> {
        let mut prev_pos = 0;
        for (index, token) in self.tokens.iter().enumerate() {
            let pos = token.pos as usize;
            if pos > self.sql.len() {
                return Err(TokenDumpError::OffsetOutOfRange {
                    index,
                    pos: token.pos,
                    sql_len: self.sql.len(),
                });
            }
            if pos < prev_pos {
                return Err(TokenDumpError::OffsetsNotAscending { index, pos: token.pos });
            }
            prev_pos = pos;
        }
        Ok(())
    }
}

/// Error returned when a [`TokenDump`] cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TokenDumpError {
    #[error("Failed to read token dump {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("Malformed token dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token {index} starts at offset {pos}, past the end of the {sql_len}-byte SQL text")]
    OffsetOutOfRange {
        index: usize,
        pos: u32,
        sql_len: usize,
    },

    #[error("Token {index} starts at offset {pos}, before the token preceding it")]
    OffsetsNotAscending {
        index: usize,
        pos: u32,
    },
}
