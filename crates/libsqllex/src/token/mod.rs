//! This module provides the token types exchanged between the scanner, the
//! lookahead lexer and the grammar.

mod sql_token;
mod sql_token_id;
mod terminal_class;

pub use sql_token::SqlToken;
pub use sql_token_id::LOOKAHEAD_KEYWORDS;
pub use sql_token_id::SqlTokenId;
pub use terminal_class::TerminalClass;
