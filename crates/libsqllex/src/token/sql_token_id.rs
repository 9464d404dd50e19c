use crate::token::TerminalClass;
use std::borrow::Cow;

/// The terminal code of a SQL token, as matched by the grammar.
///
/// Codes `1..=255` are single-character punctuation and equal the byte
/// value of the character (e.g. `(` is `40`). Code `0` is end of input.
/// Every code above 255 is a multi-character terminal: a keyword, an
/// identifier or literal class, a multi-character operator, or one of the
/// lookahead variants that [`crate::disambiguate`] substitutes for a
/// keyword.
///
/// Identities are plain integers so that codes produced by an external
/// scanner can be carried through unchanged. The named constants below
/// cover every terminal this crate reasons about.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SqlTokenId(i32);

macro_rules! define_token_ids {
    (
        specials { $($special:ident = $special_code:literal),* $(,)? }
        keywords { $($keyword:ident = $keyword_code:literal),* $(,)? }
        lookahead { $($la:ident = $la_code:literal),* $(,)? }
    ) => {
        impl SqlTokenId {
            $(pub const $special: SqlTokenId = SqlTokenId($special_code);)*
            $(pub const $keyword: SqlTokenId = SqlTokenId($keyword_code);)*
            $(pub const $la: SqlTokenId = SqlTokenId($la_code);)*
        }

        /// Every named multi-character terminal, in declaration order.
        const NAMED_TOKEN_IDS: &[(&str, SqlTokenId)] = &[
            $((stringify!($special), SqlTokenId::$special),)*
            $((stringify!($keyword), SqlTokenId::$keyword),)*
            $((stringify!($la), SqlTokenId::$la),)*
        ];

        /// Terminals that a scanner reports for keyword lexemes.
        const KEYWORD_TOKEN_IDS: &[(&str, SqlTokenId)] = &[
            $((stringify!($keyword), SqlTokenId::$keyword),)*
        ];
    };
}

define_token_ids! {
    specials {
        ERROR = 257,
        HELPTOKEN = 258,
        IDENT = 259,
        SCONST = 260,
        BCONST = 261,
        ICONST = 262,
        FCONST = 263,
        PLACEHOLDER = 264,
        TYPECAST = 265,
        DOT_DOT = 266,
        LESS_EQUALS = 267,
        GREATER_EQUALS = 268,
        NOT_EQUALS = 269,
        CONCAT = 270,
    }
    keywords {
        ALL = 300,
        ALTER = 301,
        ALWAYS = 302,
        AND = 303,
        AS = 304,
        ASC = 305,
        BETWEEN = 306,
        BUCKET_COUNT = 307,
        BY = 308,
        CASCADE = 309,
        CLUSTER = 310,
        CONFLICT = 311,
        CREATE = 312,
        DEFAULT = 313,
        DELETE = 314,
        DESC = 315,
        DO = 316,
        FALSE = 317,
        FIRST = 318,
        FROM = 319,
        GENERATED = 320,
        IDENTITY = 321,
        ILIKE = 322,
        IN = 323,
        INDEX = 324,
        INSERT = 325,
        INT = 326,
        INTO = 327,
        INVERTED = 328,
        IS = 329,
        KEY = 330,
        LAST = 331,
        LIKE = 332,
        LIMIT = 333,
        NO = 334,
        NOT = 335,
        NOTHING = 336,
        NULL = 337,
        NULLS = 338,
        OF = 339,
        ON = 340,
        OPTIONS = 341,
        OR = 342,
        ORDER = 343,
        ORDINALITY = 344,
        PRIMARY = 345,
        REFERENCES = 346,
        RESET = 347,
        RESTRICT = 348,
        RETURNING = 349,
        ROLE = 350,
        SCRUB = 351,
        SELECT = 352,
        SESSION = 353,
        SET = 354,
        SHOW = 355,
        SIMILAR = 356,
        STORED = 357,
        STRING = 358,
        SYSTEM = 359,
        TABLE = 360,
        TENANT = 361,
        TIME = 362,
        TIMESTAMP = 363,
        TO = 364,
        TRACING = 365,
        TRUE = 366,
        UPDATE = 367,
        USER = 368,
        USING = 369,
        VALUES = 370,
        WHERE = 371,
        WITH = 372,
        ZONE = 373,
    }
    lookahead {
        NOTHING_AFTER_RETURNING = 500,
        INDEX_BEFORE_PAREN = 501,
        INDEX_BEFORE_NAME_THEN_PAREN = 502,
        INDEX_AFTER_ORDER_BY_BEFORE_AT = 503,
        AS_LA = 504,
        NOT_LA = 505,
        GENERATED_ALWAYS = 506,
        GENERATED_BY_DEFAULT = 507,
        WITH_LA = 508,
        NULLS_LA = 509,
        RESET_ALL = 510,
        ROLE_ALL = 511,
        USER_ALL = 512,
        ON_LA = 513,
        TENANT_ALL = 514,
        CLUSTER_ALL = 515,
        SET_TRACING = 516,
    }
}

/// Keyword identities whose reported terminal depends on lookahead.
///
/// A completion engine or any other consumer of raw scanner output must
/// not assume that one of these keywords reaches the grammar under its
/// own identity.
pub const LOOKAHEAD_KEYWORDS: &[SqlTokenId] = &[
    SqlTokenId::NOTHING,
    SqlTokenId::INDEX,
    SqlTokenId::NOT,
    SqlTokenId::WITH,
    SqlTokenId::AS,
    SqlTokenId::GENERATED,
    SqlTokenId::NULLS,
    SqlTokenId::RESET,
    SqlTokenId::ROLE,
    SqlTokenId::USER,
    SqlTokenId::ON,
    SqlTokenId::TENANT,
    SqlTokenId::CLUSTER,
    SqlTokenId::SET,
];

impl SqlTokenId {
    /// The end-of-input terminal.
    pub const EOF: SqlTokenId = SqlTokenId(0);

    /// Wraps a raw terminal code.
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The terminal for a single punctuation character.
    pub const fn punct(ch: u8) -> Self {
        Self(ch as i32)
    }

    /// Returns the raw terminal code.
    pub const fn code(self) -> i32 {
        self.0
    }

    /// Classifies this identity for lookahead matching.
    pub fn class(self) -> TerminalClass {
        match self.0 {
            0 => TerminalClass::EndOfInput,
            // Both bounds are checked by the pattern, so the cast is lossless.
            code @ 1..=255 => TerminalClass::Punctuation(code as u8),
            code if code > 255 => TerminalClass::Word,
            _ => TerminalClass::Unknown,
        }
    }

    /// Returns `true` for single-character punctuation terminals.
    pub fn is_punctuation(self) -> bool {
        matches!(self.class(), TerminalClass::Punctuation(_))
    }

    /// Returns `true` if this identity is exactly the punctuation `ch`.
    pub fn is_punct(self, ch: u8) -> bool {
        self.class() == TerminalClass::Punctuation(ch)
    }

    /// Returns `true` for multi-character terminals (keywords,
    /// identifiers, literals, operators).
    pub fn is_word(self) -> bool {
        self.class() == TerminalClass::Word
    }

    /// Returns `true` if this keyword may be reported to the grammar as a
    /// lookahead variant.
    pub fn requires_lookahead(self) -> bool {
        LOOKAHEAD_KEYWORDS.contains(&self)
    }

    /// Looks up the terminal for a keyword lexeme, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not a keyword this crate knows
    /// about, including lookahead variant names.
    pub fn keyword(text: &str) -> Option<SqlTokenId> {
        KEYWORD_TOKEN_IDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(text))
            .map(|(_, id)| *id)
    }

    /// Resolves a symbolic name as produced by [`SqlTokenId::name`].
    ///
    /// Accepts `EOF`, any named terminal (case-sensitive) and any single
    /// ASCII punctuation character.
    pub fn from_name(name: &str) -> Option<SqlTokenId> {
        if name == "EOF" {
            return Some(SqlTokenId::EOF);
        }
        if let [ch] = name.as_bytes()
            && ch.is_ascii_punctuation()
        {
            return Some(SqlTokenId::punct(*ch));
        }
        NAMED_TOKEN_IDS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, id)| *id)
    }

    /// Returns a human-readable name for this identity.
    ///
    /// Named terminals render as their constant name, punctuation as the
    /// character itself and anything else as its decimal code.
    pub fn name(self) -> Cow<'static, str> {
        match self.class() {
            TerminalClass::EndOfInput => Cow::Borrowed("EOF"),
            TerminalClass::Punctuation(ch) => Cow::Owned((ch as char).to_string()),
            TerminalClass::Word | TerminalClass::Unknown => NAMED_TOKEN_IDS
                .iter()
                .find(|(_, id)| *id == self)
                .map(|(name, _)| Cow::Borrowed(*name))
                .unwrap_or_else(|| Cow::Owned(self.0.to_string())),
        }
    }
}

impl std::fmt::Display for SqlTokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl serde::Serialize for SqlTokenId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de> serde::Deserialize<'de> for SqlTokenId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum RawTokenId {
            Code(i32),
            Name(String),
        }

        match RawTokenId::deserialize(deserializer)? {
            RawTokenId::Code(code) => Ok(SqlTokenId::new(code)),
            RawTokenId::Name(name) => {
                if let Ok(code) = name.parse::<i32>() {
                    return Ok(SqlTokenId::new(code));
                }
                SqlTokenId::from_name(&name).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown token id `{name}`"))
                })
            },
        }
    }
}
