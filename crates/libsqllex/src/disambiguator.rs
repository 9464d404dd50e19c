//! Lookahead rules that let a one-token-lookahead grammar parse SQL
//! constructs which need more context than that.
//!
//! Each rule looks at the token under the cursor and its bounded
//! neighbourhood and may substitute a more specific terminal for it. The
//! grammar then matches the substituted terminal (e.g. `NOT_LA` instead of
//! `NOT` in `a NOT LIKE b`) and never needs a second token of lookahead.

use crate::MAX_LOOKAHEAD;
use crate::SqlTokenCursor;
use crate::token::SqlTokenId;

/// How far past `INDEX` the `ORDER BY INDEX <object name> @ <index>` rule
/// scans for the `@`. An object name is at most `a.b.c` (five tokens), so
/// the `@` is at most six tokens away.
pub const ORDER_BY_INDEX_SCAN_LIMIT: usize = MAX_LOOKAHEAD;

/// Returns the identity under which the token at the cursor's current
/// position is reported to the grammar.
///
/// Rules are evaluated in a fixed order and the first one that matches
/// decides; if none matches, the token's own identity is returned. The
/// cursor is only read, never moved.
pub fn disambiguate(cursor: &SqlTokenCursor) -> SqlTokenId {
    let current = cursor.peek(0).id;
    let retagged = match current {
        SqlTokenId::NOTHING => nothing_after_returning(cursor),
        SqlTokenId::INDEX => index_keyword(cursor),
        SqlTokenId::AS => as_of_system(cursor),
        SqlTokenId::NOT => not_before_comparison(cursor),
        SqlTokenId::GENERATED => generated_column(cursor),
        SqlTokenId::WITH => with_before_modifier(cursor),
        SqlTokenId::NULLS => nulls_ordering(cursor),
        SqlTokenId::RESET => keyword_before_all(cursor, SqlTokenId::RESET_ALL),
        SqlTokenId::ROLE => keyword_before_all(cursor, SqlTokenId::ROLE_ALL),
        SqlTokenId::USER => keyword_before_all(cursor, SqlTokenId::USER_ALL),
        SqlTokenId::ON => on_referential_action(cursor),
        SqlTokenId::TENANT => keyword_before_all(cursor, SqlTokenId::TENANT_ALL),
        SqlTokenId::CLUSTER => keyword_before_all(cursor, SqlTokenId::CLUSTER_ALL),
        SqlTokenId::SET => set_tracing(cursor),
        _ => None,
    };
    retagged.unwrap_or(current)
}

/// `INSERT ... RETURNING NOTHING`
fn nothing_after_returning(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    (cursor.peek(-1).id == SqlTokenId::RETURNING).then_some(SqlTokenId::NOTHING_AFTER_RETURNING)
}

/// Separates the `INDEX` keyword from a column that happens to be named
/// `index`.
///
/// ```text
/// CREATE TABLE t (index a)         -- column "index" of type "a"
/// CREATE TABLE t (index (a))       -- INDEX_BEFORE_PAREN
/// CREATE TABLE t (index i (a))     -- INDEX_BEFORE_NAME_THEN_PAREN
/// SELECT ... ORDER BY index        -- column "index"
/// SELECT ... ORDER BY index t@idx  -- INDEX_AFTER_ORDER_BY_BEFORE_AT
/// ```
///
/// An index definition always reaches a `(` after at most a name, with no
/// `@` in between; the `ORDER BY` form always reaches an `@` after an
/// object name. The two shapes are mutually exclusive, so the paren rules
/// are checked first and the `@` scan only runs when they fail.
fn index_keyword(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    let prev = cursor.peek(-1).id;
    let pprev = cursor.peek(-2).id;
    let next = cursor.peek(1).id;
    let second = cursor.peek(2).id;

    let after_comma_or_paren = prev.is_punct(b',') || prev.is_punct(b'(');
    let after_comma_or_options = prev.is_punct(b',') || prev == SqlTokenId::OPTIONS;
    let after_comma_or_paren_then_inverted = prev == SqlTokenId::INVERTED
        && (pprev.is_punct(b',') || pprev.is_punct(b'('));
    let followed_by_paren = next.is_punct(b'(');
    let followed_by_word_then_paren = next.is_word() && second.is_punct(b'(');

    // CREATE ... (INDEX (
    // CREATE ... (x INT, INVERTED INDEX (
    // SCRUB ... WITH OPTIONS INDEX (
    if followed_by_paren
        && (after_comma_or_paren || after_comma_or_options || after_comma_or_paren_then_inverted)
    {
        return Some(SqlTokenId::INDEX_BEFORE_PAREN);
    }

    // CREATE ... (INDEX abc (
    // CREATE ... (x INT, INVERTED INDEX abc (
    if followed_by_word_then_paren
        && (after_comma_or_paren || after_comma_or_paren_then_inverted)
    {
        return Some(SqlTokenId::INDEX_BEFORE_NAME_THEN_PAREN);
    }

    // ORDER BY INDEX <objname> @
    // ORDER BY a, b, INDEX <objname> @
    let after_comma_or_order_by = prev.is_punct(b',')
        || (prev == SqlTokenId::BY && pprev == SqlTokenId::ORDER);
    if after_comma_or_order_by && at_sign_after_object_name(cursor) {
        return Some(SqlTokenId::INDEX_AFTER_ORDER_BY_BEFORE_AT);
    }

    None
}

/// Scans the tokens after `INDEX` for an object name (`name`, `name.name`
/// or `name.name.name`) terminated by `@`.
///
/// Any code of 255 or above counts as part of a name; any lower code other
/// than `.` and `@` ends the scan.
fn at_sign_after_object_name(cursor: &SqlTokenCursor) -> bool {
    for offset in 1..=ORDER_BY_INDEX_SCAN_LIMIT {
        let id = cursor.peek(offset as isize).id;
        if id.is_punct(b'@') {
            // `@` directly after INDEX has no object name before it.
            return offset > 1;
        }
        if id.code() < 255 && !id.is_punct(b'.') {
            return false;
        }
    }
    false
}

/// `AS OF SYSTEM TIME`
fn as_of_system(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    let matched = cursor.peek(1).id == SqlTokenId::OF && cursor.peek(2).id == SqlTokenId::SYSTEM;
    matched.then_some(SqlTokenId::AS_LA)
}

/// `NOT BETWEEN`, `NOT IN`, `NOT LIKE`, `NOT ILIKE`, `NOT SIMILAR`
fn not_before_comparison(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match cursor.peek(1).id {
        SqlTokenId::BETWEEN
        | SqlTokenId::IN
        | SqlTokenId::LIKE
        | SqlTokenId::ILIKE
        | SqlTokenId::SIMILAR => Some(SqlTokenId::NOT_LA),
        _ => None,
    }
}

/// `GENERATED ALWAYS AS ...` and `GENERATED BY DEFAULT AS ...`
fn generated_column(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match cursor.peek(1).id {
        SqlTokenId::ALWAYS => Some(SqlTokenId::GENERATED_ALWAYS),
        SqlTokenId::BY => Some(SqlTokenId::GENERATED_BY_DEFAULT),
        _ => None,
    }
}

/// `WITH TIME ZONE`, `WITH ORDINALITY`, `WITH BUCKET_COUNT`
fn with_before_modifier(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match cursor.peek(1).id {
        SqlTokenId::TIME | SqlTokenId::ORDINALITY | SqlTokenId::BUCKET_COUNT => {
            Some(SqlTokenId::WITH_LA)
        },
        _ => None,
    }
}

/// `NULLS FIRST`, `NULLS LAST`
fn nulls_ordering(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match cursor.peek(1).id {
        SqlTokenId::FIRST | SqlTokenId::LAST => Some(SqlTokenId::NULLS_LA),
        _ => None,
    }
}

/// `RESET ALL`, `ROLE ALL`, `USER ALL`, `TENANT ALL`, `CLUSTER ALL`
fn keyword_before_all(cursor: &SqlTokenCursor, retagged: SqlTokenId) -> Option<SqlTokenId> {
    (cursor.peek(1).id == SqlTokenId::ALL).then_some(retagged)
}

/// `ON DELETE ...` and `ON UPDATE {NO ACTION | RESTRICT | CASCADE | SET ...}`
///
/// `ON UPDATE` followed by anything else (e.g. `ON UPDATE now()` in a
/// column definition) keeps the plain `ON`.
fn on_referential_action(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match (cursor.peek(1).id, cursor.peek(2).id) {
        (SqlTokenId::DELETE, _) => Some(SqlTokenId::ON_LA),
        (
            SqlTokenId::UPDATE,
            SqlTokenId::NO | SqlTokenId::RESTRICT | SqlTokenId::CASCADE | SqlTokenId::SET,
        ) => Some(SqlTokenId::ON_LA),
        _ => None,
    }
}

/// `SET TRACING ...` and `SET SESSION TRACING ...`, but not
/// `SET tracing.custom = ...` where `tracing` starts a dotted variable
/// name. The dot is recognized by its lexeme, not its identity.
fn set_tracing(cursor: &SqlTokenCursor) -> Option<SqlTokenId> {
    match cursor.peek(1).id {
        SqlTokenId::TRACING if cursor.peek(2).text != "." => Some(SqlTokenId::SET_TRACING),
        SqlTokenId::SESSION
            if cursor.peek(2).id == SqlTokenId::TRACING && cursor.peek(3).text != "." =>
        {
            Some(SqlTokenId::SET_TRACING)
        },
        _ => None,
    }
}
