//! Tests for the `retag` command's dump loading and rendering.

use crate::commands::retag::render_dump;
use crate::commands::retag::retag_file;
use libsqllex::SqlParseErrorKind;
use libsqllex::TokenDump;

const ORDER_BY_INDEX_DUMP: &str = r#"{
    "sql": "SELECT * FROM t ORDER BY INDEX t@idx",
    "tokens": [
        { "id": "SELECT", "pos": 0, "text": "SELECT" },
        { "id": "*", "pos": 7, "text": "*" },
        { "id": "FROM", "pos": 9, "text": "FROM" },
        { "id": "IDENT", "pos": 14, "text": "t" },
        { "id": "ORDER", "pos": 16, "text": "ORDER" },
        { "id": "BY", "pos": 22, "text": "BY" },
        { "id": "INDEX", "pos": 25, "text": "INDEX" },
        { "id": "IDENT", "pos": 31, "text": "t" },
        { "id": "@", "pos": 32, "text": "@" },
        { "id": "IDENT", "pos": 33, "text": "idx" }
    ]
}"#;

/// Verifies that every token is listed and the rewritten one shows both
/// identities.
#[test]
fn render_lists_every_token() {
    let dump = TokenDump::from_json(ORDER_BY_INDEX_DUMP).unwrap();
    let report = render_dump(&dump, false).unwrap();

    assert_eq!(report.num_tokens, 10);
    assert_eq!(report.num_retagged, 1);

    let lines: Vec<&str> = report.text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "1:1     \"SELECT\"        SELECT");
    assert_eq!(lines[6], "1:26    \"INDEX\"         INDEX -> INDEX_AFTER_ORDER_BY_BEFORE_AT");
}

/// Verifies that `--only-retagged` drops the unchanged tokens but still
/// counts them.
#[test]
fn render_only_retagged() {
    let dump = TokenDump::from_json(ORDER_BY_INDEX_DUMP).unwrap();
    let report = render_dump(&dump, true).unwrap();

    assert_eq!(report.num_tokens, 10);
    assert_eq!(report.text.lines().count(), 1);
    assert!(report.text.ends_with("INDEX -> INDEX_AFTER_ORDER_BY_BEFORE_AT"));
}

/// Verifies that a scanner error token surfaces as the lexical diagnostic.
#[test]
fn render_reports_scanner_errors() {
    let dump = TokenDump::from_json(
        r#"{"sql": "SELECT 'x", "tokens": [
            {"id": "SELECT", "pos": 0, "text": "SELECT"},
            {"id": "ERROR", "pos": 7, "text": "unterminated string"}
        ]}"#,
    )
    .unwrap();

    let err = render_dump(&dump, false).unwrap_err();
    assert_eq!(err.kind(), &SqlParseErrorKind::Lexical);
    assert_eq!(err.detail(), Some("source SQL:\nSELECT 'x\n       ^"));
}

/// Verifies loading from disk, and that failures name the file.
#[test]
fn retag_file_reads_and_reports() {
    let dir = std::env::temp_dir().join(format!("sqllex-retag-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    std::fs::write(&good, ORDER_BY_INDEX_DUMP).unwrap();
    assert_eq!(retag_file(&good, true).unwrap().num_retagged, 1);

    let help = dir.join("help.json");
    std::fs::write(
        &help,
        r#"{"sql": "SELECT ??", "tokens": [
            {"id": "SELECT", "pos": 0, "text": "SELECT"},
            {"id": "HELPTOKEN", "pos": 7, "text": "??"}
        ]}"#,
    )
    .unwrap();
    let err = format!("{:#}", retag_file(&help, false).unwrap_err());
    assert!(err.starts_with("Failed to lex "));
    assert!(err.contains("at or near \"??\": syntax error"));

    let missing = retag_file(&dir.join("missing.json"), false).unwrap_err();
    assert!(missing.to_string().contains("missing.json"));

    std::fs::remove_dir_all(&dir).unwrap();
}
