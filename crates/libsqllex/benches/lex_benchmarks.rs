mod fixtures;

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libsqllex::SqlLexer;
use libsqllex::token::SqlToken;

fn drain(sql: &str, tokens: Vec<SqlToken>) {
    let mut lexer = SqlLexer::<()>::new(sql, tokens);
    loop {
        let token = lexer.lex();
        if token.is_eof() {
            break;
        }
        black_box(token);
    }
}

// ─── Group 1: Single Statements ──────────────────────────

fn single_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_statement");

    let inputs: &[(&str, &str)] = &[
        ("simple_select", fixtures::SIMPLE_SELECT),
        ("lookahead_heavy", fixtures::LOOKAHEAD_HEAVY),
        ("create_table", fixtures::CREATE_TABLE),
    ];

    for &(label, sql) in inputs {
        let tokens = fixtures::scan(sql);
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("lex", label),
            &tokens,
            |b, tokens| {
                b.iter(|| drain(sql, tokens.clone()))
            },
        );
    }

    group.finish();
}

// ─── Group 2: Long Inputs ────────────────────────────────

fn long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("long_input");

    for n in [10, 100, 1000] {
        let sql = fixtures::many_statements(n);
        let tokens = fixtures::scan(&sql);
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("lex", n),
            &tokens,
            |b, tokens| {
                b.iter(|| drain(&sql, tokens.clone()))
            },
        );
    }

    group.finish();
}

// ─── Group 3: Reused Lexer ───────────────────────────────

fn reused_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("reused_lexer");
    let tokens = fixtures::scan(fixtures::LOOKAHEAD_HEAVY);

    group.bench_function("init_lex_cleanup", |b| {
        let mut lexer = SqlLexer::<()>::default();
        b.iter(|| {
            lexer.init(fixtures::LOOKAHEAD_HEAVY, tokens.clone());
            while !lexer.lex().is_eof() {}
            lexer.cleanup();
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    single_statement,
    long_input,
    reused_lexer,
);
criterion_main!(benches);
