extern crate validator;

use lexer::{tokenize, Arena};

const STATEMENTS: [&str; 3] = [
    "SELECT a, b FROM t;",
    "SELECT a FROM t WHERE a = 1 AND b = 'x' OR c = \"y\";",
    "INSERT INTO users VALUES (1, 'John', 20), (2, 'Doe', 30);",
];

fn main() {
    divan::main();
}

#[divan::bench(args = STATEMENTS)]
fn tokenize_only(sql: &str) {
    let arena = Arena::for_input(sql);
    let tokens = tokenize(divan::black_box(sql), &arena).unwrap();

    divan::black_box(tokens.len());
}

#[divan::bench(args = STATEMENTS)]
fn tokenize_and_validate(sql: &str) {
    let arena = Arena::for_input(sql);
    let tokens = tokenize(divan::black_box(sql), &arena).unwrap();
    let result = validator::validate(&tokens);

    divan::black_box(result.is_ok());
}

#[divan::bench(args = [1, 8, 64])]
fn validate_repeated_mismatches(n: usize) {
    let sql = "; ".repeat(n);
    let arena = Arena::for_input(&sql);
    let tokens = tokenize(&sql, &arena).unwrap();

    let result = validator::validate(divan::black_box(&tokens));

    assert_eq!(result.error_count(), n + 1);
}
