//! Benchmarks for commit-time field validation.
//!
//! The validators compile their patterns on each call, so these benchmarks
//! capture the full cost of a field commit as the UI pays it.
//! Note: the validation rules live in the binary crate, so the rules are
//! mirrored here against the same patterns.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const NAME_PATTERN: &str = r"^[a-zA-Z ]+$";
const MOBILE_PATTERN: &str = r"^[0-9]+$";
const EMAIL_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9.]{1,10}@[a-zA-Z]{2,20}\.[a-zA-Z]{2,10}$";

fn validate(pattern: &str, max_length: Option<usize>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if !Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(true) {
        return false;
    }
    match max_length {
        Some(max) => value.chars().count() <= max,
        None => true,
    }
}

fn bench_name_validation(c: &mut Criterion) {
    c.bench_function("validate_name", |b| {
        b.iter(|| validate(NAME_PATTERN, Some(20), black_box("Jane Doe")))
    });
}

fn bench_mobile_validation(c: &mut Criterion) {
    c.bench_function("validate_mobile", |b| {
        b.iter(|| validate(MOBILE_PATTERN, Some(10), black_box("1234567890")))
    });
}

fn bench_email_validation(c: &mut Criterion) {
    c.bench_function("validate_email", |b| {
        b.iter(|| validate(EMAIL_PATTERN, None, black_box("john.doe3@gmail.com")))
    });
}

criterion_group!(
    benches,
    bench_name_validation,
    bench_mobile_validation,
    bench_email_validation
);
criterion_main!(benches);
