use criterion::{black_box, criterion_group, criterion_main, Criterion};
use toolkit_versioning::{compare, increment, parse};

fn range_ok_inputs() -> Vec<&'static str> {
    vec![
        "1.2.3",
        ">=1.2.3",
        ">1.2.3 <2.3.4",
        "1.2.3 - 2.3.4",
        "- >=1.2.3",
        "1.0+",
        "*",
    ]
}

fn parse_range_ok(inputs: &[&str]) {
    for input in inputs {
        let res = parse(input);
        assert!(res.is_ok());
    }
}

fn increment_inputs() -> Vec<&'static str> {
    vec!["1.2.3", "1.2.3pre1", "1.2.*", "1.2.-1", "1.0+"]
}

fn increment_all(inputs: &[&str]) {
    for input in inputs {
        let _ = increment(input);
    }
}

fn compare_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("1.2.3", "1.2.3.1"),
        ("1.0pre1", "1.0"),
        ("1.0+", "1.1pre"),
        ("1.2.*", "1.2.3"),
        ("10.0.1.2", "10.0.1.2"),
    ]
}

fn compare_all(pairs: &[(&str, &str)]) {
    for (a, b) in pairs {
        let _ = compare(a, b);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_range_ok", |b| {
        b.iter(|| parse_range_ok(black_box(&range_ok_inputs())))
    });
    c.bench_function("increment", |b| {
        b.iter(|| increment_all(black_box(&increment_inputs())))
    });
    c.bench_function("compare", |b| {
        b.iter(|| compare_all(black_box(&compare_pairs())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
