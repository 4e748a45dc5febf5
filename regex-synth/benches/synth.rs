//! cargo bench --bench synth
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use regex_synth::{
    dsl::*,
    synth::{Flags, RegexSynth},
    synthesis::{CodepointSet, IntegerRange, TrieExpression},
    Expression,
};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("range_1_25675", |b| {
        b.iter(|| IntegerRange::new(black_box(1), black_box(25675)).unwrap().to_regex())
    });
    c.bench_function("range_u64_max", |b| {
        b.iter(|| {
            IntegerRange::new(black_box(0), black_box(u64::MAX))
                .unwrap()
                .to_regex()
        })
    });
    c.bench_function("range_collapse_repeats", |b| {
        b.iter(|| {
            IntegerRange::builder(black_box(1), black_box(25675))
                .collapse_repeats(true)
                .build()
                .unwrap()
                .to_regex()
        })
    });

    c.bench_function("trie_months", |b| {
        b.iter(|| black_box(MONTHS).into_iter().collect::<TrieExpression>().to_regex())
    });
    let words: Vec<String> = (0..1000).map(|i| format!("word{i}")).collect();
    c.bench_function("trie_1000_words", |b| {
        b.iter(|| words.iter().collect::<TrieExpression>().to_regex())
    });

    c.bench_function("set_graphical", |b| b.iter(|| graphical().to_regex()));
    c.bench_function("set_algebra", |b| {
        b.iter(|| {
            let mut set = CodepointSet::from_range(black_box(0x20), black_box(0x2FF)).unwrap();
            set.subtract(&alphanumeric())
                .union(&CodepointSet::from_range(0x1F300, 0x1F5FF).unwrap())
                .intersect(&negated(punctuation()));
            set.to_regex()
        })
    });

    let date = RegexSynth::new(&[&exact_line_match(&[
        &integer_range(2012, 2020).unwrap(),
        &literal("-"),
        &capture_group(&[&either_strings(MONTHS)]),
        &literal("-"),
        &capture_group(&[&leading_zero(integer_range(1, 31).unwrap())]),
    ])]);
    c.bench_function("compile_date", |b| {
        b.iter(|| date.compile(black_box(Flags::empty())).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
