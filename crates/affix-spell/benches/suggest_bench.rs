// Criterion benchmarks for affix-spell.
//
// Uses the sample dictionary in test-data/. Set AFFIX_DICT_PATH to a
// directory holding a larger `<lang>.aff`/`<lang>.dic` pair and AFFIX_LANG
// to its name to benchmark against a real dictionary instead.
//
// Run:
//   cargo bench -p affix-spell
//   AFFIX_DICT_PATH=/usr/share/hunspell AFFIX_LANG=en_US cargo bench -p affix-spell

use std::path::PathBuf;

use affix_spell::{Spellchecker, SuggestOptions};
use criterion::{Criterion, criterion_group, criterion_main};

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn load_dictionary(options: SuggestOptions) -> Spellchecker {
    let (dir, lang) = match std::env::var("AFFIX_DICT_PATH") {
        Ok(dir) => (
            PathBuf::from(dir),
            std::env::var("AFFIX_LANG").unwrap_or_else(|_| "en_US".to_string()),
        ),
        Err(_) => (
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data"),
            "sample".to_string(),
        ),
    };
    let read = |ext: &str| {
        let path = dir.join(format!("{lang}.{ext}"));
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
    };

    let mut checker = Spellchecker::with_options(options);
    checker
        .parse(&read("aff"), &read("dic"))
        .expect("dictionary parses");
    checker
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

const CORRECT: &[&str] = &[
    "cat", "Cat", "CAT", "hello", "Hello", "Paris", "PARIS", "world", "spelling", "21st",
];

const MISSPELLED: &[&str] = &["cta", "wrold", "speling", "helo", "crad"];

fn bench_check(c: &mut Criterion) {
    let checker = load_dictionary(SuggestOptions::default());
    c.bench_function("check_10_words", |b| {
        b.iter(|| {
            for word in CORRECT {
                std::hint::black_box(checker.check(word).ok());
            }
        });
    });
}

fn bench_suggest_uncached(c: &mut Criterion) {
    let checker = load_dictionary(SuggestOptions {
        cache_capacity: 0,
        ..SuggestOptions::default()
    });
    c.bench_function("suggest_5_misspelled_uncached", |b| {
        b.iter(|| {
            for word in MISSPELLED {
                std::hint::black_box(checker.suggest(word).ok());
            }
        });
    });
}

fn bench_suggest_cached(c: &mut Criterion) {
    let checker = load_dictionary(SuggestOptions::default());
    c.bench_function("suggest_5_misspelled_cached", |b| {
        b.iter(|| {
            for word in MISSPELLED {
                std::hint::black_box(checker.suggest(word).ok());
            }
        });
    });
}

fn bench_replacement_hit(c: &mut Criterion) {
    let checker = load_dictionary(SuggestOptions {
        cache_capacity: 0,
        ..SuggestOptions::default()
    });
    c.bench_function("suggest_replacement_hit", |b| {
        b.iter(|| std::hint::black_box(checker.suggest("fone").ok()));
    });
}

criterion_group!(
    benches,
    bench_check,
    bench_suggest_uncached,
    bench_suggest_cached,
    bench_replacement_hit
);
criterion_main!(benches);
