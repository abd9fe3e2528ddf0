use criterion::{criterion_group, criterion_main, Criterion};
use elderease_tutorials::services::catalog::CHAT_RESULT_LIMIT;
use elderease_tutorials::services::{ChatAssistant, TutorialCatalog};
use std::hint::black_box;
use std::sync::Arc;

fn benchmark_search(c: &mut Criterion) {
    let catalog = TutorialCatalog::builtin().expect("Failed to load catalog");

    let mut group = c.benchmark_group("catalog_search");

    group.bench_function("substring_hit", |b| {
        b.iter(|| catalog.search(black_box("meeting"), CHAT_RESULT_LIMIT))
    });

    // No substring match, so the keyword pass runs too
    group.bench_function("keyword_fallback", |b| {
        b.iter(|| catalog.search(black_box("how do I post on facebook"), CHAT_RESULT_LIMIT))
    });

    group.bench_function("no_match", |b| {
        b.iter(|| catalog.search(black_box("qqqq zzzz xxxx"), CHAT_RESULT_LIMIT))
    });

    group.bench_function("suggestions", |b| {
        b.iter(|| catalog.suggestions(black_box("sha")))
    });

    group.finish();
}

fn benchmark_assistant(c: &mut Criterion) {
    let assistant = ChatAssistant::new(Arc::new(
        TutorialCatalog::builtin().expect("Failed to load catalog"),
    ));

    let mut group = c.benchmark_group("assistant_reply");

    group.bench_function("glossary_question", |b| {
        b.iter(|| assistant.reply(black_box("What does no cap mean?")))
    });

    group.bench_function("tutorial_question", |b| {
        b.iter(|| assistant.reply(black_box("How to send message on Instagram?")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_search, benchmark_assistant);
criterion_main!(benches);
