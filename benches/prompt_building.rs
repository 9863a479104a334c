//! Benchmarks for the relay's per-request CPU work
//!
//! This benchmark measures:
//! - Request body parsing into a word list
//! - Prompt and message construction
//! - Chat-completion request serialization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use word_diary::relay::{parse_words, prompt};
use word_diary::upstream::{ChatCompletionRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use word_diary::WordCount;

const SAMPLE_WORDS: [&str; 7] = ["海", "スイカ", "花火", "夕立", "風鈴", "かき氷", "蝉"];

fn sample(count: usize) -> Vec<String> {
    SAMPLE_WORDS[..count].iter().map(|s| s.to_string()).collect()
}

fn bench_parse_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_words");
    for count in WordCount::ALL {
        let body = serde_json::to_vec(&serde_json::json!({ "words": sample(count.get()) }))
            .expect("sample body");
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| parse_words(black_box(body)))
        });
    }
    group.finish();
}

fn bench_build_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_messages");
    for count in WordCount::ALL {
        let words = sample(count.get());
        group.bench_with_input(BenchmarkId::from_parameter(count), &words, |b, words| {
            b.iter(|| prompt::build_messages(black_box(words)))
        });
    }
    group.finish();
}

fn bench_request_serialization(c: &mut Criterion) {
    let messages = prompt::build_messages(&sample(7));
    c.bench_function("serialize_completion_request", |b| {
        b.iter(|| {
            let request = ChatCompletionRequest {
                model: DEFAULT_MODEL,
                messages: black_box(&messages),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            };
            serde_json::to_vec(&request)
        })
    });
}

criterion_group!(
    benches,
    bench_parse_words,
    bench_build_messages,
    bench_request_serialization
);
criterion_main!(benches);
