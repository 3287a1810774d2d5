use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_core::tokenizer::tokenize;
use tfidf_core::{Document, PipelineConfig, TfIdfIndex};

fn synthetic_corpus(num_docs: usize) -> Vec<Document> {
    (0..num_docs)
        .map(|i| {
            let text: String = (0..200).map(|j| format!("w{} ", (i * 31 + j * 7) % 5_000)).collect();
            Document::from_text(format!("doc{i}"), &text)
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = "Four score and seven years ago our fathers brought forth ".repeat(200);
    c.bench_function("tokenize_paragraph", |b| b.iter(|| tokenize(&text)));
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000);
    let config = PipelineConfig::default();
    c.bench_function("build_index_1k_docs", |b| b.iter(|| TfIdfIndex::build(&corpus, &config).unwrap()));
}

fn bench_best_match(c: &mut Criterion) {
    let index = TfIdfIndex::build(&synthetic_corpus(1_000), &PipelineConfig::default()).unwrap();
    c.bench_function("best_match_1k_docs", |b| b.iter(|| index.best_match("w42").unwrap()));
}

criterion_group!(benches, bench_tokenize, bench_build, bench_best_match);
criterion_main!(benches);
