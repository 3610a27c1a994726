use criterion::{criterion_group, criterion_main, Criterion};
use qna_core::tokenizer::tokenize;
use qna_core::TfIdfIndex;

const TEXT: &str = "Does the organisation maintain an information security policy? \
    Yes. The policy is reviewed annually by the CISO, approved by the board, and \
    communicated to all staff during onboarding (see section 4.2: access-control).";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_answer", |b| b.iter(|| tokenize(TEXT)));
}

fn bench_index(c: &mut Criterion) {
    c.bench_function("index_100_and_search", |b| {
        b.iter(|| {
            let mut idx = TfIdfIndex::new();
            for i in 0..100 {
                idx.add_document(format!("rec{i}"), &format!("{TEXT} item{i}"));
            }
            idx.search("security policy onboarding", 10)
        })
    });
}

criterion_group!(benches, bench_tokenize, bench_index);
criterion_main!(benches);
