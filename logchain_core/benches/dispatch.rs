use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use logchain_core::mocks::NullSink;
use logchain_core::{Category, Chain, LogMessage, Stage};

// Warnings travel furthest in the standard order without touching the disk.
pub fn bench_dispatch(c: &mut Criterion) {
    let chain = Chain::builder()
        .with_stages(Stage::STANDARD)
        .with_stdout(Arc::new(NullSink))
        .try_build()
        .expect("build chain");
    let forwarded = LogMessage::new(Category::Warning, "bench warning");
    let raised = LogMessage::new(Category::Unknown, "bench unknown");

    c.bench_function("dispatch_warning", |b| {
        b.iter(|| chain.dispatch(black_box(&forwarded)))
    });
    c.bench_function("dispatch_unknown_tail", |b| {
        b.iter(|| chain.dispatch(black_box(&raised)))
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
