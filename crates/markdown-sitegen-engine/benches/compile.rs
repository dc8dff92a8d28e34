use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::compile_document;
use pulldown_cmark::{Parser, html};
mod common;

fn bench_compile_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("compile_document_render", |b| {
        b.iter(|| {
            let root = compile_document(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(root.render().unwrap());
        });
    });

    group.bench_function("pulldown_cmark_baseline", |b| {
        b.iter(|| {
            let mut out = String::new();
            html::push_html(&mut out, Parser::new(std::hint::black_box(&content)));
            std::hint::black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compile_and_render);
criterion_main!(benches);
