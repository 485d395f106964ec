use chatmark_engine::{NoCopies, RenderCache, RenderOptions, highlight, render_message};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_message(sections: usize) -> String {
    let base = "**1. Building the layout:**\n\nWhat makes a **Good** grid? See [docs](https://example.com) and `grid-template`.\n\n* First point\n  * Nested point\n* Second point\n\n---\n\n```python\ndef main():\n    # entry point\n    print('hello')  # greet\n    return None\n```\n\n";
    base.repeat(sections)
}

fn bench_render_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let message = generate_message(100);
    let options = RenderOptions::default();
    group.bench_function("render_message", |b| {
        b.iter(|| {
            let blocks = render_message(std::hint::black_box(&message), 0, &NoCopies, &options);
            std::hint::black_box(blocks);
        });
    });

    group.bench_function("render_cache_hit", |b| {
        let mut cache = RenderCache::default();
        cache.render(&message, 0, &NoCopies, &options);
        b.iter(|| {
            let blocks = cache.render(std::hint::black_box(&message), 0, &NoCopies, &options);
            std::hint::black_box(blocks);
        });
    });

    group.finish();
}

fn bench_highlight_large_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.sample_size(10);

    let code = "const x = \"a\"; // it's a comment with 'quotes'\n".repeat(1000);
    let options = RenderOptions::default();
    group.bench_function("javascript_1000_lines", |b| {
        b.iter(|| {
            let tokens = highlight(std::hint::black_box(&code), "javascript", &options);
            std::hint::black_box(tokens);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_message, bench_highlight_large_block);
criterion_main!(benches);
