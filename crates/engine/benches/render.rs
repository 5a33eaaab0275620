use criterion::{Criterion, criterion_group, criterion_main};
use neko_engine::config::StreamConfig;
use neko_engine::processor::process_stream;
use neko_engine::renderer::LineRenderer;
use std::hint::black_box;

fn sample_input() -> Vec<u8> {
    let mut input = Vec::new();
    for i in 0..2000 {
        input.extend_from_slice(format!("line {i}\tvalue = {}\n", i * 7).as_bytes());
        if i % 10 == 0 {
            input.push(b'\n');
        }
    }
    input
}

fn benchmark_render(c: &mut Criterion) {
    let input = sample_input();

    c.bench_function("render_plain", |b| {
        b.iter(|| {
            let mut renderer = LineRenderer::new(StreamConfig::default());
            let mut out = Vec::with_capacity(input.len() * 2);
            process_stream(black_box(input.as_slice()), "bench", &mut renderer, &mut out).unwrap();
            black_box(out);
        })
    });

    let all_options = StreamConfig {
        number_nonblank: true,
        show_ends: true,
        show_tabs: true,
        center: true,
        use_color: true,
        ..StreamConfig::default()
    };
    c.bench_function("render_all_options", |b| {
        b.iter(|| {
            let mut renderer = LineRenderer::new(all_options);
            let mut out = Vec::with_capacity(input.len() * 16);
            process_stream(black_box(input.as_slice()), "bench", &mut renderer, &mut out).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, benchmark_render);
criterion_main!(benches);
