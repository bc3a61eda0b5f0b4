use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use seam::buffer::GapBuffer;
use seam::screen::Frame;
use seam::viewport::Viewport;

fn setup_buf(lines: usize) -> GapBuffer {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str("fn example() {\n\tlet value = ");
        text.push_str(&i.to_string());
        text.push_str(";\n}\n");
    }
    let mut buf = GapBuffer::new(text.len() + 1024).unwrap();
    buf.load(text.as_bytes());
    buf
}

fn viewport_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_refresh");

    // Steady state: cursor inside the page, no scrolling
    group.bench_function("no_scroll", |b| {
        let buf = setup_buf(500);
        let mut viewport = Viewport::new(23, 80);
        let mut frame = Frame::new(23, 80);
        viewport.refresh(&buf, &mut frame);
        b.iter(|| {
            viewport.refresh(black_box(&buf), &mut frame);
            black_box(viewport.cursor_row());
        })
    });

    // Every refresh repages from a far cursor position
    group.bench_function("repage_far_jump", |b| {
        let mut buf = setup_buf(500);
        let len = buf.len();
        let mut near = Viewport::new(23, 80);
        let mut frame = Frame::new(23, 80);
        buf.set_cursor(0);
        near.refresh(&buf, &mut frame);
        b.iter_batched(
            || near.clone(),
            |mut viewport| {
                buf.set_cursor(black_box(len));
                viewport.refresh(&buf, &mut frame);
                black_box(viewport.page_start());
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");

    // Full grid of tab-heavy content
    group.bench_function("tabbed_page", |b| {
        let mut text = String::new();
        for _ in 0..30 {
            text.push_str("\t\tindented\tcolumns\there\n");
        }
        let mut buf = GapBuffer::new(4096).unwrap();
        buf.load(text.as_bytes());
        let mut viewport = Viewport::new(23, 80);
        let mut frame = Frame::new(23, 80);
        b.iter(|| {
            viewport.refresh(black_box(&buf), &mut frame);
            black_box(frame.cell(0, 0));
        })
    });

    // One overlong line wrapping across the whole grid
    group.bench_function("wrapped_line", |b| {
        let text = "x".repeat(23 * 80);
        let mut buf = GapBuffer::new(text.len() + 64).unwrap();
        buf.load(text.as_bytes());
        let mut viewport = Viewport::new(23, 80);
        let mut frame = Frame::new(23, 80);
        b.iter(|| {
            viewport.refresh(black_box(&buf), &mut frame);
            black_box(viewport.page_end());
        })
    });

    group.finish();
}

criterion_group!(benches, viewport_refresh, render_pass);
criterion_main!(benches);
