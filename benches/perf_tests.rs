use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use log_accumulator::LogAccumulator;
use std::fs;
use tempfile::tempdir;

const ENTRY_COUNT: usize = 10_000;

fn populated_log() -> LogAccumulator {
    let mut log = LogAccumulator::new();
    log.register_type("error", "^ERROR: ");
    log.register_type("warn", "^WARN: ");
    log.register_type("method", r"^In method \w+: ");
    log.set_include_line_numbers(true);

    for i in 0..ENTRY_COUNT {
        log.set_current_function(format!("worker_{}", i % 8));
        match i % 4 {
            0 => log.add(format!("ERROR: request {} failed", i)),
            1 => log.add(format!("WARN: request {} slow", i)),
            2 => log.add(format!("In method handle: request {} done", i)),
            _ => log.add(format!("request {} ok", i)),
        }
    }
    log
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add_10k", |b| {
        b.iter_batched(
            LogAccumulator::new,
            |mut log| {
                for i in 0..ENTRY_COUNT {
                    log.add(black_box(format!("message {}", i)));
                }
                log
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_render(c: &mut Criterion) {
    let log = populated_log();

    c.bench_function("render_text_10k", |b| b.iter(|| black_box(log.render_text())));
    c.bench_function("render_html_10k", |b| b.iter(|| black_box(log.render_html())));
}

fn bench_write(c: &mut Criterion) {
    let log = populated_log();
    let dir = tempdir().unwrap();
    let path = dir.path().join("perf_test.log");

    c.bench_function("write_text_10k", |b| {
        b.iter(|| assert!(log.write_to_file(black_box(&path), "text")))
    });

    let written = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    println!("text log size: {} bytes", written);
}

criterion_group!(benches, bench_add, bench_render, bench_write);
criterion_main!(benches);
