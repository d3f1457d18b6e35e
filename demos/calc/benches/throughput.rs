use divan::{Bencher, black_box};

use divan::AllocProfiler;

#[allow(unused)]
#[cfg_attr(feature = "alloc", global_allocator)]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

const SAMPLE_LINES: &[&str] = &[
    "width = 12",
    "height = width / 3; area = width * height",
    "area - (width + height) * 2",
    "-(area - 1) / -(height)",
];

/// Generate a program with N statements cycling through the samples
fn generate_program(count: usize) -> String {
    let mut result = String::with_capacity(count * 32);
    for i in 0..count {
        result.push_str(SAMPLE_LINES[i % SAMPLE_LINES.len()]);
        result.push('\n');
    }
    result
}

#[divan::bench(args = [100, 1000, 10_000])]
fn lex(bencher: Bencher, n: usize) {
    let input = generate_program(n);

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(calc::lex(black_box(&input)).unwrap()));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn parse(bencher: Bencher, n: usize) {
    let input = generate_program(n);

    bencher
        .counter(divan::counter::BytesCount::new(input.len()))
        .bench(|| black_box(calc::parse(black_box(&input)).unwrap()));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn evaluate(bencher: Bencher, n: usize) {
    let input = generate_program(n);

    bencher.bench(|| black_box(calc::evaluate(black_box(&input)).unwrap()));
}

#[divan::bench(args = [8, 32, 60])]
fn nested_parens(bencher: Bencher, depth: usize) {
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    bencher.bench(|| black_box(calc::parse(black_box(&input)).unwrap()));
}
