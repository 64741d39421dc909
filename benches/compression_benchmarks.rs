use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use letter_huffman::{codes, compress, decode, frequency, tree};

fn sample_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog, 1234567890! "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| compress(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let text = sample_text(10_000);
    let freqs = frequency::count_frequencies(&text).unwrap();
    let huffman = tree::build_tree(&freqs).unwrap();
    let table = codes::generate_codes(&huffman);
    let (encoded, _) = compress(&text).unwrap();

    c.bench_function("count_frequencies", |b| {
        b.iter(|| frequency::count_frequencies(black_box(&text)).unwrap())
    });
    c.bench_function("build_tree", |b| {
        b.iter(|| tree::build_tree(black_box(&freqs)).unwrap())
    });
    c.bench_function("generate_codes", |b| {
        b.iter(|| codes::generate_codes(black_box(&huffman)))
    });
    c.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&encoded), black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_stages);
criterion_main!(benches);
