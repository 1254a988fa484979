use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use quotid::{QuoteCodec, decode_composite, decode_quote, encode_composite, epoch};

const TOTAL_IDS: usize = 4096;

fn bench_quote(c: &mut Criterion) {
    let codec = QuoteCodec::new();
    let at = epoch() + chrono::TimeDelta::days(500);

    let mut group = c.benchmark_group("quote");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("encode/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(codec.encode(black_box(Some(at))));
            }
        });
    });

    let quote = codec.encode(Some(at));
    group.bench_function(format!("decode/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(decode_quote(black_box(&quote)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("encode/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(encode_composite(
                    black_box(601_123_456),
                    black_box("sizemore"),
                    1980,
                    6,
                    15,
                ));
            }
        });
    });

    let key = encode_composite(601_123_456, "sizemore", 1980, 6, 15);
    group.bench_function(format!("decode/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(decode_composite(black_box(&key)).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_quote, bench_composite);
criterion_main!(benches);
