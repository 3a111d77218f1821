//! Throughput and small-key latency for a representative set of
//! registered hashes, driven through the registry dispatch path.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashforge_core::{Endianness, INPUT_PADDING, global};

const BULK_LEN: usize = 256 * 1024;
const SMALL_LENS: [usize; 4] = [4, 16, 64, 256];

const BENCH_HASHES: [&str; 6] = [
    "wyhash",
    "rapidhash",
    "komihash",
    "t1ha2-64",
    "MuseAir",
    "a5hash",
];

fn bulk_throughput(c: &mut Criterion) {
    let mut buf = vec![0u8; BULK_LEN + INPUT_PADDING];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = (i * 251) as u8;
    }

    let mut group = c.benchmark_group("bulk");
    group.throughput(Throughput::Bytes(BULK_LEN as u64));
    for name in BENCH_HASHES {
        let h = global().lookup(name).expect("bench hash registered");
        let f = h.hashfn(Endianness::Default);
        let mut out = vec![0u8; h.output_bytes()];
        group.bench_function(name, |b| {
            b.iter(|| {
                let seed = h.seed(1, true, 0);
                f(&buf, BULK_LEN, seed, &mut out);
                out[0]
            })
        });
    }
    group.finish();
}

fn small_keys(c: &mut Criterion) {
    let buf = vec![0xA5u8; 256 + INPUT_PADDING];

    let mut group = c.benchmark_group("small");
    for name in BENCH_HASHES {
        let h = global().lookup(name).expect("bench hash registered");
        let f = h.hashfn(Endianness::Default);
        let mut out = vec![0u8; h.output_bytes()];
        let seed = h.seed(1, true, 0);
        for len in SMALL_LENS {
            group.bench_with_input(BenchmarkId::new(name, len), &len, |b, &len| {
                b.iter(|| {
                    f(&buf, len, seed, &mut out);
                    out[0]
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bulk_throughput, small_keys);
criterion_main!(benches);
