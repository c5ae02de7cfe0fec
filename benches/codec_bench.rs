//! Codec benchmarks
//!
//! Measures request encoding and decoding throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filereq::protocol::{decode_request, encode_request, Request};

fn bench_encode(c: &mut Criterion) {
    let request = Request::read("test0.txt", "netascii");

    c.bench_function("encode_request", |b| {
        b.iter(|| encode_request(black_box(&request)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let wire = encode_request(&Request::write("test1.txt", "octet"));

    c.bench_function("decode_request", |b| {
        b.iter(|| decode_request(black_box(&wire)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
