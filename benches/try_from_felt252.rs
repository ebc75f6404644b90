use feltcast::field::{Felt252, u248_try_from_felt252};
use feltcast::primitives::U248;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_try_from_felt252(c: &mut Criterion) {
    let present = Felt252::from(U248::MAX);
    let absent = -Felt252::ONE;

    c.bench_function("u248_try_from_felt252 present", |b| {
        b.iter(|| u248_try_from_felt252(black_box(present)))
    });

    c.bench_function("u248_try_from_felt252 absent", |b| {
        b.iter(|| u248_try_from_felt252(black_box(absent)))
    });
}

pub fn bench_parse_felt252(c: &mut Criterion) {
    let literal = "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    c.bench_function("felt252 parse hex 248-bit", |b| {
        b.iter(|| black_box(literal).parse::<Felt252>())
    });
}

criterion_group!(benches, bench_try_from_felt252, bench_parse_felt252);
criterion_main!(benches);
