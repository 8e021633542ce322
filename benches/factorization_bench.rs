// benches/factorization_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num::BigInt;

use ntheory::integer_math::factorization::prime_factors;
use ntheory::integer_math::prime_sieve::{gen_primes, sieve_upto};

fn bench_sieve_upto(c: &mut Criterion) {
    c.bench_function("sieve_upto 100000", |b| {
        b.iter(|| sieve_upto(black_box(100_000)))
    });
}

fn bench_prime_stream(c: &mut Criterion) {
    c.bench_function("gen_primes first 10000", |b| {
        b.iter(|| gen_primes().take(10_000).last())
    });
}

fn bench_trial_division_factorization(c: &mut Criterion) {
    c.bench_function("prime_factors 600851475143", |b| {
        let n = BigInt::from(600_851_475_143u64);
        b.iter(|| prime_factors(black_box(&n)).unwrap())
    });
}

fn bench_rho_factorization(c: &mut Criterion) {
    c.bench_function("prime_factors semiprime 10002200057", |b| {
        let n = BigInt::from(100_003u64) * BigInt::from(100_019u64);
        b.iter(|| prime_factors(black_box(&n)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_sieve_upto,
    bench_prime_stream,
    bench_trial_division_factorization,
    bench_rho_factorization
);
criterion_main!(benches);
