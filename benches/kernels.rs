#[macro_use]
extern crate criterion;
extern crate pimandel;

use criterion::Criterion;
use pimandel::pi::{hits_isolated, hits_naive, hits_serial};
use pimandel::{render_serial, render_threaded, ComplexPlane, PlaneMapper, SharedStream};

const SAMPLES: u64 = 200_000;
const THREADS: usize = 4;

fn escape_fills(c: &mut Criterion) {
    c.bench_function("escape serial 200x150", |b| {
        let plane =
            PlaneMapper::new(200, 150, ComplexPlane::from_bounds(-2.5, -1.5, 1.5, 1.5)).unwrap();
        b.iter(|| render_serial(&plane, 200).unwrap())
    });
    c.bench_function("escape threaded 200x150", |b| {
        let plane =
            PlaneMapper::new(200, 150, ComplexPlane::from_bounds(-2.5, -1.5, 1.5, 1.5)).unwrap();
        b.iter(|| render_threaded(&plane, 200, THREADS).unwrap())
    });
}

fn pi_strategies(c: &mut Criterion) {
    c.bench_function("pi serial", |b| {
        let stream = SharedStream::new(1);
        b.iter(|| hits_serial(&stream, SAMPLES))
    });
    c.bench_function("pi shared stream", |b| {
        let stream = SharedStream::new(1);
        b.iter(|| hits_naive(&stream, SAMPLES, THREADS).unwrap())
    });
    c.bench_function("pi isolated streams", |b| {
        b.iter(|| hits_isolated(1, SAMPLES, THREADS).unwrap())
    });
}

criterion_group!(benches, escape_fills, pi_strategies);
criterion_main!(benches);
