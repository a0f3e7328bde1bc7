use criterion::{black_box, criterion_group, criterion_main, Criterion};
use symslice_core::{parse_slice, unpack_slice, SliceDescriptor, SymVar};

fn bench_unpack(c: &mut Criterion) {
    let concrete = SliceDescriptor::<SymVar>::from_ints(Some(-3), None, Some(-2));
    c.bench_function("unpack_concrete", |b| {
        b.iter(|| unpack_slice(black_box(&concrete)))
    });

    let symbolic = parse_slice("s0:n:4").expect("valid literal");
    c.bench_function("unpack_symbolic", |b| {
        b.iter(|| unpack_slice(black_box(&symbolic)))
    });

    c.bench_function("unpack_and_adjust", |b| {
        b.iter(|| {
            unpack_slice(black_box(&concrete)).and_then(|u| u.adjust_indices(black_box(1 << 20)))
        })
    });
}

criterion_group!(benches, bench_unpack);
criterion_main!(benches);
