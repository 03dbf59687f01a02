use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matrix_engine::Matrix;

fn dense(n: usize) -> Matrix<f64> {
    let rows = (0..n)
        .map(|r| (0..n).map(|c| ((r * 7 + c * 13 + r * c) % 9) as f64 - 4.0).collect())
        .collect();
    Matrix::new(rows).unwrap()
}

fn bench_cofactor_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("cofactor_expansion");
    for n in [3usize, 5, 7, 8] {
        let m = dense(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| black_box(m).determinant().unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cofactor_expansion);
criterion_main!(benches);
