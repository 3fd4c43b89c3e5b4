use criterion::{black_box, criterion_group, criterion_main, Criterion};

use naca_rs::airfoil::four_digit::FourDigitSection;
use naca_rs::airfoil::profiles::Profile;
use naca_rs::airfoil::six_series::{SixSeriesSection, ThicknessDistribution};
use naca_rs::{create, Airfoil};

fn four_digit(toc: f64) -> usize {
    let naca = FourDigitSection::cambered(toc, 0.04, 0.4, 1.0).unwrap();
    naca.upper_surface().len()
}

fn six_series(cli: f64) -> usize {
    let naca = SixSeriesSection::a_series(Profile::Series63, cli, 0.12, 1.0).unwrap();
    naca.upper_surface().len()
}

fn benchmark(c: &mut Criterion) {
    let tables = Profile::Series64.tables().unwrap();

    c.bench_function("4-digit generation", |b| b.iter(|| four_digit(black_box(0.12))));
    c.bench_function("6A-series generation", |b| b.iter(|| six_series(black_box(0.2))));
    c.bench_function("6-series thickness solve", |b| {
        b.iter(|| ThicknessDistribution::solve(black_box(tables), black_box(0.15)))
    });
    c.bench_function("Designation parse", |b| b.iter(|| create(black_box("23112"), 1.0)));
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
