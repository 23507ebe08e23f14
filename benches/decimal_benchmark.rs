// ============================================================================
// Number Spin Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - String add/subtract at growing precision
// 2. Stepping - Clip and lattice snapping
// 3. Widget - Full increment through a bound in-memory element
// 4. Interop - Conversion to rust_decimal
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use number_spin::interfaces::MemoryElement;
use number_spin::numeric::DecimalValue;
use number_spin::prelude::*;
use number_spin::stepping::{clip, normalize_to_step};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_add");

    for precision in [0usize, 3, 6, 12].iter() {
        let fraction = "7".repeat(*precision);
        let a = if fraction.is_empty() {
            "12345".to_string()
        } else {
            format!("12345.{}", fraction)
        };
        let b = format!("-0.{}1", "0".repeat(*precision));

        group.bench_with_input(
            BenchmarkId::new("add", precision),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(add(*a, *b))),
        );
        group.bench_with_input(
            BenchmarkId::new("subtract", precision),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(subtract(*a, *b))),
        );
    }

    group.finish();
}

// ============================================================================
// Stepping Benchmarks
// ============================================================================

fn benchmark_stepping(c: &mut Criterion) {
    let value: DecimalValue = "9.87".parse().unwrap_or_default();
    let step: DecimalValue = "0.25".parse().unwrap_or_default();
    let min = DecimalValue::zero();
    let max = DecimalValue::from(10);

    c.bench_function("clip", |b| {
        b.iter(|| black_box(clip(&value, Some(&min), Some(&max))))
    });

    c.bench_function("normalize_to_step", |b| {
        b.iter(|| black_box(normalize_to_step(&value, &step, Some(&min))))
    });
}

// ============================================================================
// Widget Benchmarks
// ============================================================================

fn benchmark_increment(c: &mut Criterion) {
    let element = MemoryElement::number_input()
        .with_attribute("min", "-1000000")
        .with_attribute("max", "1000000")
        .with_attribute("step", "0.01")
        .with_value("0");
    let mut outcome = bind(vec![element], &SpinConfig::default(), Arc::new(NoOpEventHandler));
    let binding = &mut outcome.bound[0];

    c.bench_function("widget_increment", |b| {
        b.iter(|| {
            binding.increment();
            black_box(binding.element().value())
        })
    });
}

// ============================================================================
// Interop Benchmarks
// ============================================================================

fn benchmark_to_rust_decimal(c: &mut Criterion) {
    let value: DecimalValue = "-12345.678901".parse().unwrap_or_default();

    c.bench_function("to_rust_decimal", |b| {
        b.iter(|| black_box(value.to_decimal()))
    });
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_stepping,
    benchmark_increment,
    benchmark_to_rust_decimal,
);
criterion_main!(benches);
