//! Criterion benchmarks for carfast-eval.
//!
//! Uses randomly generated vehicles and balances to measure evaluation
//! overhead for comparison sets of growing size.

use carfast_eval::compare::{BestValueEvaluator, ComparableEntity, ComparisonLayout, Slot};
use carfast_eval::loyalty::{LoyaltyTierCalculator, TierTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Random vehicles
// ===========================================================================

fn random_slots(n: usize, rng: &mut StdRng) -> Vec<Slot> {
    (0..n)
        .map(|_| {
            if rng.random_bool(0.1) {
                return None;
            }
            Some(
                ComparableEntity::new()
                    .with("make", "Generic")
                    .with("price", rng.random_range(5_000.0..60_000.0f64))
                    .with("mileage", rng.random_range(0.0..250_000.0f64))
                    .with("power", rng.random_range(60.0..400.0f64))
                    .with("acceleration", rng.random_range(4.0..15.0f64))
                    .with("safety_rating", rng.random_range(1.0..5.0f64)),
            )
        })
        .collect()
}

fn bench_best_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_value");
    let evaluator = BestValueEvaluator::vehicle();
    let mut rng = StdRng::seed_from_u64(42);

    for &n in &[3usize, 10, 100] {
        let slots = random_slots(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &slots, |b, s| {
            b.iter(|| black_box(evaluator.evaluate(black_box(s), "price")))
        });
    }
    group.finish();
}

fn bench_highlight_layout(c: &mut Criterion) {
    let evaluator = BestValueEvaluator::vehicle();
    let layout = ComparisonLayout::vehicle();
    let slots = random_slots(3, &mut StdRng::seed_from_u64(7));

    c.bench_function("highlight_vehicle_layout", |b| {
        b.iter(|| black_box(evaluator.highlight(black_box(&slots), &layout)))
    });
}

// ===========================================================================
// Loyalty
// ===========================================================================

fn bench_loyalty(c: &mut Criterion) {
    let table = TierTable::carfast();
    let mut rng = StdRng::seed_from_u64(42);
    let balances: Vec<i64> = (0..1_000).map(|_| rng.random_range(0..20_000)).collect();

    c.bench_function("loyalty_evaluate_1000", |b| {
        b.iter(|| {
            for &p in &balances {
                let status = LoyaltyTierCalculator::evaluate(black_box(p), table.tiers());
                black_box(status).ok();
            }
        })
    });
}

criterion_group!(benches, bench_best_value, bench_highlight_layout, bench_loyalty);
criterion_main!(benches);
