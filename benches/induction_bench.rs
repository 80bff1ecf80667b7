//! Criterion benchmarks for rule induction.
//!
//! Uses synthetic ordinal tables to measure pure engine overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use domlem::generator::CandidateSearch;
use domlem::induce::{InductionConfig, InductionRunner};
use domlem::table::{ApproximatedSet, Attribute, InformationTable, Value};

/// Deterministic ordinal table: `objects` rows over `attrs` gain
/// criteria with three decision classes roughly consistent with the
/// attribute sums.
fn synthetic_table(objects: usize, attrs: usize) -> InformationTable {
    let attributes = (0..attrs)
        .map(|i| Attribute::gain(format!("a{i}")))
        .collect();
    let rows: Vec<Vec<Value>> = (0..objects)
        .map(|o| {
            (0..attrs)
                .map(|a| Value::Int(((o * 7 + a * 13 + o * a) % 10) as i64))
                .collect()
        })
        .collect();
    let decisions = rows
        .iter()
        .map(|row| {
            let sum: i64 = row
                .iter()
                .map(|v| match v {
                    Value::Int(i) => *i,
                    _ => 0,
                })
                .sum();
            Value::Int(sum * 3 / (attrs as i64 * 10))
        })
        .collect();
    InformationTable::new(attributes, rows, decisions).unwrap()
}

fn unions(table: &InformationTable) -> Vec<ApproximatedSet> {
    vec![
        ApproximatedSet::upward_union(table, Value::Int(1)).unwrap(),
        ApproximatedSet::upward_union(table, Value::Int(2)).unwrap(),
        ApproximatedSet::downward_union(table, Value::Int(0)).unwrap(),
        ApproximatedSet::downward_union(table, Value::Int(1)).unwrap(),
    ]
}

fn bench_induction_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("induction");
    let config = InductionConfig::default();

    for objects in [50, 100, 200] {
        let table = synthetic_table(objects, 4);
        let sets = unions(&table);
        group.bench_with_input(
            BenchmarkId::new("objects", objects),
            &objects,
            |b, _| {
                b.iter(|| {
                    InductionRunner::run(black_box(&table), black_box(&sets), &config)
                })
            },
        );
    }
    group.finish();
}

fn bench_search_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_modes");
    let table = synthetic_table(100, 4);
    let sets = unions(&table);

    for (name, search) in [
        ("exhaustive", CandidateSearch::Exhaustive),
        ("skip_used", CandidateSearch::SkipUsedAttributes),
        ("monotonic_bounds", CandidateSearch::MonotonicBounds),
    ] {
        let config = InductionConfig::default().with_candidate_search(search);
        group.bench_function(name, |b| {
            b.iter(|| InductionRunner::run(black_box(&table), black_box(&sets), &config))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_induction_scaling, bench_search_modes);
criterion_main!(benches);
