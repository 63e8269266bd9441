//! Criterion benchmarks for the seating engine.
//!
//! Measures the pure cost evaluation and capped-budget annealing runs
//! over a range of grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_seating::cost::CostModel;
use u_seating::model::{SeatPos, Student};
use u_seating::problem::SeatingProblem;
use u_seating::solver::{AnnealConfig, AnnealRunner};

/// Full rows x cols problem where every student carries bias weights,
/// an avoid/prefer chain, and every fourth one a preferred area.
fn synthetic_problem(rows: usize, cols: usize) -> SeatingProblem {
    let count = rows * cols;
    let students: Vec<Student> = (0..count)
        .map(|i| {
            let mut student = Student::new(format!("S{i}"))
                .with_height_weight((i % 5) as f64 - 2.0)
                .with_importance_weight((i % 3) as f64);
            if i + 1 < count {
                student = student.with_avoid(format!("S{}", i + 1));
            }
            if i > 0 {
                student = student.with_prefer(format!("S{}", i - 1));
            }
            if i % 4 == 0 {
                student = student.with_preferred_area(format!("1,1-{rows},{}", cols.div_ceil(2)));
            }
            student
        })
        .collect();
    let positions = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| SeatPos::new(row, col)))
        .collect();
    SeatingProblem::new(students, positions, vec![], rows, cols)
}

fn bench_cost_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_evaluate");
    group.sample_size(10);

    for &(rows, cols) in &[(4usize, 5usize), (6, 8), (10, 10)] {
        let problem = synthetic_problem(rows, cols);
        let model = CostModel::new(&problem);
        let mut rng = SmallRng::seed_from_u64(42);
        let layout = problem.initial_layout(&mut rng);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &layout,
            |b, layout| b.iter(|| black_box(model.evaluate(black_box(layout)))),
        );
    }
    group.finish();
}

fn bench_anneal_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);

    for &(rows, cols) in &[(3usize, 4usize), (5, 6), (6, 8)] {
        let problem = synthetic_problem(rows, cols);
        let config = AnnealConfig::default()
            .with_max_iterations(2_000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let outcome = AnnealRunner::run(black_box(p), black_box(c)).unwrap();
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cost_evaluate, bench_anneal_run);
criterion_main!(benches);
