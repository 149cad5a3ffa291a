use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use toll_grid::{search, Point, SearchMode, TollGrid};

fn random_grid(n: usize, rng: &mut StdRng) -> TollGrid {
    let mut grid = TollGrid::square(n);
    for p in grid.points().collect::<Vec<_>>() {
        let roll: f64 = rng.gen();
        if roll < 0.2 {
            grid.set_blocked(p, true);
        } else if roll < 0.3 {
            grid.set_tolled(p, true);
        }
    }
    grid
}

fn random_scenarios(grid: &TollGrid, count: usize, rng: &mut StdRng) -> Vec<(Point, Point)> {
    let n = grid.width() as i32;
    let mut scenarios = Vec::new();
    while scenarios.len() < count {
        let start = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        let end = Point::new(rng.gen_range(0..n), rng.gen_range(0..n));
        if !grid.is_blocked(&start) && !grid.is_blocked(&end) {
            scenarios.push((start, end));
        }
    }
    scenarios
}

fn mode_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [20, 64] {
        let grid = random_grid(n, &mut rng);
        let scenarios = random_scenarios(&grid, 100, &mut rng);
        for mode in [SearchMode::UniformCost, SearchMode::HeuristicGuided] {
            c.bench_function(format!("{n}x{n} random, {mode}").as_str(), |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        black_box(search(*start, *end, &grid, mode).ok());
                    }
                })
            });
        }
    }
}

criterion_group!(benches, mode_bench);
criterion_main!(benches);
