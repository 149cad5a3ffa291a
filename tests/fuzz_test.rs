//! Fuzzes the search by checking on many random grids with walls and toll cells that both solvers
//! agree on reachability and path cost, that A* never expands more cells than Dijkstra and that
//! the reported cost matches the returned path.
use rand::prelude::*;
use toll_grid::*;

fn random_grid(n: usize, rng: &mut StdRng) -> TollGrid {
    let mut grid = TollGrid::square(n);
    for p in grid.points().collect::<Vec<_>>() {
        let roll: f64 = rng.gen();
        if roll < 0.3 {
            grid.set_blocked(p, true);
        } else if roll < 0.45 {
            grid.set_tolled(p, true);
        }
    }
    grid.update();
    grid
}

fn visualize_grid(grid: &TollGrid, start: &Point, end: &Point, path: &[Point]) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_blocked(&p) {
                print!("#");
            } else if path.contains(&p) {
                print!("*");
            } else if grid.is_tolled(&p) {
                print!("$");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.clear_cell(start);
        grid.clear_cell(end);
        grid.update();
        let reachable = grid.reachable(&start, &end);
        let dijkstra = search(start, end, &grid, SearchMode::UniformCost).unwrap();
        let astar = search(start, end, &grid, SearchMode::HeuristicGuided).unwrap();
        // Show the grid if the solvers disagree
        if dijkstra.is_found() != reachable || dijkstra.total_cost != astar.total_cost {
            visualize_grid(&grid, &start, &end, &dijkstra.path);
            println!("Dijkstra: {dijkstra:?}\nA*: {astar:?}");
        }
        assert_eq!(dijkstra.is_found(), reachable);
        assert_eq!(astar.is_found(), reachable);
        assert_eq!(dijkstra.total_cost, astar.total_cost);
        assert!(astar.expanded_count <= dijkstra.expanded_count);
        for result in [&dijkstra, &astar] {
            assert_eq!(grid.path_cost(&result.path), result.total_cost);
            assert_eq!(result.expanded_count, result.visitation_order.len());
            if !reachable {
                assert_eq!(result.total_cost, 0);
                assert_eq!(result.expanded_count, grid.component_size(&start));
            }
        }
    }
}

/// Every step of a returned path is a single axis-aligned move onto an open cell.
#[test]
fn fuzz_path_shape() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if grid.is_blocked(&start) || grid.is_blocked(&end) {
            continue;
        }
        let result = search(start, end, &grid, SearchMode::HeuristicGuided).unwrap();
        if let (Some(first), Some(last)) = (result.path.first(), result.path.last()) {
            assert_eq!(*first, start);
            assert_eq!(*last, end);
        }
        for pair in result.path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
            assert!(!grid.is_blocked(&b));
        }
        let visited = result.visitation_order.iter().collect::<std::collections::HashSet<_>>();
        assert_eq!(visited.len(), result.expanded_count);
    }
}

/// Turning an ordinary cell on an optimal path into a toll cell raises the cost by at most 9, and
/// by exactly 9 when the path is forced through it.
#[test]
fn fuzz_toll_increment() {
    const N: usize = 6;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, 0);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, &mut rng);
        grid.clear_cell(start);
        grid.clear_cell(end);
        let before = search(start, end, &grid, SearchMode::UniformCost).unwrap();
        let Some(&cell) = before
            .path
            .iter()
            .skip(1)
            .find(|p| !grid.is_tolled(p))
        else {
            continue;
        };
        grid.set_tolled(cell, true);
        let after = search(start, end, &grid, SearchMode::UniformCost).unwrap();
        assert!(after.total_cost >= before.total_cost);
        assert!(after.total_cost <= before.total_cost + TOLL_COST - ORDINARY_COST);
        if after.path.contains(&cell) {
            assert_eq!(after.total_cost, before.total_cost + TOLL_COST - ORDINARY_COST);
        }
    }
}
