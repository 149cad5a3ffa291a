use toll_grid::{PlannerConfig, Point, RoutePlanner, SearchMode};

// In this example a route is planned across a 7x7 grid whose top rows look like
//  _______
// |       |
// |  #    |
// |S $ # E|
// |  #    |
// where
// - # marks a wall
// - $ marks a toll cell
// - S marks the start
// - E marks the end
//
// The toll is avoided as long as the detour costs less than the toll itself.

fn print_route(planner: &RoutePlanner) {
    let result = planner.result();
    let grid = planner.grid();
    for y in 0..grid.height() as i32 {
        let row: String = (0..grid.width() as i32)
            .map(|x| {
                let p = Point::new(x, y);
                if p == planner.start() {
                    'S'
                } else if p == planner.end() {
                    'E'
                } else if grid.is_blocked(&p) {
                    '#'
                } else if result.path.contains(&p) {
                    '*'
                } else if grid.is_tolled(&p) {
                    '$'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{}", row);
    }
    let trip = planner.trip();
    println!(
        "{}: cost {}, {} cells expanded in {:.3} ms",
        planner.mode(),
        result.total_cost,
        result.expanded_count,
        result.elapsed_millis
    );
    println!(
        "Fuel {:.2} + toll {:.2} ({} gates) = {:.2}\n",
        trip.fuel, trip.toll, trip.toll_hits, trip.total
    );
}

fn main() {
    env_logger::init();
    let mut planner = RoutePlanner::new(PlannerConfig {
        grid_size: 7,
        start: (0, 2),
        end: (6, 2),
        mode: SearchMode::HeuristicGuided,
        ..PlannerConfig::default()
    })
    .expect("valid planner configuration");
    planner.paint_wall(Point::new(2, 1));
    planner.paint_wall(Point::new(2, 3));
    planner.paint_wall(Point::new(4, 2));
    planner.paint_toll(Point::new(2, 2));
    print_route(&planner);

    // Close the gaps around the walls so the toll becomes the cheapest option.
    for y in [0, 4, 5, 6] {
        planner.paint_wall(Point::new(2, y));
    }
    print_route(&planner);

    planner.toggle_mode();
    print_route(&planner);
}
