use criterion::{criterion_group, criterion_main, Criterion};
use labyrinth::{
    cells::Coordinate,
    generators,
    grid::Grid,
    maze::Maze,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_grid_65(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(65);
    c.bench_function("recursive_backtracker_grid_65", move |b| {
        b.iter(|| {
            let mut g = Grid::new(Width(65), Height(65));
            generators::recursive_backtracker(&mut g, Coordinate::new(1, 1), &mut rng).unwrap();
            g
        })
    });
}

fn bench_maze_generate_351(c: &mut Criterion) {
    let mut m = Maze::new(Width(351), Height(351)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(351);
    c.bench_function("maze_generate_351", move |b| {
        b.iter(|| m.generate(&mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_grid_65,
    bench_maze_generate_351
);
criterion_main!(benches);
