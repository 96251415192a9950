use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gogol::core::patterns::R_PENTOMINO;
use gogol::core::Grid;
use gogol::engine::{next_generation, Frame};
use gogol::term::{FrameBuffer, LifeView, Viewport};

fn bench_next_generation(c: &mut Criterion) {
    let grid = R_PENTOMINO.place(80, 40).unwrap();

    c.bench_function("next_generation_80x40", |b| {
        b.iter(|| next_generation(black_box(&grid)))
    });
}

fn bench_next_generation_large(c: &mut Criterion) {
    // Every third cell alive.
    let alive: Vec<(usize, usize)> = (0..200)
        .flat_map(|y| (0..200).map(move |x| (x, y)))
        .filter(|&(x, y)| (x + y) % 3 == 0)
        .collect();
    let grid = Grid::from_alive(200, 200, &alive).unwrap();

    c.bench_function("next_generation_200x200", |b| {
        b.iter(|| next_generation(black_box(&grid)))
    });
}

fn bench_render_view(c: &mut Criterion) {
    let grid = R_PENTOMINO.place(80, 40).unwrap();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(160, 42);

    c.bench_function("render_view_80x40", |b| {
        b.iter(|| {
            let frame = Frame {
                grid: &grid,
                iteration: 1,
                max_iterations: 100,
            };
            view.render_into(black_box(&frame), Viewport::new(160, 42), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_next_generation,
    bench_next_generation_large,
    bench_render_view
);
criterion_main!(benches);
