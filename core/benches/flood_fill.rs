use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use kaboom_core::*;
use std::hint::black_box;

const LARGE: GameConfig = GameConfig::new_unchecked((255, 255), 0);

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");

    group.bench_function("empty_255x255", |b| {
        b.iter_batched(
            || GameSession::with_layout(LARGE, &[]).expect("valid layout"),
            |mut session| black_box(session.left_click((127, 127))),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("sparse_255x255", |b| {
        let config = GameConfig::new_unchecked((255, 255), 2_000);
        b.iter_batched(
            || GameSession::new(config, 42).expect("valid config"),
            |mut session| {
                let start = session
                    .views()
                    .map(|(coords, _)| coords)
                    .find(|&coords| {
                        let board = session.board();
                        !board.is_mine(coords) && board.count_adjacent_mines(coords) == 0
                    });
                if let Some(coords) = start {
                    black_box(session.left_click(coords));
                }
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_mines");
    for (name, config) in [
        ("beginner", GameConfig::beginner()),
        ("expert", GameConfig::expert()),
        ("dense_30x30", GameConfig::new_unchecked((30, 30), 800)),
    ] {
        group.bench_function(name, |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(GameSession::new(config, seed).expect("valid config"))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, flood_fill, placement);
criterion_main!(benches);
