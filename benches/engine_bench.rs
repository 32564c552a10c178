use criterion::{black_box, criterion_group, criterion_main, Criterion};

use teeko_engine::{GameEngine, Phase};

/// A full drop phase ending in a horizontal win (includes the implicit
/// reset), exercising placement, win detection, and event plumbing.
fn drop_phase_win(c: &mut Criterion) {
    c.bench_function("drop_phase_win", |b| {
        b.iter(|| {
            let mut engine = GameEngine::with_default_players();
            for col in 0..3 {
                engine.select_cell(0, col).unwrap();
                engine.select_cell(4, col).unwrap();
            }
            engine.select_cell(0, 3).unwrap();
            black_box(engine.phase())
        })
    });
}

/// Select-and-cancel cycles in the move phase: neighbor marking and the
/// transient-mark sweep.
fn select_and_cancel(c: &mut Criterion) {
    let mut engine = GameEngine::with_default_players();
    for (red, blue) in [(0, 0), (0, 2), (2, 0), (2, 4)]
        .into_iter()
        .zip([(4, 0), (4, 2), (4, 4), (2, 2)])
    {
        engine.select_cell(red.0, red.1).unwrap();
        engine.select_cell(blue.0, blue.1).unwrap();
    }
    assert_eq!(engine.phase(), Phase::Move);

    c.bench_function("select_and_cancel", |b| {
        b.iter(|| {
            engine.select_cell(2, 0).unwrap();
            engine.select_cell(2, 0).unwrap();
            black_box(engine.selection())
        })
    });
}

criterion_group!(benches, drop_phase_win, select_and_cancel);
criterion_main!(benches);
