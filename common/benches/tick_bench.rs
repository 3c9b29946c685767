use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

use common::game::{Direction, Game, GamePhase, GameSettings, KeyInput, SessionRng};

/// Plays a zig-zag pattern that keeps eating and restarting, covering
/// advance, food relocation and both collision checks.
fn bench_full_runs(ticks: u64) {
    let mut rng = SessionRng::from_random();
    let mut game = Game::new(GameSettings::default(), 0, &mut rng);
    game.handle_key(KeyInput::Other, &mut rng);

    let turns = [
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Right,
    ];

    for step in 0..ticks {
        if game.phase() == GamePhase::GameOver {
            game.handle_key(KeyInput::Other, &mut rng);
        }
        let turn = turns[(step % turns.len() as u64) as usize];
        game.handle_key(KeyInput::Direction(turn), &mut rng);
        game.tick(&mut rng);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("tick_1000", |b| b.iter(|| bench_full_runs(1000)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
