use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gridgame::core::Player;
use gridgame::games::tictactoe::TicTacToe;
use gridgame::rules::{GameDefinition, GameEngine};
use gridgame::training::{SelfPlayConfig, SelfPlayWorker};

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout", |b| {
        let mut worker = SelfPlayWorker::new(TicTacToe::new(), SelfPlayConfig::default());
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(worker.play_game(seed).unwrap())
        });
    });
}

fn bench_evaluate_midgame(c: &mut Criterion) {
    let game = TicTacToe::new();
    let mut state = game.initial_state();
    let mut player = Player::One;
    for slot in [4, 0, 8, 2] {
        state = game.apply_move(&state, player, slot);
        player = player.opponent();
    }

    c.bench_function("evaluate_midgame", |b| {
        b.iter(|| black_box(game.evaluate(black_box(&state))));
    });
}

fn bench_play_single_move(c: &mut Criterion) {
    let engine = GameEngine::new(TicTacToe::new());
    let state = engine.initial_state();

    c.bench_function("play_single_move", |b| {
        b.iter(|| black_box(engine.play(black_box(&state), Player::One, 4).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_random_playout,
    bench_evaluate_midgame,
    bench_play_single_move
);
criterion_main!(benches);
