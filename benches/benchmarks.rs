use criterion::{Criterion, criterion_group, criterion_main};
use parlour_chess::attacks::is_attacked;
use parlour_chess::config::RulesConfig;
use parlour_chess::game::GameState;
use parlour_chess::movegen::candidate_squares;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Play ~20 random moves on a fresh game to create a realistic mid-game position.
/// Uses a fixed seed for reproducibility across benchmark runs.
fn setup_midgame(config: RulesConfig) -> GameState {
    let mut game = GameState::with_config(config);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let moves = game.legal_moves();
        let Some(&(origin, target)) = moves.choose(&mut rng) else {
            break;
        };
        if game.execute(origin, target).is_err() {
            break;
        }
    }
    game
}

fn bench_legal_moves(c: &mut Criterion) {
    let game = setup_midgame(RulesConfig::default());
    c.bench_function("legal_moves", |b| b.iter(|| black_box(game.legal_moves())));

    let strict = setup_midgame(RulesConfig::strict());
    c.bench_function("legal_moves_strict", |b| {
        b.iter(|| black_box(strict.legal_moves()))
    });
}

fn bench_king_candidates(c: &mut Criterion) {
    let game = setup_midgame(RulesConfig::default());
    let king = game.king_location(game.turn());
    c.bench_function("king_candidates", |b| {
        b.iter(|| black_box(candidate_squares(game.board(), &king)))
    });
}

fn bench_is_attacked(c: &mut Criterion) {
    let game = setup_midgame(RulesConfig::default());
    let king = game.king_location(game.turn());
    let opponent = game.turn().opposite();
    c.bench_function("is_attacked", |b| {
        b.iter(|| black_box(is_attacked(&king, opponent, game.board())))
    });
}

fn bench_execute(c: &mut Criterion) {
    let game = setup_midgame(RulesConfig::default());
    let moves = game.legal_moves();
    let Some(&(origin, target)) = moves.first() else {
        return;
    };
    c.bench_function("execute", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(g.execute(origin, target)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_king_candidates,
    bench_is_attacked,
    bench_execute
);
criterion_main!(benches);
