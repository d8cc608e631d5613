//! Benchmarks for the transition engine and the move ledger.
//!
//! This benchmarks the per-tick hot path and fingerprinting of long logs.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use coil::game::{advance, Direction, FoodSpawner, GameConfig, GameState, PlayerId};
use coil::log::MoveLedger;
use coil::replay::ReplayEngine;
use coil::session::GameSession;

/// Record a game where both players circle the board without dying.
fn circling_recording(ticks: u32) -> coil::replay::Recording {
    let mut session = GameSession::new(GameConfig::default(), 42);

    // Clockwise square for player 1, counter-clockwise for player 2.
    let route1 = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];
    let route2 = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    for tick in 0..ticks {
        if tick % 4 == 0 {
            let leg = (tick / 4) as usize;
            session.steer(PlayerId::One, route1[leg % 4]);
            session.steer(PlayerId::Two, route2[leg % 4]);
        }
        session.tick().unwrap();
        if session.state().is_game_over() {
            break;
        }
    }

    session.recording()
}

fn bench_single_tick(c: &mut Criterion) {
    let config = GameConfig::default();
    let state = GameState::new(&config);
    let mut spawner = FoodSpawner::new(42, config.grid_size);

    c.bench_function("advance_single_tick", |b| {
        b.iter(|| {
            let next = advance(
                black_box(&state),
                black_box(&config),
                Some(Direction::Right),
                Some(Direction::Left),
                &mut spawner,
            );
            black_box(next)
        });
    });
}

fn bench_full_replay(c: &mut Criterion) {
    let recording = circling_recording(200);

    c.bench_function("replay_200_ticks", |b| {
        b.iter(|| {
            let mut engine = ReplayEngine::new(black_box(recording.clone()));
            engine.run_to_end().unwrap();
            black_box(engine.tick())
        });
    });
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut ledger = MoveLedger::new();
    for tick in 0..1000 {
        ledger.append(tick, Some(Direction::Right), Some(Direction::Left));
    }

    c.bench_function("fingerprint_1000_entries", |b| {
        b.iter(|| black_box(ledger.fingerprint()));
    });
}

criterion_group!(
    benches,
    bench_single_tick,
    bench_full_replay,
    bench_fingerprint
);
criterion_main!(benches);
