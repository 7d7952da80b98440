//! Row-game search benchmarks.
//!
//! Set `RUST_LOG=rust_mcts=debug` to see search events while benchmarking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rust_mcts::core::GameRng;
use rust_mcts::games::row::{RowGameConfig, RowGameState};
use rust_mcts::mcts::{Mcts, MctsConfig, RootParallelMcts};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

fn opening_position() -> RowGameState {
    RowGameState::deal(RowGameConfig::default(), &mut GameRng::new(2024)).unwrap()
}

fn bench_state_clone(c: &mut Criterion) {
    let state = opening_position();
    c.bench_function("row_state_clone", |b| b.iter(|| black_box(state.clone())));
}

fn bench_single_tree(c: &mut Criterion) {
    init_tracing();
    let state = opening_position();
    let mut group = c.benchmark_group("mcts_single_tree");
    for iterations in [250u32, 1000, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &iterations, |b, &n| {
            b.iter(|| {
                let mut search = Mcts::new(MctsConfig::default().with_iterations(n));
                black_box(search.find_play(&state).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_root_parallel(c: &mut Criterion) {
    init_tracing();
    let state = opening_position();
    let mut group = c.benchmark_group("mcts_root_parallel");
    group.sample_size(20);
    for workers in [1usize, 2, 4] {
        let config = MctsConfig::default().with_iterations(1000).with_workers(workers);
        let mut search: RootParallelMcts<RowGameState> = RootParallelMcts::new(config).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, _| {
            b.iter(|| black_box(search.find_play(&state).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_state_clone, bench_single_tree, bench_root_parallel);
criterion_main!(benches);
