use multiagent::config::{AgentConfig, AgentKind};
use multiagent::evaluate::EvaluationFunction;
use multiagent::game::{GameConfig, GameLoop, SilentRenderer};
use multiagent::search::Strategy;

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("alpha-beta vs random ghosts minimaxClassic", |b| {
        b.iter(|| play_game(AgentKind::Search(Strategy::AlphaBeta)))
    });
    c.bench_function("reflex vs random ghosts minimaxClassic", |b| {
        b.iter(|| play_game(AgentKind::Reflex))
    });
}

fn play_game(pacman: AgentKind) -> f64 {
    let config = GameConfig {
        pacman,
        agent: AgentConfig {
            depth: 2,
            evaluation: EvaluationFunction::Better,
            ..AgentConfig::default()
        },
        max_moves: 100,
        ..GameConfig::default()
    };

    let game_loop = GameLoop::new(config, SilentRenderer).unwrap();
    game_loop.play(0).unwrap().score
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
