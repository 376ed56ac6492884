use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mines_core::*;
use std::hint::black_box;

fn generate_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for hazards in [1, 3, 10, 20] {
        let mut generator = RandomBoardGenerator::from_seed(0xb0a7d);
        group.bench_with_input(BenchmarkId::from_parameter(hazards), &hazards, |b, &hazards| {
            b.iter(|| generator.generate(black_box(BOARD_SIZE), black_box(hazards)))
        });
    }
    group.finish();
}

fn ladder_tiers(c: &mut Criterion) {
    let model = PayoutModel::default();
    let mut group = c.benchmark_group("ladder");
    for hazards in [1, 3, 10, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(hazards), &hazards, |b, &hazards| {
            b.iter(|| model.ladder(black_box(hazards), black_box(BOARD_SIZE)))
        });
    }
    group.finish();
}

fn full_round(c: &mut Criterion) {
    c.bench_function("round/reveal_until_done", |b| {
        let mut engine = RoundEngine::new(
            EngineConfig {
                allow_negative_balance: true,
                ..EngineConfig::default()
            },
            Wallet::default(),
            RandomBoardGenerator::from_seed(7),
        )
        .expect("default config is valid");
        b.iter(|| {
            engine.start_round().expect("betting phase");
            for id in 0..BOARD_SIZE {
                match engine.reveal_tile(id) {
                    Ok(outcome) if outcome.is_loss() => {
                        engine.reset_round().expect("game over phase");
                        return;
                    }
                    Ok(RevealOutcome::Cleared { .. }) => break,
                    _ => {}
                }
            }
            engine.cash_out().expect("playing phase");
        })
    });
}

criterion_group!(benches, generate_tiers, ladder_tiers, full_round);
criterion_main!(benches);
