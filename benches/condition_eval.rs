use criterion::{black_box, criterion_group, criterion_main, Criterion};

use anim_events::events::{
    ActivationSite, AnimationEvent, ClipEvents, ConditionEntry, ConditionEvaluator, ConditionMode,
    ConditionSet,
};
use anim_events::params::ParameterMap;

fn params() -> ParameterMap {
    ParameterMap::new()
        .with_int("combo", 3)
        .with_float("speed", 1.2)
        .with_bool("grounded", true)
}

fn condition_set() -> ConditionSet {
    ConditionSet::new()
        .with_entry(ConditionEntry::int("combo", ConditionMode::GreaterEqualThan, 2))
        .with_entry(ConditionEntry::float("speed", ConditionMode::GreaterThan, 1.0))
        .with_entry(ConditionEntry::boolean("grounded", true))
}

fn bench_evaluate(c: &mut Criterion) {
    let params = params();
    let set = condition_set();
    let evaluator = ConditionEvaluator::default();

    c.bench_function("evaluate_three_entries", |b| {
        b.iter(|| evaluator.evaluate(black_box(&set), black_box(&params)))
    });
}

fn bench_clip_step(c: &mut Criterion) {
    let params = params();
    let evaluator = ConditionEvaluator::default();
    let clip: ClipEvents = (0..32)
        .map(|i| {
            AnimationEvent::new(format!("event_{}", i), i as f32 / 32.0)
                .with_condition(condition_set())
        })
        .collect();

    c.bench_function("activate_crossed_full_clip", |b| {
        b.iter(|| {
            let site = ActivationSite::default();
            clip.activate_crossed(0.0, 1.0, site, black_box(&params), &evaluator)
                .len()
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_clip_step);
criterion_main!(benches);
