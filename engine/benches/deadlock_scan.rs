use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use engine::{AgeGroup, DifficultySettings, SessionRng, generate_board};

fn deadlock_scan_bench(c: &mut Criterion) {
    let settings = DifficultySettings::for_age_group(AgeGroup::Senior);
    let board = generate_board(&settings, &mut SessionRng::new(7)).unwrap();

    c.bench_function("find_any_match_full_pyramid", |b| {
        b.iter(|| black_box(&board).find_any_match())
    });

    c.bench_function("playable_tiles_full_pyramid", |b| {
        b.iter(|| black_box(&board).playable_tiles())
    });
}

criterion_group!(benches, deadlock_scan_bench);
criterion_main!(benches);
