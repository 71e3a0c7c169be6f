// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-tick synchronization path.
//!
//! Measures the performance of:
//! - Segment lookup over a long collection
//! - A full evaluate pass across a lesson with looping on
//! - Region regeneration after a structural edit

use criterion::{criterion_group, criterion_main, Criterion};
use segloop::application::orchestrator::{EngineSettings, PlaybackOrchestrator};
use segloop::domain::playback::{InterPauseFraction, LoopCount};
use segloop::domain::segment::{MediaId, Segment, SegmentList};
use segloop::infrastructure::{MemorySegmentStore, RegionMirror, SimulatedClock};
use std::hint::black_box;
use std::time::Duration;

/// `count` contiguous 2.5 s segments with short transcripts.
fn lesson(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 2.5;
            Segment::new(start, start + 2.5).with_transcript(format!("line {i}"))
        })
        .collect()
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_sync");
    let list = SegmentList::from(lesson(500));

    group.bench_function("locate_500", |b| {
        b.iter(|| {
            for step in 0..1250 {
                black_box(list.locate(black_box(step as f64)));
            }
        });
    });

    group.finish();
}

/// One minute of playback sampled at 60 Hz with a two-pass loop.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_sync");
    let tick = 1.0 / 60.0;

    group.bench_function("evaluate_minute_looping", |b| {
        b.iter(|| {
            let mut engine = PlaybackOrchestrator::new(
                SimulatedClock::new(1250.0),
                MemorySegmentStore::new(),
                RegionMirror::default(),
                EngineSettings::default(),
            );
            engine.load_media(MediaId::new("bench.mp3"), Some(lesson(500)));
            engine.toggle_loop(LoopCount::finite(2), InterPauseFraction::default());
            let _ = engine.jump_to_segment(0, false, true);
            for _ in 0..3600 {
                engine.clock_mut().advance(tick);
                engine.step(Duration::from_secs_f64(tick));
            }
            black_box(engine.current_index());
        });
    });

    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_sync");
    let mut engine = PlaybackOrchestrator::new(
        SimulatedClock::new(1250.0),
        MemorySegmentStore::new(),
        RegionMirror::default(),
        EngineSettings::default(),
    );
    engine.load_media(MediaId::new("bench.mp3"), Some(lesson(500)));

    group.bench_function("duplicate_then_undo_500", |b| {
        b.iter(|| {
            let _ = engine.duplicate_segment_after(250);
            engine.undo();
            black_box(engine.regions().len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_locate, bench_evaluate, bench_regenerate);
criterion_main!(benches);
