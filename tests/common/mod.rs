// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use segloop::application::orchestrator::{EngineSettings, PlaybackOrchestrator};
use segloop::application::port::PlaybackClock;
use segloop::domain::segment::{MediaId, Segment};
use segloop::infrastructure::{MemorySegmentStore, RegionMirror, SimulatedClock};

pub type Engine = PlaybackOrchestrator<SimulatedClock, MemorySegmentStore, RegionMirror>;

/// Clock sampling interval used by [`play_for`].
pub const TICK: f64 = 0.01;

pub fn media() -> MediaId {
    MediaId::new("dialog.mp4")
}

/// `[0,2)`, `[2,5)`, `[5,9)`.
pub fn segments() -> Vec<Segment> {
    vec![
        Segment::new(0.0, 2.0).with_transcript("Bonjour.").with_translation("Hello."),
        Segment::new(2.0, 5.0).with_transcript("Comment ça va ?").with_translation("How are you?"),
        Segment::new(5.0, 9.0).with_transcript("Très bien, merci.").with_translation("Very well, thanks."),
    ]
}

pub fn engine(settings: EngineSettings) -> Engine {
    let mut engine = PlaybackOrchestrator::new(
        SimulatedClock::new(10.0),
        MemorySegmentStore::new(),
        RegionMirror::default(),
        settings,
    );
    engine.load_media(media(), Some(segments()));
    engine
}

/// Starts playback from the clock's position and evaluates it once.
pub fn start(engine: &mut Engine) {
    engine.clock_mut().play();
    engine.evaluate_now();
}

/// Plays for `secs` of media time in [`TICK`] steps.
pub fn play_for(engine: &mut Engine, secs: f64) {
    let steps = (secs / TICK).round() as usize;
    for _ in 0..steps {
        engine.clock_mut().advance(TICK);
        engine.step(Duration::from_secs_f64(TICK));
    }
}

/// Asserts one region per segment, with matching bounds and indices.
pub fn assert_regions_match(engine: &Engine) {
    let regions = &engine.region_host().regions;
    assert_eq!(regions.len(), engine.segments().len());
    for (i, (region, segment)) in regions.iter().zip(engine.segments().iter()).enumerate() {
        assert_eq!(region.index, i);
        assert_eq!(region.start, segment.start());
        assert_eq!(region.end, segment.end());
    }
}
