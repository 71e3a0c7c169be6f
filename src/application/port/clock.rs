// SPDX-License-Identifier: MPL-2.0
//! Playback clock port definition.
//!
//! This module defines the [`PlaybackClock`] trait: the media element (or a
//! simulated one) whose advancing time drives the engine.
//!
//! # Design Notes
//!
//! - Times are seconds as `f64`, matching media element APIs
//! - Commands are fire-and-forget; a seek may take effect on a later tick
//! - The engine never reads time from the clock during `evaluate`; the host
//!   passes the sampled time in, so commands issued mid-tick cannot recurse

/// Port for the external media clock.
///
/// # Example
///
/// ```ignore
/// use segloop::application::port::PlaybackClock;
///
/// fn restart(clock: &mut impl PlaybackClock, start: f64) {
///     clock.seek(start);
///     clock.play();
/// }
/// ```
pub trait PlaybackClock {
    /// Current media time in seconds.
    fn current_time(&self) -> f64;

    /// Media duration in seconds. May be NaN or zero before metadata loads.
    fn duration(&self) -> f64;

    /// Moves the playhead to `time` seconds.
    fn seek(&mut self, time: f64);

    /// Starts or resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns true while playback is paused or stopped.
    fn is_paused(&self) -> bool;
}
