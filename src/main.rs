// SPDX-License-Identifier: MPL-2.0
//! `segloop` command line: drills through a segment file on a simulated
//! clock and prints the diagnostics report as JSON.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use segloop::application::orchestrator::{EngineSettings, PlaybackOrchestrator};
use segloop::application::port::{PlaybackClock, SegmentStore};
use segloop::config;
use segloop::domain::playback::{InterPauseFraction, LoopCount};
use segloop::domain::segment::{MediaId, SegmentList};
use segloop::error::{Error, Result};
use segloop::infrastructure::json_store::read_segments_file;
use segloop::infrastructure::{JsonSegmentStore, MemorySegmentStore, RegionMirror, SimulatedClock};
use segloop::paths;

const HELP: &str = "\
segloop - subtitle segment drill simulator

USAGE:
  segloop <segments.json> [OPTIONS]

OPTIONS:
  --loop N|inf           Loop every segment N times (or forever)
  --pause-fraction F     Inter-repeat pause as a fraction of the segment
  --auto-pause           Pause at the end of every segment
  --precision            Precision listening mode (park on each segment)
  --tick SECS            Clock sampling interval [default: 0.02]
  --max-time SECS        Stop after this much simulated time [default: 600]
  --save                 Persist the segments into the data directory
  --config-dir DIR       Directory holding settings.toml
  --data-dir DIR         Directory for stored segments
  -h, --help             Print this help
";

const DEFAULT_TICK_SECS: f64 = 0.02;
const DEFAULT_MAX_TIME_SECS: f64 = 600.0;

/// Command line flags.
#[derive(Debug, Default)]
struct Flags {
    segments_file: PathBuf,
    loop_count: Option<LoopCount>,
    pause_fraction: Option<f64>,
    auto_pause: bool,
    precision: bool,
    tick: Option<f64>,
    max_time: Option<f64>,
    save: bool,
    config_dir: Option<String>,
    data_dir: Option<String>,
}

fn parse_loop_count(value: &str) -> std::result::Result<LoopCount, String> {
    match value.to_lowercase().as_str() {
        "inf" | "infinite" => Ok(LoopCount::Infinite),
        other => other
            .parse::<u32>()
            .map(LoopCount::finite)
            .map_err(|_| format!("invalid loop count: {other}")),
    }
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let arg_error = |e: pico_args::Error| Error::Config(e.to_string());
    let flags = Flags {
        loop_count: args
            .opt_value_from_fn("--loop", parse_loop_count)
            .map_err(arg_error)?,
        pause_fraction: args
            .opt_value_from_str("--pause-fraction")
            .map_err(arg_error)?,
        auto_pause: args.contains("--auto-pause"),
        precision: args.contains("--precision"),
        tick: args.opt_value_from_str("--tick").map_err(arg_error)?,
        max_time: args.opt_value_from_str("--max-time").map_err(arg_error)?,
        save: args.contains("--save"),
        config_dir: args.opt_value_from_str("--config-dir").map_err(arg_error)?,
        data_dir: args.opt_value_from_str("--data-dir").map_err(arg_error)?,
        segments_file: args.free_from_str().map_err(arg_error)?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::Config(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(flags))
}

/// Engine settings from `settings.toml`, overridden by the flags.
fn settings_for(flags: &Flags) -> EngineSettings {
    let (config, warning) = config::load();
    if let Some(key) = warning {
        eprintln!("warning: {key}, using defaults");
    }
    let mut settings = config.engine_settings();
    if let Some(count) = flags.loop_count {
        settings.loop_count = count;
    }
    if let Some(fraction) = flags.pause_fraction {
        settings.inter_pause_fraction = InterPauseFraction::new(fraction);
    }
    if flags.auto_pause {
        settings.auto_pause = true;
    }
    settings
}

fn run<S: SegmentStore>(flags: &Flags, store: S, segments: SegmentList) -> Result<String> {
    let media = MediaId::new(
        flags
            .segments_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("untitled"),
    );
    let duration = segments.iter().map(|s| s.end()).fold(0.0_f64, f64::max);
    let tick = flags
        .tick
        .filter(|t| t.is_finite() && *t > 0.0)
        .unwrap_or(DEFAULT_TICK_SECS);
    let max_time = flags
        .max_time
        .filter(|t| t.is_finite() && *t > 0.0)
        .unwrap_or(DEFAULT_MAX_TIME_SECS);

    let settings = settings_for(flags);
    let mut engine = PlaybackOrchestrator::new(
        SimulatedClock::new(duration),
        store,
        RegionMirror::default(),
        settings,
    );
    engine.load_media(media, Some(segments.into_vec()));
    if flags.loop_count.is_some() {
        engine.toggle_loop_default();
    }
    if flags.precision {
        engine.enter_precision_mode();
    }
    if engine.next().is_err() {
        return Ok(engine.diagnostics().export_json()?);
    }
    engine.clock_mut().play();

    let step = Duration::try_from_secs_f64(tick)
        .map_err(|e| Error::Config(format!("invalid tick: {e}")))?;
    let mut elapsed = 0.0;
    while elapsed < max_time && !engine.clock().ended() {
        // A parked player with nothing queued waits for the listener: resume.
        if engine.clock().is_paused() && !engine.has_pending_continuation() {
            engine.clock_mut().play();
        }
        engine.clock_mut().advance(tick);
        engine.step(step);
        elapsed += tick;
    }

    for warning in engine.drain_warnings() {
        eprintln!("warning: {warning}");
    }
    Ok(engine.diagnostics().export_json()?)
}

fn try_main() -> Result<()> {
    let Some(flags) = parse_flags()? else {
        print!("{HELP}");
        return Ok(());
    };
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let segments = read_segments_file(&flags.segments_file)?;
    let report = if flags.save {
        run(&flags, JsonSegmentStore::from_data_dir(None), segments)?
    } else {
        run(&flags, MemorySegmentStore::new(), segments)?
    };
    println!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("segloop: {error}");
            ExitCode::FAILURE
        }
    }
}
