use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use kinetic::{Engine, ManualClock, ManualScheduler, PlaybackEvent, Project};

#[derive(Parser, Debug)]
#[command(name = "kinetic", version)]
struct Cli {
    /// Log engine activity to stderr (repeat for more detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a project, printing authoring diagnostics.
    Validate(ValidateArgs),
    /// Resolve every layer at one timeline position and print the result as JSON.
    Sample(SampleArgs),
    /// Run headless playback on a simulated clock and print final metrics as JSON.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Timeline position in seconds.
    #[arg(long)]
    time: f64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Playback rate.
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Loop at the end instead of stopping.
    #[arg(long = "loop")]
    looping: bool,

    /// Stop after this many frame callbacks.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn read_project(path: &Path) -> anyhow::Result<Project> {
    Project::from_path(path).with_context(|| format!("load project '{}'", path.display()))
}

type HeadlessEngine = Engine<ManualClock, ManualScheduler>;

fn headless_engine(project: Project) -> anyhow::Result<(HeadlessEngine, ManualClock)> {
    let clock = ManualClock::new(0.0);
    let mut engine = Engine::new(clock.clone(), ManualScheduler::new());
    engine.load_project(project).context("load project into engine")?;
    Ok((engine, clock))
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    project
        .validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;

    let diagnostics = project.diagnostics();
    for msg in &diagnostics {
        println!("warning: {msg}");
    }
    println!(
        "ok: '{}' ({} layers, {:.3}s, {} warnings)",
        project.id,
        project.layers.len(),
        project.duration,
        diagnostics.len()
    );
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let project = read_project(&args.in_path)?;
    let (mut engine, _clock) = headless_engine(project)?;
    engine.seek(args.time).context("seek")?;

    let project = engine
        .project()
        .context("engine has no project after load")?;
    let out = serde_json::json!({
        "time": project.timeline.current_time,
        "layers": kinetic::snapshot(project),
        "metrics": engine.performance_metrics(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0 (got {})", args.fps);
    }
    let project = read_project(&args.in_path)?;
    let duration = project.duration;
    let (mut engine, clock) = headless_engine(project)?;
    engine.set_playback_rate(args.rate).context("set playback rate")?;
    engine.set_loop(args.looping);

    // Looping runs never end on their own; default to one pass over the timeline.
    let natural = (duration / args.rate * args.fps).ceil() as u64 + 1;
    let max_frames = args.max_frames.unwrap_or(natural);
    let frame_ms = 1000.0 / args.fps;

    engine.play();
    let mut frames = 0u64;
    while frames < max_frames {
        let Some(ticket) = engine.scheduler_mut().take_pending() else {
            break;
        };
        clock.advance(frame_ms);
        engine.on_frame(ticket);
        frames += 1;
    }
    engine.pause();

    let events = engine.drain_events();
    let loops = events
        .iter()
        .filter(|e| matches!(e, PlaybackEvent::Looped))
        .count();
    let ended = events
        .iter()
        .any(|e| matches!(e, PlaybackEvent::Ended { .. }));

    let out = serde_json::json!({
        "frames": frames,
        "currentTime": engine.current_time(),
        "ended": ended,
        "loops": loops,
        "metrics": engine.performance_metrics(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
