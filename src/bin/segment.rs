use std::{
    io::Write as _,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use stroke_segment::{
    AnimationState, DrawOptions, Ease, Endpoint, HostEvent, ManualScheduler, Scheduler as _,
    Segment, StrokePath, secs_to_duration,
};

#[derive(Parser, Debug)]
#[command(name = "segment", version)]
struct Cli {
    /// Log more (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dash pattern that shows one sub-range of a path.
    Dash(DashArgs),
    /// Simulate an animated draw and print one JSON line per rendered frame.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct PathArgs {
    /// SVG path data (`d` attribute).
    #[arg(long, required_unless_present = "in_path", conflicts_with = "in_path")]
    path: Option<String>,

    /// File holding SVG path data.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DashArgs {
    #[command(flatten)]
    path: PathArgs,

    /// Range start: a length or a percentage expression such as `10%` or `50%-20`.
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    begin: String,

    /// Range end.
    #[arg(long, allow_hyphen_values = true, default_value = "100%")]
    end: String,

    /// Wrap the range around the path.
    #[arg(long)]
    circular: bool,

    /// Also print the visible portion as SVG path data.
    #[arg(long)]
    svg: bool,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    path: PathArgs,

    /// Range start shown before the animation.
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    from_begin: String,

    /// Range end shown before the animation.
    #[arg(long, allow_hyphen_values = true, default_value = "100%")]
    from_end: String,

    /// Target range start.
    #[arg(long, allow_hyphen_values = true, default_value = "0")]
    begin: String,

    /// Target range end.
    #[arg(long, allow_hyphen_values = true)]
    end: String,

    /// Animation length in seconds.
    #[arg(long, default_value_t = 1.0)]
    duration: f64,

    /// Start delay in seconds.
    #[arg(long, default_value_t = 0.0)]
    delay: f64,

    /// Easing preset (`linear`, `out-cubic`, `cubic-bezier(0.4, 0, 0.2, 1)`, ...).
    #[arg(long)]
    ease: Option<Ease>,

    /// Wrap the range around the path.
    #[arg(long)]
    circular: bool,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Give up after this many frames.
    #[arg(long, default_value_t = 100_000)]
    max_frames: usize,
}

#[derive(serde::Serialize)]
struct FrameLine<'a> {
    time: f64,
    state: AnimationState,
    begin: f64,
    end: f64,
    dasharray: &'a [f64],
    dashoffset: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Dash(args) => cmd_dash(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_path(args: &PathArgs) -> anyhow::Result<StrokePath> {
    let d = match (&args.path, &args.in_path) {
        (Some(d), _) => d.clone(),
        (None, Some(file)) => read_path_data(file)?,
        (None, None) => anyhow::bail!("one of --path or --in is required"),
    };
    Ok(StrokePath::from_svg(&d)?)
}

fn read_path_data(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("read path data '{}'", file.display()))
}

fn cmd_dash(args: DashArgs) -> anyhow::Result<()> {
    let path = load_path(&args.path)?;
    let seg = Segment::with_range(
        path,
        Endpoint::from(args.begin),
        Endpoint::from(args.end),
        args.circular,
    )
    .context("resolve range")?;

    let surface = seg.path();
    let dash = surface
        .dash_array()
        .context("no dash pattern applied (bug)")?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "length: {}", seg.total_length())?;
    writeln!(out, "range: {} {}", seg.begin(), seg.end())?;
    writeln!(out, "dasharray: {dash}")?;
    writeln!(out, "dashoffset: {}", surface.dash_offset())?;
    let visible: Vec<String> = surface
        .visible_ranges()
        .iter()
        .map(|r| format!("{}..{}", r.start, r.end))
        .collect();
    writeln!(out, "visible: {}", visible.join(" "))?;
    if args.svg {
        writeln!(out, "svg: {}", surface.visible_path().to_svg())?;
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let path = load_path(&args.path)?;
    let mut seg = Segment::with_range(
        path,
        Endpoint::from(args.from_begin),
        Endpoint::from(args.from_end),
        args.circular,
    )
    .context("resolve initial range")?;

    let mut sched = ManualScheduler::at_fps(args.fps)?;
    let mut options = DrawOptions::new()
        .delay_secs(args.delay)
        .context("invalid --delay")?
        .circular(args.circular);
    if let Some(ease) = args.ease {
        options = options.easing(ease);
    }
    let duration: Duration = secs_to_duration(args.duration).context("invalid --duration")?;

    let mut out = std::io::stdout().lock();
    emit(&mut out, &sched, &seg)?;

    seg.draw(
        &mut sched,
        Endpoint::from(args.begin),
        Endpoint::from(args.end),
        duration,
        options,
    )
    .context("resolve target range")?;
    if duration.is_zero() {
        emit(&mut out, &sched, &seg)?;
        return Ok(());
    }

    let mut frames = 0usize;
    while !sched.is_idle() {
        if frames >= args.max_frames {
            anyhow::bail!("animation still running after {frames} frames");
        }
        for event in sched.step() {
            if seg.handle_event(&mut sched, event) && matches!(event, HostEvent::Frame(_)) {
                emit(&mut out, &sched, &seg)?;
            }
        }
        frames += 1;
    }

    tracing::info!(frames, "animation finished");
    Ok(())
}

fn emit(
    out: &mut impl std::io::Write,
    sched: &ManualScheduler,
    seg: &Segment<StrokePath>,
) -> anyhow::Result<()> {
    let surface = seg.path();
    let line = FrameLine {
        time: sched.now().as_secs_f64(),
        state: seg.state(),
        begin: seg.begin(),
        end: seg.end(),
        dasharray: surface.dash_array().map(|d| d.as_slice()).unwrap_or_default(),
        dashoffset: surface.dash_offset(),
    };
    serde_json::to_writer(&mut *out, &line).context("write frame")?;
    writeln!(out)?;
    Ok(())
}
