use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arise", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Step the page and write per-frame snapshots as JSON.
    Simulate(SimulateArgs),
    /// Render the page at one point in time as a wireframe PNG.
    Frame(FrameArgs),
    /// Print the default page configuration.
    Config,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Page configuration JSON; defaults apply to anything it omits.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scripted pointer/scroll input JSON.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Seconds to simulate.
    #[arg(long, default_value_t = 6.0)]
    seconds: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Time in seconds.
    #[arg(long)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Config => cmd_config(),
    }
}

fn load(run: &RunArgs) -> anyhow::Result<(arise::LandingPage, arise::Script, arise::Fps)> {
    let config = match &run.config {
        Some(path) => arise::PageConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => arise::PageConfig::default(),
    };
    let script = match &run.script {
        Some(path) => arise::Script::from_path(path)
            .with_context(|| format!("load script '{}'", path.display()))?,
        None => arise::Script::default(),
    };
    let fps = arise::Fps::new(run.fps, 1)?;
    let page = arise::LandingPage::new(config).context("build page")?;
    Ok((page, script, fps))
}

fn seconds_to_frames(fps: arise::Fps, seconds: f64) -> anyhow::Result<u64> {
    if !(seconds.is_finite() && seconds >= 0.0) {
        anyhow::bail!("time must be finite and >= 0, got {seconds}");
    }
    let frames = fps.secs_to_frames_floor(seconds);
    if frames > arise::MAX_FRAMES {
        anyhow::bail!(
            "{seconds}s at {} fps is {frames} frames, more than the limit of {}",
            fps.as_f64(),
            arise::MAX_FRAMES
        );
    }
    Ok(frames)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let (page, script, fps) = load(&args.run)?;
    let frames = seconds_to_frames(fps, args.seconds)?.max(1);
    let snapshots = arise::simulate(page, &script, fps, frames)?;

    match &args.out {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer(&mut w, &snapshots).context("write frames JSON")?;
            w.flush()?;
            eprintln!("wrote {} frames to {}", snapshots.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &snapshots).context("write frames JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (page, script, fps) = load(&args.run)?;
    let frame = seconds_to_frames(fps, args.at)?;

    let mut sim = arise::Simulation::new(page, &script, fps)?;
    sim.seek(arise::FrameIndex(frame))?;
    arise::render::write_png(sim.page().scene(), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&arise::PageConfig::default())?;
    println!("{json}");
    Ok(())
}
