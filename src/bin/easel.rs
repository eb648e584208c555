use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "easel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tick a sketch headlessly and write a per-frame JSON trace.
    Run(RunArgs),
    /// List the built-in palette groups and their palettes.
    Palettes,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Control values JSON. Defaults are used when omitted.
    #[arg(long)]
    controls: Option<PathBuf>,

    /// Number of frames to tick.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output trace path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Include every recorded draw command in the trace.
    #[arg(long, default_value_t = false)]
    commands: bool,
}

#[derive(serde::Serialize)]
struct TraceFrame {
    report: easel::FrameReport,
    draw_calls: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<Vec<easel::DrawCommand>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Palettes => cmd_palettes(),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }
    let controls = match &args.controls {
        Some(path) => easel::ControlValues::from_path(path)
            .with_context(|| format!("load controls '{}'", path.display()))?,
        None => easel::ControlValues::default(),
    };

    let mut sketch = easel::Sketch::new(&controls).context("build sketch")?;
    let mut recorder = easel::Recorder::new();
    let mut trace = Vec::with_capacity(args.frames as usize);
    for f in 0..args.frames {
        let report = sketch
            .tick(f as f64 / args.fps, &controls, &mut recorder)
            .with_context(|| format!("tick frame {f}"))?;
        let commands = recorder.take();
        trace.push(TraceFrame {
            report,
            draw_calls: commands.len(),
            commands: args.commands.then_some(commands),
        });
    }
    tracing::info!(frames = args.frames, "sketch run complete");

    let json = serde_json::to_string_pretty(&trace).context("serialize trace")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write trace '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    let registry = easel::PaletteRegistry::builtin();
    for group in registry.groups() {
        let names: Vec<&str> = registry
            .all()
            .iter()
            .filter(|p| p.group() == group)
            .map(|p| p.name.as_str())
            .collect();
        println!("{group}: {}", names.join(", "));
    }
    Ok(())
}
