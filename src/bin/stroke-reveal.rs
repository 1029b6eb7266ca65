use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use stroke_reveal::{
    AnimationSession, CpuCompositor, CpuCompositorOpts, FrameIndex, FrameRGBA, FrameRange,
    LogoConfig, Mount, RenderMode, SessionOpts,
};

#[derive(Parser, Debug)]
#[command(name = "stroke-reveal", version)]
struct Cli {
    /// Logo config JSON. Defaults to the built-in logo.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Soften dots the way final renders do.
    #[arg(long, global = true, default_value_t = false)]
    production: bool,

    /// Log debug diagnostics to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the dot visuals of a single frame as JSON.
    Dump(DumpArgs),
    /// Render a frame range as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames rendered and written per batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let mode = if cli.production {
        RenderMode::Production
    } else {
        RenderMode::Preview
    };

    match cli.cmd {
        Command::Frame(args) => cmd_frame(config, mode, args),
        Command::Dump(args) => cmd_dump(config, mode, args),
        Command::Frames(args) => cmd_frames(config, mode, args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LogoConfig> {
    match path {
        Some(p) => LogoConfig::from_path(p)
            .with_context(|| format!("load logo config '{}'", p.display())),
        None => Ok(LogoConfig::default()),
    }
}

fn mount(config: LogoConfig, opts: SessionOpts) -> anyhow::Result<std::sync::Arc<AnimationSession>> {
    let mut mount = Mount::new(config, opts)?;
    mount.poll_config()?;
    Ok(mount.session()?)
}

fn cmd_frame(config: LogoConfig, mode: RenderMode, args: FrameArgs) -> anyhow::Result<()> {
    let session = mount(
        config,
        SessionOpts {
            mode,
            ..SessionOpts::default()
        },
    )?;
    let compositor = CpuCompositor::new(&session, CpuCompositorOpts::default())?;
    let frame = compositor.render(&session.render(FrameIndex(args.frame)))?;

    ensure_parent_dir(&args.out)?;
    write_png(&args.out, frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump(config: LogoConfig, mode: RenderMode, args: DumpArgs) -> anyhow::Result<()> {
    let session = mount(
        config,
        SessionOpts {
            mode,
            ..SessionOpts::default()
        },
    )?;
    let visuals = session.render(FrameIndex(args.frame));
    let json = serde_json::to_string_pretty(&visuals).context("serialize frame visuals")?;

    match args.out {
        Some(out) => {
            ensure_parent_dir(&out)?;
            std::fs::write(&out, json).with_context(|| format!("write json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frames(config: LogoConfig, mode: RenderMode, args: FramesArgs) -> anyhow::Result<()> {
    let end = args.end.unwrap_or(config.composition.duration_frames);
    let session = mount(
        config,
        SessionOpts {
            mode,
            parallel: args.parallel,
            threads: args.threads,
            chunk_size: args.chunk_size,
        },
    )?;
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let chunks = session.frame_chunks(range)?;
    let compositor = CpuCompositor::new(&session, CpuCompositorOpts::default())?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for chunk in chunks {
        let visuals = session.render_frames(chunk)?;
        let frames = compositor.render_all(&visuals, args.parallel, args.threads)?;
        for (f, frame) in chunk.iter().zip(frames) {
            let out = args.out_dir.join(format!("frame_{:05}.png", f.0));
            write_png(&out, frame)?;
        }
        tracing::debug!(start = chunk.start.0, end = chunk.end.0, "wrote chunk");
    }
    eprintln!(
        "wrote {} frames to {}",
        range.len_frames(),
        args.out_dir.display()
    );
    Ok(())
}

fn ensure_parent_dir(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(out: &Path, frame: FrameRGBA) -> anyhow::Result<()> {
    let frame = frame.into_straight();
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
