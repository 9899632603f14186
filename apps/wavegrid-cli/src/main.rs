use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wavegrid_common::{GridSpec, PointerNormalized, ViewportSize};
use wavegrid_runtime::{Backdrop, FrameHost};
use wavegrid_scene::{GridScene, RecordingSurface, SvgSurface};

#[derive(Parser)]
#[command(name = "wavegrid-cli", about = "Headless wavegrid operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective default configuration
    Info,
    /// Render one frame to a standalone SVG file
    Svg {
        /// Output path
        #[arg(short, long, default_value = "frame.svg")]
        out: String,
        /// Viewport width in pixels
        #[arg(long, default_value = "1920")]
        width: u32,
        /// Viewport height in pixels
        #[arg(long, default_value = "1080")]
        height: u32,
        /// Time phase to render at
        #[arg(long, default_value = "0.0")]
        phase: f32,
        /// Lattice columns
        #[arg(long, default_value = "22")]
        columns: u32,
        /// Lattice rows
        #[arg(long, default_value = "16")]
        rows: u32,
    },
    /// Drive frames through the full runtime and report lattice statistics
    Probe {
        /// Number of frames to render
        #[arg(short, long, default_value = "600")]
        frames: u32,
        /// Lattice columns
        #[arg(long, default_value = "22")]
        columns: u32,
        /// Lattice rows
        #[arg(long, default_value = "16")]
        rows: u32,
    },
}

/// Headless frame host: frames are delivered by the probe loop itself, so
/// scheduling and cancellation are no-ops.
#[derive(Default)]
struct HeadlessHost;

impl FrameHost for HeadlessHost {
    type Handle = ();

    fn schedule_frame(&mut self) {}

    fn cancel_frame(&mut self, (): ()) {}
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("wavegrid-cli v{}", env!("CARGO_PKG_VERSION"));
            let spec = GridSpec::default();
            println!("default grid: {}", serde_json::to_string_pretty(&spec)?);
            println!(
                "per frame: {} vertices, {} edges",
                spec.vertex_count(),
                spec.edge_count()
            );
        }
        Commands::Svg {
            out,
            width,
            height,
            phase,
            columns,
            rows,
        } => {
            let spec = GridSpec::new(columns, rows, 120.0, 80.0)?;
            let scene = GridScene::new(spec);
            let viewport = ViewportSize::new(width, height);

            let mut surface = SvgSurface::new(viewport);
            scene.paint(&mut surface, viewport, PointerNormalized::default(), phase);

            std::fs::write(&out, surface.document())
                .with_context(|| format!("writing {out}"))?;
            tracing::info!(edges = spec.edge_count(), "wrote {out}");
        }
        Commands::Probe {
            frames,
            columns,
            rows,
        } => {
            let spec = GridSpec::new(columns, rows, 120.0, 80.0)?;
            let scene = GridScene::new(spec);
            let viewport = ViewportSize::new(1920, 1080);
            let mut backdrop = Backdrop::new(scene, HeadlessHost::default(), viewport);
            backdrop.start();

            let mut surface = RecordingSurface::new();
            let started = Instant::now();
            for frame in 0..frames {
                backdrop.render_frame(&mut surface);
                if surface.lines.len() != spec.edge_count() {
                    anyhow::bail!(
                        "frame {frame}: stroked {} edges, expected {}",
                        surface.lines.len(),
                        spec.edge_count()
                    );
                }
            }
            let elapsed = started.elapsed();
            backdrop.stop();

            println!(
                "{frames} frames, {} edges each, {} clears, {:.2?} total ({:.1} us/frame)",
                spec.edge_count(),
                surface.clears,
                elapsed,
                elapsed.as_secs_f64() * 1e6 / f64::from(frames.max(1)),
            );
        }
    }

    Ok(())
}
