//! Animate a particle trajectory into `bhs.gif`.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use trajplot::{render_gif, FrameSet, RenderConfig};

/// Render the particle positions in a simulation output file as an animated gif.
///
/// The animation is written to `bhs.gif` in the working directory, one frame per time step.
#[derive(Parser)]
struct Args {
    /// Input path (simulation output text).
    ///
    /// Without it, a usage line is printed and the exit status is 1.
    input: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode, trajplot::Error> {
    let args = Args::parse();
    let Some(input) = args.input else {
        println!("Usage: trajplot <file>");
        return Ok(ExitCode::from(1));
    };

    init_logging();

    let frames = FrameSet::open(&input)?;
    render_gif(&frames, &RenderConfig::default())?;

    Ok(ExitCode::SUCCESS)
}
