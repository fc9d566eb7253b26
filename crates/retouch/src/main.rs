//! retouch: batch CLI for the retouch editing core.
//!
//! Loads an image file, applies a sequence of named effects through an
//! [`EditorSession`], and writes the result as PNG. Useful for
//! exercising the filter set without a GUI frontend:
//!
//! ```text
//! cargo run --bin retouch -- photo.jpg -o out.png --effect blur --effect grayscale
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;
use retouch_filters::FilterKind;
use retouch_session::{EditorSession, EffectOutcome};

/// Apply pixel effects to an image file.
#[derive(Parser)]
#[command(name = "retouch", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP).
    input: PathBuf,

    /// Output image path (written as PNG).
    #[arg(short, long)]
    output: PathBuf,

    /// Effect to apply; repeat the flag to chain effects in order.
    #[arg(long = "effect", value_enum)]
    effects: Vec<Effect>,
}

/// CLI-facing effect names, mapped onto the library's filter set.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Effect {
    /// 3x3 bounds-aware box blur.
    Blur,
    /// Luma-weighted grayscale.
    Grayscale,
    /// 1.5x saturation boost.
    Saturate,
    /// Additive channel shift with wraparound.
    ColorShift,
    /// Color complement.
    Invert,
}

impl From<Effect> for FilterKind {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Blur => Self::Blur,
            Effect::Grayscale => Self::Grayscale,
            Effect::Saturate => Self::Saturate,
            Effect::ColorShift => Self::ColorShift,
            Effect::Invert => Self::Invert,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut session = EditorSession::new();
    let dimensions = session
        .load_path(&cli.input)
        .map_err(|e| e.to_string())?;
    println!(
        "{}: {}x{}",
        cli.input.display(),
        dimensions.width,
        dimensions.height
    );

    for &effect in &cli.effects {
        let filter = FilterKind::from(effect);
        let generation = session.apply(filter);
        // Batch mode: wait for each effect before chaining the next.
        let reports = session.wait_idle();
        debug!("generation {generation} reports: {reports:?}");
        match reports.last().map(|r| r.outcome) {
            Some(EffectOutcome::Applied) => println!("applied {}", filter.label()),
            Some(EffectOutcome::Cancelled) => println!("{} was cancelled", filter.label()),
            Some(EffectOutcome::NoImage) | None => {
                return Err("no image loaded".to_string());
            }
        }
    }

    let buffer = session
        .snapshot()
        .ok_or_else(|| "no image loaded".to_string())?;
    buffer
        .as_rgba()
        .save(&cli.output)
        .map_err(|e| format!("failed to write {}: {e}", cli.output.display()))?;
    println!("wrote {}", cli.output.display());
    Ok(())
}
