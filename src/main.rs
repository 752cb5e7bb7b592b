//! abc-render - renders ABC-style notation files to 16-bit mono WAV (or OGG via ffmpeg)

use abc_render::engine::{RenderEngine, RenderOptions, RenderOutcome};
use abc_render::processor::MasteringContext;
use abc_render::score::Score;
use abc_render::track::InstrumentType;
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "abc-render")]
#[command(about = "Render ABC notation to game-ready audio")]
#[command(version)]
struct Cli {
    /// Notation files, or directories to search for `*.abc` files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (defaults to next to each input)
    #[arg(short, long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Loudness target; `auto` picks `ending` for files with `game_over` in their name
    #[arg(long, value_enum, default_value_t = ContextArg::Auto)]
    context: ContextArg,

    /// Encode to OGG Vorbis with ffmpeg, keeping the WAV if encoding fails
    #[arg(long)]
    ogg: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ContextArg {
    Auto,
    Standard,
    Ending,
}

impl ContextArg {
    fn resolve(self, stem: &str) -> MasteringContext {
        match self {
            // Ending pieces are recognised by a `game_over` marker in their file stem.
            ContextArg::Auto if stem.to_lowercase().contains("game_over") => {
                MasteringContext::Ending
            }
            ContextArg::Auto => MasteringContext::Standard,
            ContextArg::Standard => MasteringContext::Standard,
            ContextArg::Ending => MasteringContext::Ending,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(dir) = &cli.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let mut converted = vec![];
    for input in collect_inputs(&cli.inputs) {
        match convert(&cli, &input) {
            Ok(Some(output)) => converted.push(output),
            Ok(None) => {}
            Err(err) => warn!("{}: {err:#}", input.display()),
        }
    }

    info!("Converted {} file(s)", converted.len());
    for output in &converted {
        info!("  {}", output.display());
    }
    Ok(())
}

/// Expands directories to their `*.abc` files, sorted. Missing paths are reported and skipped.
fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = vec![];
    for input in inputs {
        if input.is_dir() {
            match fs::read_dir(input) {
                Ok(entries) => {
                    let mut found: Vec<PathBuf> = entries
                        .filter_map(|e| e.ok())
                        .map(|e| e.path())
                        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "abc"))
                        .collect();
                    found.sort();
                    if found.is_empty() {
                        warn!("No .abc files in {}", input.display());
                    }
                    files.extend(found);
                }
                Err(err) => warn!("Cannot read directory {}: {err}", input.display()),
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            warn!("File not found: {}", input.display());
        }
    }
    files
}

fn convert(cli: &Cli, input: &Path) -> Result<Option<PathBuf>> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let score = Score::parse(&text);
    info!(
        "Converting {} ({} voice(s), tempo {})",
        input.display(),
        score.voices.len(),
        score.tempo
    );
    for voice in score.voices() {
        info!(
            "  V:{} {} -> {} ({} events)",
            voice.id,
            voice.name,
            InstrumentType::from_name(&voice.name),
            voice.events.len()
        );
    }

    let options = RenderOptions {
        seed: cli.seed,
        context: cli.context.resolve(&stem),
        ..Default::default()
    };
    let sample = match RenderEngine::new(options).render(&score) {
        RenderOutcome::Rendered(sample) => sample,
        RenderOutcome::Empty => {
            warn!("{}: nothing to render", input.display());
            return Ok(None);
        }
    };

    let dir = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let wav_path = dir.join(format!("{stem}.wav"));
    sample
        .write_wav(&wav_path)
        .with_context(|| format!("Failed to write {}", wav_path.display()))?;
    info!(
        "  {:.2}s at {} Hz, {} context -> {}",
        sample.duration_seconds(),
        sample.sample_rate(),
        options.context,
        wav_path.display()
    );

    if !cli.ogg {
        return Ok(Some(wav_path));
    }
    let ogg_path = dir.join(format!("{stem}.ogg"));
    match encode_ogg(&wav_path, &ogg_path) {
        Ok(()) => {
            if let Err(err) = fs::remove_file(&wav_path) {
                warn!(
                    "Encoded {} but could not remove {}: {err}",
                    ogg_path.display(),
                    wav_path.display()
                );
            }
            Ok(Some(ogg_path))
        }
        Err(err) => {
            warn!("OGG encoding failed, keeping {}: {err:#}", wav_path.display());
            Ok(Some(wav_path))
        }
    }
}

fn encode_ogg(wav: &Path, ogg: &Path) -> Result<()> {
    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(wav)
        .args(["-c:a", "libvorbis", "-q:a", "5"])
        .arg(ogg)
        .arg("-y")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .context("Failed to run ffmpeg")?;
    if !output.status.success() {
        bail!(
            "ffmpeg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
