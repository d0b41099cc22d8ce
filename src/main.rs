//! canny_scale CLI: run the multi-scale edge pipeline over a folder of images.

use canny_scale::config::{load_canny_config, CannyConfig};
use canny_scale::image::io::{ensure_dir, list_input_images, load_grayscale_image};
use canny_scale::pipeline::{run_pipeline, save_image_outputs};
use clap::Parser;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "canny_scale")]
#[command(about = "Multi-scale Canny edge detection over a folder of grayscale images")]
#[command(version)]
struct Cli {
    /// Folder containing the input images.
    #[arg(long)]
    input_folder: PathBuf,

    /// Folder receiving every stage image (created if missing).
    #[arg(long)]
    output_folder: PathBuf,

    /// Extension of input images (e.g. png).
    #[arg(long)]
    input_ext: String,

    /// Extension for output images (e.g. png).
    #[arg(long)]
    output_ext: String,

    /// JSON file overriding scales, thresholds and other pipeline parameters.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => load_canny_config(path)?,
        None => CannyConfig::default(),
    };
    config.validate()?;

    ensure_dir(&cli.output_folder)?;
    let images = list_input_images(&cli.input_folder, &cli.input_ext)?;
    if images.is_empty() {
        log::info!(
            "No images with extension '.{}' found in {}",
            cli.input_ext.trim_start_matches('.'),
            cli.input_folder.display()
        );
        return Ok(());
    }

    let mut failed = 0usize;
    for path in &images {
        if let Err(err) = process_image(path, cli, &config) {
            failed += 1;
            log::error!("Skipping {}: {err}", path.display());
        }
    }

    log::info!(
        "Processed {} of {} images; results in {}",
        images.len() - failed,
        images.len(),
        cli.output_folder.display()
    );
    Ok(())
}

fn process_image(path: &Path, cli: &Cli, config: &CannyConfig) -> CliResult<()> {
    let base = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("cannot derive a base name from {}", path.display()))?;
    log::info!("Processing {}", path.display());

    let gray = load_grayscale_image(path)?;
    let output = run_pipeline(&gray.as_view(), config)?;
    for scale in &output.scales {
        log::info!(
            "  sigma={}: kernel {}x{}, {:.1} ms",
            scale.sigma,
            scale.kernel_size.size,
            scale.kernel_size.size,
            scale.timing.total_ms
        );
    }

    let report = save_image_outputs(
        &output,
        path,
        base,
        &cli.output_folder,
        &cli.output_ext,
        config,
    )?;
    log::info!(
        "Finished {base}: {} files in {:.1} ms",
        report.artifacts_written,
        report.total_ms
    );
    Ok(())
}
