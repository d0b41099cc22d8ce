use canny_scale::config::load_stage_tool_config;
use canny_scale::image::io::load_grayscale_image;
use canny_scale::pipeline::{format_sigma, run_pipeline, save_image_outputs};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_stage_tool_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let gray = load_grayscale_image(&config.input).map_err(|e| e.to_string())?;
    let output = run_pipeline(&gray.as_view(), &config.canny).map_err(|e| e.to_string())?;

    let base = match &config.output.basename {
        Some(name) => name.clone(),
        None => config
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or("Input path has no file name")?
            .to_string(),
    };
    let report = save_image_outputs(
        &output,
        &config.input,
        &base,
        &config.output.dir,
        &config.output.extension,
        &config.canny,
    )
    .map_err(|e| e.to_string())?;

    for scale in &report.scales {
        let counts: Vec<String> = scale
            .edges
            .iter()
            .map(|e| {
                format!(
                    "({}, {}) -> {}",
                    e.thresholds.high, e.thresholds.low, e.edge_pixels
                )
            })
            .collect();
        println!(
            "sigma={} kernel={} edges: {}",
            format_sigma(scale.sigma),
            scale.kernel.size,
            counts.join(", ")
        );
    }
    println!(
        "Saved {} images for {} to {}",
        report.artifacts_written,
        base,
        config.output.dir.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_stages <config.json>".to_string()
}
