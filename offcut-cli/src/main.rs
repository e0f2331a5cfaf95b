use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use offcut::io::export::export_solution;
use offcut::{CancellationToken, PackingConfig, pack_rectangles};
use offcut_cli::io;
use offcut_cli::io::cli::Cli;
use offcut_cli::io::output::{ExtMask, PackOutput};
use offcut_cli::io::svg_export::solution_to_svg;
use offcut_cli::listener::LogListener;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PackingConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    let config = config.sanitized();
    info!("[MAIN] Successfully parsed PackingConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let mask = io::read_mask(&args.input_file)?;
    info!(
        "[MAIN] mask loaded: {}x{}px depicting {}x{}mm",
        mask.width, mask.height, args.width_mm, args.height_mm
    );

    let token = CancellationToken::new();
    {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("[MAIN] Received Ctrl-C, cancelling the scan...");
                token.cancel();
            }
        });
    }

    let mut listener = LogListener::default();
    let outcome = pack_rectangles(
        &mask.data,
        mask.width,
        mask.height,
        args.width_mm,
        args.height_mm,
        &config,
        &mut listener,
        &token,
    )
    .await?;

    let solution = export_solution(&outcome);
    {
        let svg_path = args.solution_folder.join(format!("sol_{input_stem}.svg"));
        let svg = solution_to_svg(&solution, args.width_mm, args.height_mm, &config, &input_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }
    {
        let output = PackOutput {
            mask: ExtMask {
                name: input_stem.clone(),
                width_px: mask.width,
                height_px: mask.height,
                width_mm: args.width_mm,
                height_mm: args.height_mm,
            },
            solution,
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    Ok(())
}
