use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Grayscale occupancy mask, light pixels are free material
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Physical width depicted by the mask, in millimeters
    #[arg(long, value_name = "MM")]
    pub width_mm: f64,
    /// Physical height depicted by the mask, in millimeters
    #[arg(long, value_name = "MM")]
    pub height_mm: f64,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
