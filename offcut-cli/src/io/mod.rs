use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use offcut::PackingConfig;
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod svg_export;

/// Grayscale intensities of an image, row-major, one byte per pixel
#[derive(Clone, Debug)]
pub struct MaskImage {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

pub fn read_mask(path: &Path) -> Result<MaskImage> {
    let img = image::open(path)
        .with_context(|| format!("could not open mask image: {}", path.display()))?
        .to_luma8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    Ok(MaskImage {
        data: img.into_raw(),
        width,
        height,
    })
}

pub fn read_config(path: &Path) -> Result<PackingConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;
    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!(
        "[IO] svg written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
