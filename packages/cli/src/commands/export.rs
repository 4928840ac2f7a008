use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use resume_export::{Exporter, Prerendered, RasterImage};
use resume_preview::{render_document, RenderOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Resume document (JSON)
    pub document: PathBuf,

    /// JPEG rendering of the preview region
    #[arg(long)]
    pub raster: PathBuf,

    /// Full name used when the profile names files after the person
    #[arg(long, default_value = "")]
    pub name: String,

    /// Output PDF (defaults to the profile's file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = super::read_document(&super::resolve(cwd, &args.document))?;

    let raster_path = super::resolve(cwd, &args.raster);
    let jpeg = fs::read(&raster_path)
        .with_context(|| format!("Cannot read raster {}", raster_path.display()))?;
    let raster = RasterImage::from_jpeg(jpeg)
        .map_err(|err| anyhow!("Invalid raster {}: {}", raster_path.display(), err))?;

    println!("{}", "📄 Exporting PDF...".bright_blue().bold());

    let region_html = render_document(&document, RenderOptions::compact());
    let exporter = Exporter::new(Prerendered(raster), config.export);
    let file = exporter
        .export(&region_html, &args.name)
        .ok_or_else(|| anyhow!("Error generating PDF"))?;

    let output = args
        .output
        .map(|output| super::resolve(cwd, &output))
        .unwrap_or_else(|| PathBuf::from(cwd).join(&file.file_name));
    fs::write(&output, &file.bytes)?;

    println!("  {} Wrote {} ({} bytes)", "✓".green(), output.display(), file.bytes.len());
    Ok(())
}
