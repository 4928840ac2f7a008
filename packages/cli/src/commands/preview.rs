use anyhow::Result;
use clap::Args;
use colored::Colorize;
use resume_preview::{render_document, RenderOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Resume document (JSON)
    pub document: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit single-line HTML
    #[arg(long)]
    pub compact: bool,
}

pub fn preview(args: PreviewArgs, cwd: &str) -> Result<()> {
    let document = super::read_document(&super::resolve(cwd, &args.document))?;

    let options = if args.compact {
        RenderOptions::compact()
    } else {
        RenderOptions::default()
    };
    let html = render_document(&document, options);

    match args.output {
        Some(output) => {
            let output = super::resolve(cwd, &output);
            fs::write(&output, &html)?;
            println!("  {} {} → {}", "✓".green(), args.document.display(), output.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
