mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apply, export, init, preview, ApplyArgs, ExportArgs, InitArgs, PreviewArgs};

/// Resume builder CLI - edit, preview and export resume documents
#[derive(Parser, Debug)]
#[command(name = "resume")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a seeded resume and default config
    Init(InitArgs),

    /// Render a resume document to HTML
    Preview(PreviewArgs),

    /// Replay a script of editor steps against a document
    Apply(ApplyArgs),

    /// Assemble a PDF from a rasterized preview
    Export(ExportArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Preview(args) => preview(args, &cwd),
        Command::Apply(args) => apply(args, &cwd),
        Command::Export(args) => export(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
