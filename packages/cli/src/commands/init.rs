use crate::config::{Config, DEFAULT_CONFIG_NAME, DEFAULT_DOCUMENT_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use resume_document::Document;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let dir = super::resolve(cwd, &args.dir);
    let document_path = dir.join(DEFAULT_DOCUMENT_NAME);
    let config_path = dir.join(DEFAULT_CONFIG_NAME);

    if document_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_DOCUMENT_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing resume...".bright_blue().bold());

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        println!("  {} Created {}/", "✓".green(), args.dir.display());
    }

    let today = chrono::Local::now().date_naive();
    fs::write(&document_path, Document::seeded(today).to_json()?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_DOCUMENT_NAME);

    if !config_path.exists() || args.force {
        let config_json = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&config_path, config_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Resume initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: resume apply {} edits.json", DEFAULT_DOCUMENT_NAME);
    println!("  2. Run: resume preview {} -o resume.html", DEFAULT_DOCUMENT_NAME);

    tracing::debug!(path = %document_path.display(), "seeded document written");
    Ok(())
}
