use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use resume_document::{Document, StylePatch};
use resume_editor::{Command, Editor, StyleTarget};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Resume document (JSON)
    pub document: PathBuf,

    /// Script: a JSON array of commands, style edits, "undo" and "redo"
    pub script: PathBuf,

    /// Write the result here instead of overwriting the document
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum HistoryStep {
    Undo,
    Redo,
}

/// One scripted editor interaction
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    History(HistoryStep),
    Style { target: StyleTarget, patch: StylePatch },
    Command(Command),
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    recorded: usize,
    ignored: usize,
    undone: usize,
    redone: usize,
    styles: usize,
}

/// Replay `steps` through an editor session. Style edits coalesce until the
/// next non-style step, as if the user paused.
fn replay(editor: &mut Editor, steps: Vec<Step>) -> Summary {
    let mut summary = Summary::default();
    let mut clock = 0u64;

    for step in steps {
        if !matches!(step, Step::Style { .. }) {
            summary.styles += editor.flush_all_styles();
        }

        match step {
            Step::History(HistoryStep::Undo) => summary.undone += usize::from(editor.undo()),
            Step::History(HistoryStep::Redo) => summary.redone += usize::from(editor.redo()),
            Step::Style { target, patch } => {
                clock += 1;
                editor.queue_style_change(target, patch, clock);
            }
            Step::Command(command) => {
                if editor.dispatch(command) {
                    summary.recorded += 1;
                } else {
                    summary.ignored += 1;
                }
            }
        }
    }
    summary.styles += editor.flush_all_styles();

    summary
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document_path = super::resolve(cwd, &args.document);
    let document: Document = super::read_document(&document_path)?;

    let script_path = super::resolve(cwd, &args.script);
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read script {}", script_path.display()))?;
    let steps: Vec<Step> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    println!("{}", "🔨 Applying edits...".bright_blue().bold());

    let mut editor = Editor::with_options(document, super::now_ms(), config.editor_options());
    let summary = replay(&mut editor, steps);

    let output = args
        .output
        .map(|output| super::resolve(cwd, &output))
        .unwrap_or(document_path);
    fs::write(&output, editor.document().to_json()?)?;

    println!(
        "  {} {} recorded, {} ignored, {} undone, {} redone, {} style commits",
        "✓".green(),
        summary.recorded,
        summary.ignored,
        summary.undone,
        summary.redone,
        summary.styles
    );
    println!("  {} Wrote {}", "✓".green(), output.display());

    Ok(())
}
