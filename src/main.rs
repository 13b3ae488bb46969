//! color-replacer: Rewrite hex color tokens across a source tree.
//!
//! Walks `./src` (or a configured root), picks markup, script and stylesheet
//! files by suffix, applies the ordered case-insensitive rule table to each,
//! and writes back only the files whose content changed.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Commands, TargetArgs};
use color_replacer::{ColorReplacer, FileOutcome, scanner};
use colored::Colorize;

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command.unwrap_or_default() {
        Commands::Replace {
            target,
            json,
            verbose,
            strict,
        } => cmd_replace(target, json, verbose, strict),
        Commands::Scan { target } => cmd_scan(target),
        Commands::Rules { target } => cmd_rules(target),
    }
}

fn cmd_replace(target: TargetArgs, json_output: bool, verbose: bool, strict: bool) -> Result<()> {
    let replacer = ColorReplacer::new(target.into_config()?)?;

    if !json_output {
        println!(
            "{} {}",
            "Scanning directory:".bold(),
            replacer.root().display()
        );
    }

    let summary = replacer.run_with(|outcome| match outcome {
        FileOutcome::Updated { path, replacements } => {
            if !json_output {
                println!("{} {}", "Updated:".yellow().bold(), path.display());
            }
            if verbose {
                eprintln!(
                    "{} {} replacement(s) in {}",
                    "info:".blue().bold(),
                    replacements,
                    path.display()
                );
            }
        }
        FileOutcome::Failed(err) => {
            eprintln!(
                "{} Error processing {}: {}",
                "error:".red().bold(),
                err.path.display(),
                err.cause
            );
        }
        FileOutcome::Unchanged(path) => {
            if verbose {
                eprintln!("{} {}", "unchanged:".dimmed(), path.display());
            }
        }
    });

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} files updated.",
            "Comparison complete.".green().bold(),
            summary.files_changed
        );
    }

    if strict && summary.has_errors() {
        anyhow::bail!("{} file(s) could not be processed", summary.errors.len());
    }

    Ok(())
}

fn cmd_scan(target: TargetArgs) -> Result<()> {
    let config = target.into_config()?;
    let files = scanner::collect_candidate_files(&config);

    println!("Would scan {} files:", files.len());
    for file in files {
        println!("  {}", file.display());
    }

    Ok(())
}

fn cmd_rules(target: TargetArgs) -> Result<()> {
    let replacer = ColorReplacer::new(target.into_config()?)?;

    for (i, rule) in replacer.config().rules.iter().enumerate() {
        println!(
            "{:>3}. {} -> {}",
            i + 1,
            rule.pattern.red(),
            rule.replacement.green()
        );
    }

    Ok(())
}
