use colored::Colorize;

use lxm_merge::{merge_three_way, Conflict};
use lxm_sync::SynchronicMerger;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::MergeUpdates(args) => cmd_merge_updates(args),
        Command::Merge(args) => cmd_merge(args, &cli.format),
        Command::Version(args) => cmd_version(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn cmd_merge_updates(args: MergeUpdatesArgs) -> anyhow::Result<()> {
    let merger = SynchronicMerger::new();
    if args.path.is_dir() {
        merger.merge_directory(&args.path)?;
    } else {
        merger.merge_updates_into_file(&args.path)?;
    }
    println!("{} Updates merged into {}", "✓".green(), args.path.display());
    Ok(())
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let ours = std::fs::read_to_string(&args.ours)?;
    let theirs = std::fs::read_to_string(&args.theirs)?;
    let ancestor = std::fs::read_to_string(&args.ancestor)?;

    let (merged, conflicts) = merge_three_way(&ours, &theirs, &ancestor)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &merged)?;
            println!("{} Merged document written to {}", "✓".green(), path.display());
        }
        None => println!("{merged}"),
    }
    report_conflicts(&conflicts, format)?;
    Ok(())
}

fn report_conflicts(conflicts: &[Conflict], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(conflicts)?);
        }
        OutputFormat::Text => {
            if conflicts.is_empty() {
                eprintln!("{} No conflicts.", "✓".green());
            } else {
                eprintln!(
                    "{} {} conflict(s), resolved deterministically:",
                    "!".yellow().bold(),
                    conflicts.len()
                );
                for conflict in conflicts {
                    eprintln!("  {} {}", conflict.field.yellow(), conflict.description);
                }
            }
        }
    }
    Ok(())
}

fn cmd_version(args: VersionArgs) -> anyhow::Result<()> {
    let version = lxm_model::document_version(&args.file)?;
    println!("{version}");
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    lxm_model::check_version(&args.file)?;
    println!(
        "{} {} conforms to lexicon version {}",
        "✓".green().bold(),
        args.file.display(),
        lxm_model::SUPPORTED_VERSION.bold()
    );
    Ok(())
}
