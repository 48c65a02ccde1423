use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lxm",
    about = "Lexicon document merging — synchronic and three-way",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fold pending sidecar update files into a base lexicon file
    MergeUpdates(MergeUpdatesArgs),
    /// Three-way merge of two divergent edits against a common ancestor
    Merge(MergeArgs),
    /// Print the schema version a lexicon file declares
    Version(VersionArgs),
    /// Check a lexicon file against the supported schema version
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct MergeUpdatesArgs {
    /// Base lexicon file, or a directory holding the reserved base name
    pub path: PathBuf,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Our edited copy
    pub ours: PathBuf,
    /// Their edited copy
    pub theirs: PathBuf,
    /// The common ancestor
    pub ancestor: PathBuf,
    /// Write the merged document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct VersionArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ValidateArgs {
    pub file: PathBuf,
}
