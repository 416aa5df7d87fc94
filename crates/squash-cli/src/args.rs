use clap::Parser;
use squash_optimizer::OptionSet;
use std::path::PathBuf;

/// CLI arguments for the squash binary.
#[derive(Parser, Debug)]
#[command(
    name = "squash",
    version,
    about = "Rewrite JavaScript syntax trees into smaller equivalent programs"
)]
pub struct CliArgs {
    /// Comma-separated passes to run, e.g. `literals,arrow-fn`.
    /// Without this flag every pass runs.
    #[arg(long, value_name = "LIST", conflicts_with = "all")]
    pub passes: Option<OptionSet>,

    /// Run every pass.
    #[arg(long)]
    pub all: bool,

    /// Repeat rounds until one changes nothing.
    #[arg(long)]
    pub fixpoint: bool,

    /// Write the rewritten tree as JSON instead of printing it.
    #[arg(long)]
    pub json: bool,

    /// JSON-serialized syntax trees to process.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl CliArgs {
    /// Passes selected on the command line.
    #[must_use]
    pub fn options(&self) -> OptionSet {
        match self.passes {
            Some(passes) if !self.all => passes,
            _ => OptionSet::all(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
