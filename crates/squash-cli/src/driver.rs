use anyhow::{Context, Result};
use rayon::prelude::*;
use squash_ast::Module;
use squash_optimizer::{OptionSet, RoundStats, optimize, optimize_to_fixpoint};
use squash_printer::print_module;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::args::CliArgs;

/// How one file is processed.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub passes: OptionSet,
    pub fixpoint: bool,
    pub json: bool,
}

impl RunOptions {
    #[must_use]
    pub fn from_args(args: &CliArgs) -> Self {
        Self {
            passes: args.options(),
            fixpoint: args.fixpoint,
            json: args.json,
        }
    }
}

/// Result of processing one input file.
#[derive(Debug, Clone)]
pub struct FileOutput {
    pub path: PathBuf,
    /// Printed program, or the tree as JSON
    pub text: String,
    pub rounds: Vec<RoundStats>,
}

/// Read a JSON-serialized syntax tree.
pub fn load_module(path: &Path) -> Result<Module> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("failed to decode syntax tree in {}", path.display()))
}

/// Load, optimize and render one file.
pub fn process_file(path: &Path, options: RunOptions) -> Result<FileOutput> {
    let mut module = load_module(path)?;
    let rounds = if options.fixpoint {
        optimize_to_fixpoint(&mut module, options.passes)
    } else {
        optimize(&mut module, options.passes).map(|stats| vec![stats])
    }
    .with_context(|| format!("failed to build scopes for {}", path.display()))?;

    let text = if options.json {
        serde_json::to_string(&module)
            .with_context(|| format!("failed to encode syntax tree of {}", path.display()))?
    } else {
        print_module(&module)
    };
    debug!(
        file = %path.display(),
        rounds = rounds.len(),
        mutations = rounds.iter().map(RoundStats::mutations).sum::<usize>(),
        "optimized"
    );
    Ok(FileOutput {
        path: path.to_path_buf(),
        text,
        rounds,
    })
}

/// Process every file in parallel. Results keep the input order.
pub fn run(args: &CliArgs) -> Vec<Result<FileOutput>> {
    let options = RunOptions::from_args(args);
    args.files
        .par_iter()
        .map(|path| process_file(path, options))
        .collect()
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
