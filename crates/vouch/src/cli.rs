//! Command-line surface.
//!
//! The fixed flags belong to clap; the algorithm/resource tail is data-driven
//! (`--sha256` names an algorithm, not a flag), so it is captured raw and
//! folded into request entries here. `--help` is handled by hand because the
//! help report also has a JSON rendering.

use clap::Parser;
use vouch_fetch::{RequestEntry, digest_batch, set_default_algorithms};
use vouch_hash::Algorithm;

use crate::report::{self, Report};

/// Compute one or more digests for each resource in a single streaming pass.
#[derive(Debug, Parser)]
#[command(name = "vouch", version, about, disable_help_flag = true)]
pub struct Cli {
    /// Print a single-line JSON report instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Print usage and environment information, then exit.
    #[arg(long)]
    pub help: bool,

    /// List the supported hash algorithms, then exit.
    #[arg(long)]
    pub hashes: bool,

    /// Resources to digest. Leading `--<algorithm>` tokens replace the
    /// default hash set for the whole run; `--<algorithm>` tokens after a
    /// resource apply to that resource only.
    #[arg(
        value_name = "RESOURCE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Run the requested path and return the process exit code.
    pub async fn execute(self) -> i32 {
        if self.help {
            return report::finish(self.json, Report::help());
        }

        if self.hashes {
            return report::finish(self.json, Report::hashes());
        }

        if self.args.is_empty() {
            return report::finish(self.json, Report::no_arguments());
        }

        if !self.json {
            println!("Starting...");
        }

        let folded = fold_arguments(&self.args);

        // Leading overrides replace the default set; the first unknown name
        // aborts the run and is echoed back.
        if let Some(bad) = folded
            .default_overrides
            .iter()
            .find(|name| Algorithm::from_name(name).is_none())
        {
            return report::finish(self.json, Report::invalid_hash(bad.clone()));
        }
        if !folded.default_overrides.is_empty() {
            set_default_algorithms(&folded.default_overrides);
        }

        if folded.entries.is_empty() {
            return report::finish(self.json, Report::no_resources());
        }

        tracing::debug!(resources = folded.entries.len(), "starting batch");

        match digest_batch(&folded.entries).await {
            Ok(results) => report::finish(self.json, Report::results(results)),
            Err(err) => report::finish(self.json, Report::from_error(&err, &folded.entries)),
        }
    }
}

/// Outcome of folding the raw token tail.
#[derive(Debug, PartialEq, Eq)]
pub struct Folded {
    /// Algorithm names that replace the default set for the whole run.
    pub default_overrides: Vec<String>,
    pub entries: Vec<RequestEntry>,
}

/// Fold the token tail into request entries.
///
/// `--x` tokens before the first resource accumulate as default overrides;
/// after a resource they attach to the resource immediately before them.
pub fn fold_arguments(tokens: &[String]) -> Folded {
    let mut default_overrides = Vec::new();
    let mut resources: Vec<(String, Vec<String>)> = Vec::new();

    for token in tokens {
        match token.strip_prefix("--") {
            Some(name) => match resources.last_mut() {
                Some((_, overrides)) => overrides.push(name.to_owned()),
                None => default_overrides.push(name.to_owned()),
            },
            None => resources.push((token.clone(), Vec::new())),
        }
    }

    let entries = resources
        .into_iter()
        .map(|(locator, overrides)| {
            if overrides.is_empty() {
                RequestEntry::Bare(locator)
            } else {
                RequestEntry::WithAlgorithms(overrides, locator)
            }
        })
        .collect();

    Folded {
        default_overrides,
        entries,
    }
}
