//! Run reports: a single JSON line with `--json`, human text otherwise.

use serde::Serialize;
use vouch_fetch::{DigestError, DigestResult, RequestEntry, RequestError};
use vouch_hash::Algorithm;

const USAGE: &str = "Submit arguments below in order from top-down:\n\
                     \n\
                     $ vouch\n\
                     \x20 [--json] Print the report as a single JSON line.\n\
                     \x20 [--help] Display this.\n\
                     \x20 [--hashes] List the supported hash algorithms.\n\
                     \x20 [[--hash] ..] Override the default hash set with these.\n\
                     \x20 <resource [[--hash] ..]> Add a resource using any provided hashes.";

/// `false` on success, otherwise the error kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorField {
    Ok(bool),
    Kind(&'static str),
}

/// Everything one invocation reports, whichever path it took.
#[derive(Debug, Serialize)]
pub struct Report {
    pub error: ErrorField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<DigestResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashes: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

impl Report {
    fn success() -> Self {
        Report {
            error: ErrorField::Ok(false),
            message: None,
            results: None,
            hash: None,
            hashes: None,
            platform: None,
            release: None,
            arch: None,
            version: None,
        }
    }

    fn failure(kind: &'static str, message: String) -> Self {
        Report {
            error: ErrorField::Kind(kind),
            message: Some(message),
            ..Report::success()
        }
    }

    pub fn results(results: Vec<DigestResult>) -> Self {
        Report {
            results: Some(results),
            ..Report::success()
        }
    }

    pub fn hashes() -> Self {
        Report {
            hashes: Some(Algorithm::ALL.iter().map(|a| a.name()).collect()),
            ..Report::success()
        }
    }

    pub fn help() -> Self {
        Report {
            message: Some(USAGE.to_owned()),
            platform: Some(std::env::consts::OS),
            release: sysinfo::System::os_version(),
            arch: Some(std::env::consts::ARCH),
            version: Some(env!("CARGO_PKG_VERSION")),
            ..Report::success()
        }
    }

    pub fn no_arguments() -> Self {
        Report::failure("NO-ARGUMENTS", "No arguments were provided.".to_owned())
    }

    pub fn no_resources() -> Self {
        Report::failure("NO-RESOURCES", "No resources were provided.".to_owned())
    }

    pub fn invalid_hash(name: String) -> Self {
        Report {
            hash: Some(name.clone()),
            ..Report::failure(
                "INVALID-HASH",
                format!("An invalid hash was provided => {name}"),
            )
        }
    }

    /// Map a batch failure onto the report it should produce.
    pub fn from_error(err: &DigestError, entries: &[RequestEntry]) -> Self {
        match err {
            DigestError::Request(RequestError::InvalidResource { index }) => {
                let offending = entries
                    .get(index - 1)
                    .map(|entry| format!("{entry:?}"))
                    .unwrap_or_default();
                Report::failure(
                    "INVALID-RESOURCE",
                    format!("An invalid resource was provided => {offending}"),
                )
            }
            DigestError::Request(RequestError::InvalidHash { hash, .. }) => {
                Report::invalid_hash(hash.clone().unwrap_or_default())
            }
            DigestError::Transport { locator, source } => {
                Report::failure("TRANSPORT", format!("Failed to read {locator} => {source}"))
            }
        }
    }

    fn print_human(&self) {
        if matches!(self.error, ErrorField::Kind(_)) {
            let message = self.message.as_deref().unwrap_or("unknown error");
            eprintln!("Error'd: {message}");
            eprintln!("Use vouch --help for additional information.");
            return;
        }

        if let Some(platform) = self.platform {
            println!("Platform: {platform}");
            println!("Release: {}", self.release.as_deref().unwrap_or("unknown"));
            println!("Arch: {}", self.arch.unwrap_or("unknown"));
            println!("Vouch: {}", self.version.unwrap_or("unknown"));
            println!();
        }

        if let Some(message) = &self.message {
            println!("{message}");
        }

        if let Some(hashes) = &self.hashes {
            for name in hashes {
                println!("{name}");
            }
        }

        if let Some(results) = &self.results {
            println!("Printing digests...\n");
            for resource in results {
                println!("  {}", resource.locator);
                for (algorithm, digest) in &resource.digests {
                    println!("    {algorithm} === {digest}");
                }
                println!();
            }
        }

        println!("Done!");
    }
}

/// Print the report in the requested mode and return the exit code.
pub fn finish(json: bool, report: Report) -> i32 {
    let failed = matches!(report.error, ErrorField::Kind(_));
    if json {
        println!(
            "{}",
            serde_json::to_string(&report).expect("report serializes")
        );
    } else {
        report.print_human();
    }
    if failed { 1 } else { 0 }
}
