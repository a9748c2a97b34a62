use std::path::PathBuf;
use std::time::Duration;

use scribe_client::DEFAULT_BASE_URL;

pub const USAGE: &str = "\
scribe - media pipeline progress client

Usage: scribe [--base-url <url>] [--log-file] <command>

Commands:
  upload <path> [--name <display name>]   upload a media file, print its job id
  status <id>                             show the current step table once
  watch <id> [--interval <secs>] [--auto] [--strict]
                                          poll until the pipeline finishes;
                                          --auto starts each ready stage,
                                          --strict surfaces advance failures
  advance <id>                            start the next stage for the job
  result <id>                             print the finished transcript
  about                                   what this program is

The base URL defaults to SCRIBE_BASE_URL or http://127.0.0.1:5000.";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Upload { path: PathBuf, name: Option<String> },
    Status { id: String },
    Watch {
        id: String,
        interval: Duration,
        auto: bool,
        strict: bool,
    },
    Advance { id: String },
    Result { id: String },
    About,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub base_url: String,
    pub log_to_file: bool,
    pub command: Command,
}

pub fn parse(args: &[String]) -> Result<CliArgs, String> {
    let mut base_url = std::env::var("SCRIBE_BASE_URL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut log_to_file = false;

    // Split global flags from the subcommand and its arguments.
    let mut rest: Vec<String> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--base-url" => {
                i += 1;
                base_url = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| "--base-url needs a value".to_string())?;
            }
            "--log-file" => log_to_file = true,
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let subcommand = rest.first().ok_or_else(|| "missing command".to_string())?;
    let mut name: Option<String> = None;
    let mut interval_secs: u64 = 5;
    let mut auto = false;
    let mut strict = false;
    let mut positionals: Vec<String> = Vec::new();
    let mut i = 1;
    while i < rest.len() {
        match rest[i].as_str() {
            "--name" => {
                i += 1;
                name = Some(
                    rest.get(i)
                        .cloned()
                        .ok_or_else(|| "--name needs a value".to_string())?,
                );
            }
            "--interval" => {
                i += 1;
                interval_secs = rest
                    .get(i)
                    .ok_or_else(|| "--interval needs a value".to_string())?
                    .parse()
                    .map_err(|_| "--interval needs a whole number of seconds".to_string())?;
            }
            "--auto" => auto = true,
            "--strict" => strict = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag {other}"));
            }
            other => positionals.push(other.to_string()),
        }
        i += 1;
    }

    let command = match subcommand.as_str() {
        "upload" => Command::Upload {
            path: PathBuf::from(take_one(&positionals, "upload needs a file path")?),
            name,
        },
        "status" => Command::Status {
            id: take_one(&positionals, "status needs a job id")?,
        },
        "watch" => Command::Watch {
            id: take_one(&positionals, "watch needs a job id")?,
            interval: Duration::from_secs(interval_secs.max(1)),
            auto,
            strict,
        },
        "advance" => Command::Advance {
            id: take_one(&positionals, "advance needs a job id")?,
        },
        "result" => Command::Result {
            id: take_one(&positionals, "result needs a job id")?,
        },
        "about" => Command::About,
        other => return Err(format!("unknown command {other}")),
    };

    Ok(CliArgs {
        base_url,
        log_to_file,
        command,
    })
}

fn take_one(positionals: &[String], missing: &str) -> Result<String, String> {
    match positionals {
        [only] => Ok(only.clone()),
        [] => Err(missing.to_string()),
        more => Err(format!("unexpected argument {}", more[1])),
    }
}
