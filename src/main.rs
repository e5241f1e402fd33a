//! taglist - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use regex::Regex;
use tracing_subscriber::{fmt, EnvFilter};

use taglist::{
    cli::{Args, Command},
    config::Config,
    error::{exit_codes, Error, Result},
    format::{format_captures, format_list},
    fs::{exists_kind_async, try_get_status_async, FsKind},
    output::{print_answer, print_error, print_info, print_status, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Regex(_) => ExitCode::from(exit_codes::USAGE_ERROR as u8),
                Error::Io(_) | Error::InvalidStatus(_) => {
                    ExitCode::from(exit_codes::IO_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(&args.config)?;

    match args.command {
        Command::Format {
            template,
            values,
            options,
        } => {
            let mut opts = config.format;
            options.merge_into(&mut opts);

            println!("{}", format_list(&template, &values, Some(&opts)));
        }
        Command::Match {
            pattern,
            input,
            template,
            all,
            options,
        } => {
            let mut opts = config.format;
            options.merge_into(&mut opts);

            let re = Regex::new(&pattern)?;
            let output = if all {
                let found: Vec<&str> = re.find_iter(&input).map(|m| m.as_str()).collect();
                if found.is_empty() {
                    print_warning("Pattern did not match input");
                }
                format_list(&template, &found, Some(&opts))
            } else {
                match re.captures(&input) {
                    Some(caps) => format_captures(&template, &caps, Some(&opts)),
                    None => {
                        print_warning("Pattern did not match input");
                        template
                    }
                }
            };

            println!("{}", output);
        }
        Command::Stat { path, json } => match try_get_status_async(&path).await? {
            Some(status) if json => {
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            Some(status) => print_status(&path, &status),
            None => {
                print_info(&format!("No such path: {}", path.display()));
                return Ok(ExitCode::from(exit_codes::NEGATIVE as u8));
            }
        },
        Command::Exists { path, kind } => {
            let kind = FsKind::from(kind);
            let exists = exists_kind_async(&path, kind).await?;
            tracing::debug!("{} is {}: {}", path.display(), kind, exists);

            print_answer(exists);
            if !exists {
                return Ok(ExitCode::from(exit_codes::NEGATIVE as u8));
            }
        }
    }

    Ok(ExitCode::from(exit_codes::SUCCESS as u8))
}
