//! SARA form checker
//!
//! Command-line front end for the form validation and masking engine. Useful
//! for checking form payloads by hand or from scripts, and for watching how
//! the CPF and phone masks react to each keystroke.
//!
//! # Usage
//!
//! ```text
//! sara-check validate <login|register|profile|add-friend> [FILE]
//! sara-check mask <cpf|phone>
//! sara-check cpf <VALUE>
//! ```
//!
//! `validate` reads a JSON form from FILE (or stdin) and prints the field
//! errors as a JSON object; the exit status is 1 if any field failed.
//! `mask` treats each stdin line as the field's full current text and prints
//! the resulting display value. `cpf` prints the formatted CPF and whether it
//! is valid.
//!
//! # Environment Variables
//!
//! - `SARA_CONFIG`: Optional. Path to the forms config file
//! - `SARA_LOG_LEVEL`: Optional. Logging level when `RUST_LOG` is unset (default: warn)
//! - `SARA_LOG_FORMAT`: Optional. "text" or "json" (default: text)

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sara_core::{format_cpf, is_valid_cpf, FieldKind, FieldState, FormConfig, FormKind};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};

mod cli;
mod logging;

/// Environment variable names
mod env_vars {
    pub const CONFIG_PATH: &str = "SARA_CONFIG";
}

fn load_config() -> Result<FormConfig> {
    let config = match std::env::var_os(env_vars::CONFIG_PATH) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!(path = %path.display(), "loading config from {}", env_vars::CONFIG_PATH);
            FormConfig::load_from(&path)
        }
        None => FormConfig::load(),
    };
    config
        .map_err(sara_core::SaraError::from)
        .context("Failed to load configuration")
}

/// Reads the form document from `path`, or stdin when `path` is `None`.
fn read_input(path: Option<&Path>) -> sara_core::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Validates `json` as `form` and writes the error object to `out`.
///
/// Returns `true` if the form passed.
fn run_validate<W: Write>(
    form: FormKind,
    json: &str,
    config: &FormConfig,
    out: &mut W,
) -> Result<bool> {
    let errors = form.validate_json(json, config)?;
    serde_json::to_writer_pretty(&mut *out, &errors)?;
    writeln!(out)?;
    Ok(errors.is_empty())
}

/// Masks each input line as a keystroke snapshot, carrying the accepted value.
fn run_mask<R: BufRead, W: Write>(kind: FieldKind, input: R, out: &mut W) -> Result<()> {
    let mut state = FieldState::new(kind);
    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        writeln!(out, "{}", state.on_change(&line))?;
    }
    Ok(())
}

fn run_cpf<W: Write>(value: &str, out: &mut W) -> Result<bool> {
    let valid = is_valid_cpf(value);
    writeln!(out, "{}\t{}", format_cpf(value), if valid { "valid" } else { "invalid" })?;
    Ok(valid)
}

fn main() -> Result<ExitCode> {
    logging::init(logging::LogFormat::from_env())?;

    let cli = Cli::parse();
    debug!(command = ?cli.command, "parsed command line");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ok = match cli.command {
        Commands::Validate { form, input } => {
            let config = load_config()?;
            let json = read_input(input.as_deref()).with_context(|| match &input {
                Some(path) => format!("Failed to read {}", path.display()),
                None => "Failed to read stdin".to_string(),
            })?;
            run_validate(form, &json, &config, &mut out)?
        }
        Commands::Mask { kind } => {
            run_mask(kind, io::stdin().lock(), &mut out)?;
            true
        }
        Commands::Cpf { value } => run_cpf(&value, &mut out)?,
    };

    out.flush()?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
