use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::copy::{CopyError, Output};
use crate::input::Input;

mod copy;
mod input;

#[derive(Parser, Debug)]
#[command(name = "rcat")]
#[command(about = "Concatenate files to standard output.", long_about = None)]
#[command(version)]
struct Cli {
    /// Unbuffered output: flush after every chunk written.
    #[arg(short = 'u', action = ArgAction::Count)]
    unbuffered: u8,

    /// Inputs to read in order; `-` means standard input.
    #[arg(value_name = "FILE")]
    files: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("rcat: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let inputs = input::resolve(&cli.files);

    let stdout = io::stdout().lock();
    let mut out = Output::new(stdout, cli.unbuffered > 0);

    let mut stdin_drained = false;
    let mut failed = false;
    for input in &inputs {
        match input {
            Input::Stdin => {
                if stdin_drained {
                    // Exhausted by an earlier `-`: later references contribute
                    // zero bytes, not an error.
                    continue;
                }
                stdin_drained = true;
                let mut stdin = io::stdin().lock();
                forward(&mut out, &mut stdin, "-", &mut failed)?;
            }
            Input::Path(path) => {
                let mut file = match File::open(path) {
                    Ok(file) => file,
                    Err(err) => {
                        eprintln!("rcat: {}: {err}", path.display());
                        failed = true;
                        continue;
                    }
                };
                forward(&mut out, &mut file, path.display(), &mut failed)?;
            }
        }
    }
    out.flush().context("flush standard output")?;

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Pump one input into the shared output.
///
/// A read failure is local to this input: diagnose it, mark the run failed,
/// keep going. A write failure means stdout is gone, which ends the run.
fn forward(
    out: &mut Output<impl Write>,
    reader: &mut impl Read,
    label: impl fmt::Display,
    failed: &mut bool,
) -> Result<()> {
    match out.copy_from(reader) {
        Ok(_) => Ok(()),
        Err(CopyError::Read(err)) => {
            eprintln!("rcat: {label}: {err}");
            *failed = true;
            Ok(())
        }
        Err(CopyError::Write(err)) => Err(err).context("write standard output"),
    }
}
