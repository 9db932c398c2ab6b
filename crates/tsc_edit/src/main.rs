#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc, clippy::struct_excessive_bools)]

mod commands;
mod options;

pub use options::*;

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use tsc_list::{LineEnding, Parameter};

#[derive(Parser)]
#[command(version, about = "Edit TSC command lists ([CE_TSC]/[BL_TSC] files)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LineEndingArg {
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Loads a list and reports the first error, if any")]
    Check { file: PathBuf },

    #[command(about = "Prints all commands of a list")]
    List {
        file: PathBuf,
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    #[command(about = "Prints the known parameter types")]
    Types,

    #[command(about = "Rewrites a list in extended [BL_TSC] form")]
    Convert {
        file: PathBuf,
        #[arg(short, long, help = "Output file, the input is overwritten if omitted")]
        output: Option<PathBuf>,
        #[arg(long, help = "Keep the command order instead of sorting by code")]
        no_sort: bool,
        #[arg(long, value_enum)]
        line_ending: Option<LineEndingArg>,
    },

    #[command(about = "Creates an empty list")]
    New { file: PathBuf },

    #[command(about = "Adds a command to a list")]
    Add {
        file: PathBuf,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "param", value_name = "TYPE[:LEN]", value_parser = commands::parse_parameter, help = "Parameter type (char or name) with optional length, up to 4 times")]
        params: Vec<Parameter>,
        #[arg(long)]
        ends_event: bool,
        #[arg(long)]
        clears_textbox: bool,
        #[arg(long, help = "Parameters are not separated")]
        joined_params: bool,
    },

    #[command(about = "Removes the command with the given code")]
    Remove { file: PathBuf, code: String },

    #[command(about = "Shows or changes the stored options")]
    Config {
        #[arg(long)]
        sort_on_save: Option<bool>,
        #[arg(long, value_enum)]
        line_ending: Option<LineEndingArg>,
    },
}

fn start_logger() -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to initialize logger: {err}");
            return None;
        }
    };
    let result = if let Some(log_dir) = Options::get_log_dir() {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("tsc_edit").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    } else {
        logger.log_to_stderr().start()
    };
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to create log file: {err}");
            None
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut options = Options::load_options();
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Check { file } => commands::check(&file, &mut stdout),
        Commands::List { file, json } => commands::list(&file, json, &mut stdout),
        Commands::Types => commands::types(&mut stdout),
        Commands::Convert {
            file,
            output,
            no_sort,
            line_ending,
        } => {
            if no_sort {
                options.sort_on_save = false;
            }
            if let Some(line_ending) = line_ending {
                options.line_ending = line_ending.into();
            }
            commands::convert(&file, output.as_ref(), &options)
        }
        Commands::New { file } => commands::new_list(&file, &options),
        Commands::Add {
            file,
            code,
            name,
            description,
            params,
            ends_event,
            clears_textbox,
            joined_params,
        } => commands::add(
            &file,
            commands::NewCommand {
                code,
                name,
                description,
                parameters: params,
                ends_event,
                clears_textbox,
                joined_params,
            },
            &options,
        ),
        Commands::Remove { file, code } => commands::remove(&file, &code, &options),
        Commands::Config { sort_on_save, line_ending } => commands::config(&mut options, sort_on_save, line_ending.map(LineEnding::from), &mut stdout),
    }
}

/// Without a logger the error would get lost, so it goes straight to `stderr`.
fn report_error(err: &anyhow::Error, logging: bool, stderr: &mut impl io::Write) {
    if logging {
        log::error!("{err:#}");
    } else {
        let _ = writeln!(stderr, "{err:#}");
    }
}

fn main() {
    let cli = Cli::parse();
    let logger = start_logger();
    log::debug!("Starting tsc_edit {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(cli) {
        report_error(&err, logger.is_some(), &mut io::stderr());
        drop(logger);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_without_logger() {
        let err = anyhow::anyhow!("Could not find [CE_TSC]/[BL_TSC] header").context("Could not load TSC file list.txt");
        let mut stderr = Vec::new();
        report_error(&err, false, &mut stderr);
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Could not load TSC file list.txt: Could not find [CE_TSC]/[BL_TSC] header\n"
        );
    }

    #[test]
    fn test_report_error_with_logger() {
        let err = anyhow::anyhow!("broken");
        let mut stderr = Vec::new();
        report_error(&err, true, &mut stderr);
        assert!(stderr.is_empty());
    }
}
