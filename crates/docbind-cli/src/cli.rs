//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docbind",
    version,
    about = "Schema-driven workbook import and template export",
    long_about = "Import spreadsheets into validated typed records with per-cell\n\
                  error reporting, write errors back as styled notes, seed\n\
                  protected templates, and denormalize nested records into\n\
                  template-ready flat rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a workbook against a JSON schema and report cell errors.
    Import(ImportArgs),

    /// Seed the hidden protected key sheet into a template workbook.
    Protect(ProtectArgs),

    /// Flatten a JSON record list into template-ready rows.
    Denormalize(DenormalizeArgs),

    /// Render a document via the remote document service.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Workbook to import (xlsx).
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// JSON schema describing the sheet region and fields.
    #[arg(long = "schema", value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Write a copy with errored cells styled and annotated.
    #[arg(long = "annotate", value_name = "OUT")]
    pub annotate: Option<PathBuf>,

    /// Validate the hidden template key sheet before reading data.
    #[arg(long = "check-template")]
    pub check_template: bool,

    /// Fail the import when two header columns resolve to the same field.
    #[arg(long = "reject-duplicate-headers")]
    pub reject_duplicate_headers: bool,
}

#[derive(Parser)]
pub struct ProtectArgs {
    /// Template workbook to protect.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the protected copy.
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct DenormalizeArgs {
    /// JSON file holding a list of records.
    #[arg(value_name = "RECORDS")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Base URL of the document service.
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: String,

    /// Export request as a JSON file (template uri, payload, names).
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Where to write the rendered document.
    #[arg(long = "out", value_name = "OUT")]
    pub out: PathBuf,

    /// Skip payload denormalization before posting.
    #[arg(long = "raw-payload")]
    pub raw_payload: bool,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
