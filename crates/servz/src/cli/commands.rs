//! # CLI Layer
//!
//! This module is **one possible UI client** for servz, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Logs go to stderr so stdout stays clean for `--output json` and `export -`.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and render the result

use super::render::{
    column_rows, print_json, print_messages, print_result, render_columns, render_full_servers,
    ExportSummary,
};
use super::setup::{Cli, Commands, OutputMode};
use anyhow::Result;
use clap::Parser;
use servzapp::api::ServzApi;
use servzapp::commands::CmdMessage;
use servzapp::init::initialize;
use servzapp::model::ServerId;
use servzapp::store::fs::FileStore;
use servzapp::store::ImportMode;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

struct AppContext {
    api: ServzApi<FileStore>,
    output: OutputMode,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Some(Commands::Columns) = cli.command {
        return handle_columns(cli.output);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, filters }) => handle_list(&ctx, search, filters),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Create {
            server_name,
            assignments,
        }) => handle_create(&mut ctx, server_name, assignments),
        Some(Commands::Update { id, assignments }) => handle_update(&mut ctx, id, assignments),
        Some(Commands::Import {
            paths,
            replace,
            merge,
        }) => {
            let mode = if replace {
                Some(ImportMode::Replace)
            } else if merge {
                Some(ImportMode::Merge)
            } else {
                None
            };
            handle_import(&mut ctx, paths, mode)
        }
        Some(Commands::Export { file }) => handle_export(&ctx, file),
        Some(Commands::Columns) => handle_columns(cli.output),
        None => handle_list(&ctx, None, Vec::new()),
    }
}

/// WARN by default, DEBUG with `--verbose`; `RUST_LOG` wins when set.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.data.clone())?;
    debug!(data_dir = %ctx.data_dir.display(), "using data directory");
    Ok(AppContext {
        api: ctx.api,
        output: cli.output,
    })
}

fn handle_list(ctx: &AppContext, search: Option<String>, filters: Vec<String>) -> Result<()> {
    let result = ctx
        .api
        .list_servers(search.as_deref().unwrap_or(""), filters.as_slice())?;
    match ctx.output {
        OutputMode::Json => print_json(&result.listed_servers),
        OutputMode::Text => {
            print_result(&result);
            Ok(())
        }
    }
}

fn handle_view(ctx: &AppContext, ids: Vec<ServerId>) -> Result<()> {
    let result = ctx.api.view_servers(&ids)?;
    match ctx.output {
        OutputMode::Json => print_json(&result.listed_servers),
        OutputMode::Text => {
            print!("{}", render_full_servers(&result.listed_servers));
            Ok(())
        }
    }
}

fn handle_create(
    ctx: &mut AppContext,
    server_name: String,
    assignments: Vec<String>,
) -> Result<()> {
    let result = ctx.api.create_server(&server_name, assignments.as_slice())?;
    match ctx.output {
        OutputMode::Json => print_json(&result),
        OutputMode::Text => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_update(ctx: &mut AppContext, id: ServerId, assignments: Vec<String>) -> Result<()> {
    let result = ctx.api.update_server(id, assignments.as_slice())?;
    match ctx.output {
        OutputMode::Json => print_json(&result),
        OutputMode::Text => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_import(
    ctx: &mut AppContext,
    paths: Vec<PathBuf>,
    mode: Option<ImportMode>,
) -> Result<()> {
    let result = ctx.api.import_servers(paths, mode)?;
    match ctx.output {
        OutputMode::Json => print_json(&result),
        OutputMode::Text => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_export(ctx: &AppContext, file: Option<String>) -> Result<()> {
    if file.as_deref() == Some("-") {
        let artifact = ctx.api.export_servers(None)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(artifact.content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let artifact = ctx.api.export_servers(file.as_deref())?;
    let path = PathBuf::from(&artifact.file_name);
    std::fs::write(&path, &artifact.content)?;

    match ctx.output {
        OutputMode::Json => print_json(&ExportSummary {
            artifact: &artifact,
            path: path.display().to_string(),
        }),
        OutputMode::Text => {
            print_messages(&[CmdMessage::success(format!(
                "Exported {} servers to {}",
                artifact.record_count,
                path.display()
            ))]);
            Ok(())
        }
    }
}

fn handle_columns(output: OutputMode) -> Result<()> {
    match output {
        OutputMode::Json => print_json(&column_rows()),
        OutputMode::Text => {
            print!("{}", render_columns());
            Ok(())
        }
    }
}
