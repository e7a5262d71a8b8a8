//! datagrid - command-line driver for the table engine.
//!
//! Loads a table definition and a list response, applies search, sort,
//! filters and paging the way the table UI would, then prints the grid, the
//! CSV export, the emitted query or the list URL that query maps to.
//!
//! ```bash
//! datagrid -t users.table.json -d users.json -s ana -F status=active
//! datagrid -t users.table.json -d users.json --format url --base-url http://localhost:8080
//! ```

mod args;
mod definition;
mod error;
mod output;

use std::fs::File;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use datagrid_lib::TableEngine;
use datagrid_lib::TableHandler;
use datagrid_lib::list::ListPage;
use datagrid_lib::query::TableQuery;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use args::Cli;
use args::OutputFormat;
use definition::TableDefinition;
use error::CliError;

/// Logs what a UI would send to its data source.
struct LogHandler;

#[async_trait]
impl TableHandler for LogHandler {
    fn on_search(&self, query: &TableQuery) {
        log::info!("query #{}: {}", query.sequence, query.to_query_string());
    }

    fn on_page_change(&self, page: usize, page_size: usize) {
        log::info!("page change requested: page {} size {}", page, page_size);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::LogFile {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let definition = TableDefinition::load(&cli.table)?;
    let page = ListPage::from_json_str(&definition::read(&cli.data)?)?;
    log::debug!(
        "loaded {} column(s), {} row(s) (total {})",
        definition.columns.len(),
        page.rows.len(),
        page.total
    );

    let server_side = definition.config.server_side_filtering;
    let engine = TableEngine::new(definition.columns, definition.config, Arc::new(LogHandler))?;
    if !server_side {
        engine.set_records(page.rows.clone())?;
    }

    let query = apply_state(&engine, &cli)?;
    if server_side {
        engine.accept_page(query.sequence, page)?;
    }
    if cli.page != 1 {
        engine.go_to_page(cli.page)?;
    }

    let text = match cli.format {
        OutputFormat::Grid => {
            output::render_grid(&engine.header_cells(), &engine.body(), &engine.footer())
        }
        OutputFormat::Csv => engine.export_csv()?,
        OutputFormat::Query => serde_json::to_string_pretty(&query)?,
        OutputFormat::Url => {
            let resource = definition
                .resource
                .as_ref()
                .ok_or(CliError::MissingUrlPart("a \"resource\" in the table definition"))?;
            let base = cli
                .base_url
                .as_deref()
                .ok_or(CliError::MissingUrlPart("--base-url"))?;
            resource
                .path()
                .url(base, Some(&query))?
                .to_string()
        }
    };

    write_output(&cli, &text)
}

/// Applies page size, sort, filters and search, then returns the query the
/// final state emits.
fn apply_state(engine: &TableEngine, cli: &Cli) -> Result<TableQuery, CliError> {
    if let Some(size) = cli.page_size {
        engine.set_page_size(size)?;
    }

    if let Some(key) = &cli.sort {
        engine.toggle_sort(key)?;
        if cli.desc {
            engine.toggle_sort(key)?;
        }
    }

    for arg in &cli.filters {
        let (key, value) =
            args::parse_filter(arg).ok_or_else(|| CliError::InvalidFilter(arg.clone()))?;
        engine.set_filter(key, value)?;
    }

    if let Some(search) = &cli.search {
        engine.set_search(search.as_str())?;
    }
    Ok(engine.flush_search())
}

fn write_output(cli: &Cli, text: &str) -> Result<(), CliError> {
    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text)).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            log::debug!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
        }
    }
    Ok(())
}
