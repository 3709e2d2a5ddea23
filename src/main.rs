use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use patternbook::core::CatalogError;
use patternbook::core::config::{self, CliOverrides, ConfigError, ResolvedConfig};
use patternbook::core::manifest::Manifest;
use patternbook::core::render::page_to_plain_text;
use patternbook::core::route_table::RouteTable;
use patternbook::core::state::App;
use patternbook::{patterns, tui};

#[derive(Parser)]
#[command(name = "patternbook", about = "Browse design patterns in the terminal")]
struct Args {
    /// Page to open on start (defaults to the configured default route)
    #[arg(short, long, value_name = "KEY")]
    route: Option<String>,

    /// TOML manifest with extra pages
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print the menu entries and exit
    #[arg(long)]
    list: bool,

    /// Print every tab of one page as plain text and exit
    #[arg(long, value_name = "KEY")]
    print: Option<String>,

    /// Wrap width for --print
    #[arg(long, default_value_t = 80)]
    width: usize,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Exiting with error: {}", err);
            eprintln!("patternbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), StartupError> {
    let file_config = config::load_config()?;
    let cli = CliOverrides {
        route: args.route.as_deref(),
        catalog: args.catalog.as_deref(),
    };
    let resolved = config::resolve(&file_config, &cli);
    init_logging(&resolved);

    log::info!("Patternbook starting up: {:?}", resolved);

    let table = route_table(&resolved)?;

    if args.list {
        let (_, nav) = table.build(None)?;
        for entry in nav.entries() {
            println!("{:<16} {}", entry.route_key, entry.label);
        }
        return Ok(());
    }

    if let Some(key) = &args.print {
        let (catalog, _) = table.build(None)?;
        let page = catalog
            .page(key)
            .ok_or_else(|| CatalogError::RouteNotFound(key.clone()))?;
        print!("{}", page_to_plain_text(page, args.width));
        return Ok(());
    }

    let mut app = App::open(
        &table,
        &resolved.default_route,
        resolved.start_route.as_deref(),
    )?;
    app.show_source = resolved.show_source;

    tui::run(app)?;
    log::info!("Patternbook shut down cleanly");
    Ok(())
}

/// Built-in pages followed by the manifest's, if one is configured.
fn route_table(resolved: &ResolvedConfig) -> Result<RouteTable, StartupError> {
    let mut table = patterns::builtin_route_table();
    if let Some(path) = &resolved.catalog_file {
        table.extend(Manifest::load(path)?.into_route_table());
    }
    Ok(table)
}

/// File logger: the TUI owns stdout, so nothing may log there.
fn init_logging(resolved: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
