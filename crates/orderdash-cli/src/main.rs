//! `orderdash` command-line dashboard
//!
//! Loads a restaurant order export once and prints KPIs, chart series or a
//! page of the searchable order table, as text or JSON.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use orderdash_analytics::{
    ChartData, DashboardSnapshot, StatusFilter, TableQuery, chart, delivery_performance,
    kpi_summary, order_type_distribution, query_table, revenue_trend, status_options,
    top_customers, top_items,
};
use orderdash_core::{Config, LogFormat, Order, init_logging, load_orders};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Command line interface for the order dashboard
#[derive(Parser)]
#[command(
    name = "orderdash",
    version = env!("CARGO_PKG_VERSION"),
    about = "Restaurant order analytics from a JSON export",
    long_about = "Loads a restaurant order export and reports revenue, order status counts, customer and item frequency, delivery performance, revenue per order and a searchable, paginated order table."
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Order export to load (overrides the configured path)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Log level or filter directive (overrides the configured level)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable structured JSON logging
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

/// How results are printed on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned text tables
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Available subcommands
#[derive(Subcommand)]
enum Commands {
    /// Revenue and order status counts
    Kpis,

    /// Customers ranked by number of orders
    Customers {
        /// Number of customers to show (defaults to analytics.top_n)
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Most frequently ordered items by quantity
    Items {
        /// Number of items to show (defaults to analytics.item_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Delivery completion per delivery person
    Delivery,

    /// Orders per order type
    OrderTypes,

    /// Revenue per order, ascending by order id
    Trend,

    /// Search, filter and page through the order table
    Orders {
        /// Case-insensitive text matched against id, customer, type and status
        #[arg(short, long)]
        search: Option<String>,

        /// Exact order status, or `any`
        #[arg(long)]
        status: Option<String>,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Rows per page (defaults to table.page_size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Status values available to the order table filter
    Statuses,

    /// Every dashboard panel at once
    Dashboard,

    /// Validate configuration
    Config {
        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,
    },
}

/// Main entry point for the dashboard
///
/// # Errors
///
/// Returns error if configuration, logging setup or dataset loading fails
fn main() -> Result<()> {
    // A missing .env file is fine
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;

    init_cli_logging(&cli, &config)?;
    if let Err(e) = dotenv {
        debug!(error = %e, ".env file not loaded");
    }

    match cli.command {
        Some(Commands::Config { show }) => handle_config_command(&config, show),
        Some(command) => {
            let orders = load_dataset(cli.data, &config)?;
            run_command(command, &orders, &config, cli.output)
        }
        None => {
            let orders = load_dataset(cli.data, &config)?;
            run_command(Commands::Dashboard, &orders, &config, cli.output)
        }
    }
}

/// Initialize logging from flags, falling back to the configuration
fn init_cli_logging(cli: &Cli, config: &Config) -> Result<()> {
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let format = if cli.json {
        LogFormat::Json
    } else {
        config
            .logging
            .format
            .parse::<LogFormat>()
            .context("invalid logging.format")?
    };

    init_logging(level, format)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = level,
        "orderdash starting"
    );
    Ok(())
}

/// Load the order export named on the command line or in the configuration
///
/// # Errors
///
/// Returns error if the file cannot be read or decoded
fn load_dataset(override_path: Option<PathBuf>, config: &Config) -> Result<Vec<Order>> {
    let path = override_path.unwrap_or_else(|| config.data.path.clone());
    load_orders(&path).with_context(|| format!("failed to load orders from {}", path.display()))
}

/// Print `value` as JSON or as the text produced by `text`
///
/// # Errors
///
/// Returns error if JSON serialization fails
fn emit<T: Serialize>(output: OutputFormat, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Table => print!("{}", text()),
    }
    Ok(())
}

/// Run one reporting subcommand over the loaded orders
///
/// # Errors
///
/// Returns error if output serialization fails
fn run_command(
    command: Commands,
    orders: &[Order],
    config: &Config,
    output: OutputFormat,
) -> Result<()> {
    let symbol = config.display.currency_symbol.as_str();

    match command {
        Commands::Kpis => {
            let summary = kpi_summary(orders);
            emit(output, &summary, || render::kpis(&summary, symbol))
        }
        Commands::Customers { top } => {
            let n = top.unwrap_or(config.analytics.top_n);
            let data = ChartData::from_points(top_customers(orders, n), chart::NO_CUSTOMER_DATA);
            emit(output, &data, || {
                render::named_values("Top Customers", "Orders", &data)
            })
        }
        Commands::Items { limit } => {
            let limit = limit.unwrap_or(config.analytics.item_limit);
            let data = ChartData::from_points(top_items(orders, limit), chart::NO_ITEM_DATA);
            emit(output, &data, || {
                render::named_values("Frequently Ordered Items", "Quantity", &data)
            })
        }
        Commands::Delivery => {
            let data =
                ChartData::from_points(delivery_performance(orders), chart::NO_DELIVERY_DATA);
            emit(output, &data, || render::delivery(&data))
        }
        Commands::OrderTypes => {
            let data =
                ChartData::from_points(order_type_distribution(orders), chart::NO_ORDER_TYPE_DATA);
            emit(output, &data, || {
                render::named_values("Order Types", "Orders", &data)
            })
        }
        Commands::Trend => {
            let data = ChartData::from_points(revenue_trend(orders), chart::NO_REVENUE_DATA);
            emit(output, &data, || render::trend(&data, symbol))
        }
        Commands::Orders {
            search,
            status,
            page,
            page_size,
        } => {
            let query = build_query(
                search,
                status.as_deref(),
                page,
                page_size.unwrap_or(config.table.page_size),
            );
            let result = query_table(orders, &query);
            emit(output, &result, || render::order_table(&result, symbol))
        }
        Commands::Statuses => {
            let options = status_options(orders);
            emit(output, &options, || render::statuses(&options))
        }
        Commands::Dashboard => {
            let snapshot = DashboardSnapshot::build(orders, &config.analytics);
            emit(output, &snapshot, || render::dashboard(&snapshot, symbol))
        }
        Commands::Config { show } => handle_config_command(config, show),
    }
}

/// Table query for a one-based `page`
fn build_query(
    search: Option<String>,
    status: Option<&str>,
    page: usize,
    page_size: usize,
) -> TableQuery {
    // Criteria first: each of them resets the page
    TableQuery::new(page_size)
        .with_search(search.unwrap_or_default())
        .with_status(StatusFilter::from_selection(status))
        .with_page(page.saturating_sub(1))
}

/// Show configuration as TOML
///
/// # Errors
///
/// Returns error if configuration cannot be serialized
fn show_config(config: &Config) -> Result<()> {
    let config_toml =
        toml::to_string_pretty(config).context("failed to serialize configuration")?;
    println!("{config_toml}");
    Ok(())
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns error if configuration cannot be serialized
fn handle_config_command(config: &Config, show: bool) -> Result<()> {
    info!(data = %config.data.path.display(), "Configuration is valid");

    if config.data.path.exists() {
        debug!(data = %config.data.path.display(), "Dataset found");
    } else {
        warn!(data = %config.data.path.display(), "Dataset file does not exist");
    }

    if show {
        show_config(config)?;
    }

    Ok(())
}
