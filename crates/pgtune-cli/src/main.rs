mod config;
mod server;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pgtune_catalog::{
    Lang, Report, alter_system_script, build_report, category_label, conf_fragment, description,
    doc_url, is_restart_required, t, yes_no,
};
use pgtune_core::{Category, ConfigInput, StorageType, classify};
use rmcp::{ServiceExt, transport::stdio};

use crate::config::{Defaults, OutputFormat};

#[derive(Parser)]
#[command(name = "pgtune", about = "PostgreSQL parameter recommendations from hardware specs")]
struct Cli {
    /// Settings file (overrides PGTUNE_CONFIG and ~/.config/pgtune/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output language: zh or en
    #[arg(long, global = true)]
    lang: Option<Lang>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HardwareArgs {
    /// CPU core count
    #[arg(long)]
    cpu: u32,

    /// Memory in GB (fractional values allowed)
    #[arg(long)]
    memory: f64,

    /// Storage medium: ssd or hdd
    #[arg(long)]
    storage: Option<StorageType>,

    /// PostgreSQL major version, used for documentation links
    #[arg(long)]
    db_version: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the recommended parameter set
    Derive {
        #[command(flatten)]
        hardware: HardwareArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print ALTER SYSTEM statements for the recommended parameters
    Sql {
        #[command(flatten)]
        hardware: HardwareArgs,
    },

    /// Show category, restart requirement, description and docs for one parameter
    Explain {
        /// Parameter name, e.g. shared_buffers
        name: String,

        /// PostgreSQL major version, used for the documentation link
        #[arg(long)]
        db_version: Option<String>,
    },

    /// List parameter categories, or the members of one category
    Categories {
        /// performance, autovacuum, timeout, logging or other
        category: Option<Category>,
    },

    /// Start MCP server on stdio transport
    Serve,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut defaults = config::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(lang) = cli.lang {
        defaults.lang = lang;
    }

    match &cli.command {
        Commands::Serve => cmd_serve(defaults).await,
        Commands::Derive { hardware, format } => {
            cmd_derive(&defaults, hardware, format.unwrap_or(defaults.format))
        }
        Commands::Sql { hardware } => cmd_derive(&defaults, hardware, OutputFormat::Sql),
        Commands::Explain { name, db_version } => {
            cmd_explain(&defaults, name, db_version.as_deref())
        }
        Commands::Categories { category } => cmd_categories(&defaults, *category),
    }
}

fn input_from(defaults: &Defaults, hardware: &HardwareArgs) -> ConfigInput {
    ConfigInput::new(
        hardware.cpu,
        hardware.memory,
        hardware.storage.unwrap_or(defaults.storage),
    )
    .with_db_version(
        hardware
            .db_version
            .clone()
            .unwrap_or_else(|| defaults.db_version.clone()),
    )
}

fn cmd_derive(defaults: &Defaults, hardware: &HardwareArgs, format: OutputFormat) -> Result<()> {
    let input = input_from(defaults, hardware);
    let lang = defaults.lang;
    let report = build_report(&input, lang).context("failed to derive parameters")?;

    match format {
        OutputFormat::Table => print_table(&report),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
        OutputFormat::Conf => print!("{}", conf_fragment(&report.parameters(), lang)),
        OutputFormat::Sql => print!("{}", alter_system_script(&report.parameters(), lang)),
    }
    Ok(())
}

fn print_table(report: &Report) {
    let lang = report.lang;
    let input = &report.input;
    let storage_key = input.storage_type.as_str();

    println!("{}", t("title", lang));
    println!(
        "{}: {} | {}: {} | {}: {} | {}: {}",
        t("cpuCores", lang),
        input.cpu_cores,
        t("memoryGB", lang),
        input.memory_gb,
        t("storageType", lang),
        t(storage_key, lang),
        t("dbVersion", lang),
        input.db_version,
    );

    for (category, rows) in report.grouped() {
        println!();
        println!("== {} ==", category_label(category, lang));
        println!(
            "{:<36} {:<24} {:<8} {}",
            t("paramName", lang),
            t("paramValue", lang),
            t("restartRequired", lang),
            t("description", lang),
        );
        for row in rows {
            println!(
                "{:<36} {:<24} {:<8} {}",
                row.name,
                row.value,
                yes_no(row.restart_required, lang),
                row.description,
            );
        }
    }
}

fn cmd_explain(defaults: &Defaults, name: &str, db_version: Option<&str>) -> Result<()> {
    let lang = defaults.lang;
    let version = db_version.unwrap_or(defaults.db_version.as_str());
    let category = classify(name);

    println!("{name}");
    println!("  {}: {}", t("category", lang), category_label(category, lang));
    println!(
        "  {}: {}",
        t("restartRequired", lang),
        yes_no(is_restart_required(name), lang)
    );
    println!("  {}: {}", t("description", lang), description(name, lang));
    println!("  {}: {}", t("viewDoc", lang), doc_url(name, version));
    Ok(())
}

fn cmd_categories(defaults: &Defaults, only: Option<Category>) -> Result<()> {
    if let Some(category) = only {
        let lang = defaults.lang;
        println!("{}", category_label(category, lang));
        for name in category.members() {
            println!(
                "  {:<36} {:<8} {}",
                name,
                yes_no(is_restart_required(name), lang),
                description(name, lang),
            );
        }
        return Ok(());
    }

    for category in Category::ALL {
        let label = category_label(category, defaults.lang);
        match category.members().len() {
            0 => println!("{:<12} {label}", category.as_str()),
            n => println!("{:<12} {label} ({n})", category.as_str()),
        }
    }
    Ok(())
}

async fn cmd_serve(defaults: Defaults) -> Result<()> {
    tracing::info!(
        "starting MCP server (lang={}, db_version={})",
        defaults.lang,
        defaults.db_version
    );

    let server = server::PgTuneServer::new(defaults);
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await?;

    tracing::info!("MCP server stopped");
    Ok(())
}
