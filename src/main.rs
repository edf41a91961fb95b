//! Lawgorithm command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use lawgorithm::analysis::{AnalyzerConfig, DocumentAnalyzer, DocumentInput};
use lawgorithm::config::{load_settings, Settings};
use lawgorithm::directory::{filter_entries, FilterCriteria};
use lawgorithm::repository::{
    IpcCatalog, LawyerDirectory, StaticIpcCatalog, StaticLawyerDirectory,
};
use lawgorithm::server;

#[derive(Parser)]
#[command(name = "lawgorithm")]
#[command(about = "Legal assistance platform: document simplification, lawyer directory, and IPC lookup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web interface
    Serve {
        /// Bind address (overrides configuration)
        #[arg(long, env = "LAWGORITHM_HOST")]
        host: Option<String>,
        /// Listen port (overrides configuration)
        #[arg(long, env = "LAWGORITHM_PORT")]
        port: Option<u16>,
    },

    /// Search the lawyer directory
    Lawyers {
        /// Free-text query over names and specializations
        #[arg(short, long)]
        query: Option<String>,
        /// Exact practice-area tag, e.g. "Family Law"
        #[arg(short, long)]
        category: Option<String>,
        /// Location substring, e.g. "mumbai"
        #[arg(short, long)]
        location: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search the IPC section catalog
    Ipc {
        /// Free-text query over identifiers, titles, and simplified text
        #[arg(short, long)]
        query: Option<String>,
        /// Exact offence category, e.g. "Against Person"
        #[arg(short, long)]
        category: Option<String>,
        /// Show full detail for one section identifier
        #[arg(short, long)]
        section: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run the simulated document analysis
    Analyze {
        /// Document file to analyze
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Raw document text to analyze
        #[arg(long)]
        text: Option<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lawgorithm=info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = load_settings().await;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| settings.host.clone());
            let port = port.unwrap_or(settings.port);
            server::serve(&settings, &host, port).await?;
        }
        Commands::Lawyers {
            query,
            category,
            location,
            json,
        } => {
            list_lawyers(query, category, location, json).await?;
        }
        Commands::Ipc {
            query,
            category,
            section,
            json,
        } => {
            list_sections(query, category, section, json).await?;
        }
        Commands::Analyze { file, text, json } => {
            analyze(&settings, file, text, json).await?;
        }
    }

    Ok(())
}

fn criteria_from(
    query: Option<String>,
    category: Option<String>,
    location: Option<String>,
) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    if let Some(query) = query {
        criteria.set_query(query);
    }
    criteria.category = category.filter(|c| !c.is_empty());
    if let Some(location) = location {
        criteria.set_location(location);
    }
    criteria
}

async fn list_lawyers(
    query: Option<String>,
    category: Option<String>,
    location: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let directory = StaticLawyerDirectory::new();
    let lawyers = directory.list().await?;
    let criteria = criteria_from(query, category, location);
    let visible = filter_entries(&lawyers, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No lawyers found matching your criteria.");
        return Ok(());
    }

    for lawyer in visible {
        println!(
            "{}  {}",
            style(&lawyer.name).bold(),
            style(format!("({})", lawyer.location)).dim()
        );
        println!(
            "    {} | {} years | \u{2605} {} ({} reviews) | \u{20B9}{}/hour",
            lawyer.specializations.join(", "),
            lawyer.experience_years,
            lawyer.rating,
            lawyer.reviews,
            lawyer.hourly_rate
        );
        println!("    {}", style(&lawyer.availability).green());
    }
    Ok(())
}

async fn list_sections(
    query: Option<String>,
    category: Option<String>,
    section: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = StaticIpcCatalog::new();

    if let Some(id) = section {
        let Some(entry) = catalog.get(&id).await? else {
            anyhow::bail!("no IPC section {id} in the catalog");
        };
        if json {
            println!("{}", serde_json::to_string_pretty(&entry)?);
            return Ok(());
        }
        println!("{}", style(format!("Section {} - {}", entry.section, entry.title)).bold());
        println!("\n{}\n", entry.simplified_text);
        println!("{} {}", style("Punishment:").yellow(), entry.punishment);
        println!("{}", style("Examples:").bold());
        for example in &entry.examples {
            println!("  - {example}");
        }
        return Ok(());
    }

    let sections = catalog.list().await?;
    let criteria = criteria_from(query, category, None);
    let visible = filter_entries(&sections, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No sections found matching your criteria.");
        return Ok(());
    }

    for entry in visible {
        println!(
            "{}  {}  {}",
            style(format!("Section {}", entry.section)).bold(),
            entry.title,
            style(format!("[{}]", entry.category)).dim()
        );
    }
    Ok(())
}

async fn analyze(
    settings: &Settings,
    file: Option<PathBuf>,
    text: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let input = match (file, text) {
        (Some(path), _) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            DocumentInput::file(name, bytes)
        }
        (None, Some(text)) => DocumentInput::text(text),
        (None, None) => anyhow::bail!("provide --file or --text"),
    };

    let analyzer = DocumentAnalyzer::new(AnalyzerConfig {
        delay: Duration::from_millis(settings.analysis_delay_ms),
        max_document_bytes: settings.max_document_bytes,
    });

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analyzing your document with AI...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let report = analyzer.analyze(input).await;
    spinner.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Document Summary").bold().underlined());
    println!("{}\n", report.summary);

    println!("{}", style("Key Points").bold().underlined());
    for point in &report.key_points {
        println!("  - {point}");
    }

    println!("\n{}", style("Important Deadlines").bold().underlined());
    for deadline in &report.deadlines {
        println!(
            "  - {} ({}) [{} priority]",
            deadline.item,
            deadline.due,
            deadline.priority.label()
        );
    }

    println!("\n{}", style("Legal Obligations").bold().underlined());
    for obligation in &report.legal_obligations {
        println!("  - {obligation}");
    }

    println!("\n{}", style("Potential Risk Areas").bold().underlined());
    for risk in &report.risk_areas {
        println!("  - {}", style(risk).red());
    }

    Ok(())
}
