// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use keyword_tags::config::DEFAULT_CONFIG_PATH;
use keyword_tags::utils::logging::{format_success, format_warning};
use keyword_tags::{
    Config, JsonExporter, KeywordExtractor, KeywordReport, OutputFormat, executable_dir,
    load_document, report, resolve_path,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "keyword_tags")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Print the top TF-IDF keywords of a Chinese text file", long_about = None)]
struct Cli {
    /// Text file to analyse. Defaults to input.file_name next to the executable
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    #[arg(
        short,
        long,
        env = "KEYWORD_TAGS_CONFIG",
        value_name = "FILE",
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Number of TF-IDF keywords to keep
    #[arg(long, value_name = "N")]
    top_k: Option<usize>,

    /// Number of TextRank keywords to keep
    #[arg(long, value_name = "N")]
    graph_top_k: Option<usize>,

    /// Also print the TextRank keywords
    #[arg(long)]
    graph: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write a JSON report of the run into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    #[arg(long, requires = "export")]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    keyword_tags::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = load_config(&cli.config)?;

    if let Some(top_k) = cli.top_k {
        config.frequency.top_k = top_k;
    }
    if let Some(top_k) = cli.graph_top_k {
        config.graph.top_k = top_k;
    }
    if cli.graph {
        config.output.report_graph = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let path = match cli.file {
        Some(path) => path,
        None => {
            let base_dir = match &config.input.base_dir {
                Some(dir) => dir.clone(),
                None => executable_dir().context("Failed to locate the executable directory")?,
            };
            resolve_path(&base_dir, &config.input.file_name)
        }
    };

    info!("Reading {}", path.display());
    let document = load_document(&path)
        .with_context(|| format!("Failed to load document {}", path.display()))?;

    if document.is_blank() {
        eprintln!(
            "{}",
            format_warning(&format!("{} has no text to rank", path.display()))
        );
    }

    let extractor = KeywordExtractor::new(&config.segmentation, config.graph.span)
        .context("Failed to initialise keyword extraction")?;

    let frequency = extractor
        .extract_frequency_keywords(&document, &config.frequency)
        .context("TF-IDF keyword extraction failed")?;
    let graph = extractor
        .extract_graph_keywords(&document, &config.graph.ranking())
        .context("TextRank keyword extraction failed")?;

    debug!(
        "Ranked {} TF-IDF and {} TextRank keywords",
        frequency.len(),
        graph.len()
    );

    let shown_graph = config.output.report_graph.then_some(&graph);
    report(
        &mut io::stdout().lock(),
        &frequency,
        shown_graph,
        config.output.format,
    )
    .context("Failed to write keywords to stdout")?;

    if let Some(dir) = cli.export {
        let exporter = JsonExporter::new(dir).context("Failed to prepare export directory")?;
        let exported = exporter
            .export(&KeywordReport::new(&document, &frequency, &graph), cli.pretty)
            .context("Failed to export keyword report")?;
        eprintln!(
            "{}",
            format_success(&format!("Report written to {}", exported.display()))
        );
    }

    Ok(())
}

/// An absent default config file falls back to built-in settings; an absent
/// file the user named explicitly is an error.
fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        info!("Loading configuration from: {}", path.display());
        return Config::load(Some(path)).context("Failed to load configuration");
    }

    if path != Path::new(DEFAULT_CONFIG_PATH) {
        bail!("Config file {} not found", path.display());
    }

    debug!(
        "Config file {} not found, using default configuration",
        path.display()
    );
    Config::load(None).context("Failed to load configuration")
}
