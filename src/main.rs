use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use rsalgoscan::extractor::ScriptFetcher;
use rsalgoscan::{
    AlgorithmDetector, Category, ConfigManager, Fragment, Message, PageSource, ResultsStore,
    ScanConfig, ScanResult, StaticFragments, default_registry,
};

#[derive(Parser)]
#[command(name = "rsalgoscan")]
#[command(about = "Detect algorithms and data structures in web page source code", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a page URL or a local file
    Scan {
        /// http(s) URL, .html/.htm page, or any source file
        target: String,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,

        /// Do not fetch external <script src> resources
        #[arg(long)]
        no_external: bool,

        /// HTTP timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,

        /// Maximum fragment length in bytes
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// List the built-in rules by category
    Rules,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            target,
            json,
            no_external,
            timeout,
            max_len,
        } => {
            let config = ConfigManager::custom()
                .fetch_external_scripts(!no_external)
                .http_timeout(timeout)
                .max_fragment_len(max_len.unwrap_or(ScanConfig::DEFAULT_MAX_FRAGMENT_LEN))
                .verbose(cli.verbose)
                .build();
            scan(&target, config, json).await
        }
        Commands::Rules => list_rules(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn scan(target: &str, config: ScanConfig, json: bool) -> Result<()> {
    let detector = AlgorithmDetector::new(config.clone())?;

    let result = if target.starts_with("http://") || target.starts_with("https://") {
        let url = Url::parse(target).with_context(|| format!("invalid URL: {}", target))?;
        let fetcher = ScriptFetcher::new(config.http_timeout)?;
        let html = fetcher
            .fetch(url.clone())
            .await
            .with_context(|| format!("failed to fetch {}", url))?;
        info!("页面获取成功：{}，{} 字节", url, html.len());
        detector
            .scan_source(&PageSource::new(html, Some(url), config))
            .await?
    } else {
        let path = Path::new(target);
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;
        if is_html_file(path) {
            detector.scan_source(&PageSource::new(text, None, config)).await?
        } else {
            let source = StaticFragments::new(vec![Fragment::code_block(text)]);
            detector.scan_source(&source).await?
        }
    };

    // 经由结果存储交付：上报后再拉取当前结果
    let store = ResultsStore::new();
    store.handle(Message::AlgorithmsDetected { algorithms: result });
    let current = store
        .handle(Message::GetAlgorithms)
        .and_then(|reply| reply.algorithms)
        .unwrap_or_default();

    if json {
        println!("{}", serde_json::to_string_pretty(&current)?);
    } else {
        render(&current);
    }
    Ok(())
}

fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
        .unwrap_or(false)
}

fn render(result: &ScanResult) {
    if result.is_empty() {
        println!("No algorithms detected");
        return;
    }

    for group in result.groups() {
        println!("{} ({})", group.category, group.items.len());
        for item in &group.items {
            let finding = item.finding;
            println!("  [{}] {}", item.index, finding.name);
            println!("      complexity:   {}", finding.description.complexity);
            println!("      description:  {}", finding.description.summary);
            println!("      optimization: {}", finding.description.optimization_hint);
            for line in finding.snippet.lines() {
                println!("      | {}", line);
            }
        }
        println!();
    }
}

fn list_rules() -> Result<()> {
    let registry = default_registry()?;
    for category in Category::ALL {
        let rules: Vec<_> = registry.by_category(category).collect();
        if rules.is_empty() {
            continue;
        }
        println!("{}", category);
        for rule in rules {
            println!("  {:<22} {}", rule.id, rule.display_name);
        }
    }
    Ok(())
}
